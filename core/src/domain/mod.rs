pub mod catalog;
pub mod common;
pub mod diary;
pub mod food_parsing;
pub mod nutrition;
