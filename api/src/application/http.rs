pub mod catalog;
pub mod diary;
pub mod food_parsing;
pub mod goals;
pub mod health;
pub mod server;
