pub mod catalog;
pub mod diary;
pub mod llm;
