pub mod in_memory_diary_repository;
