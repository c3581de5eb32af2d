pub mod repositories;

pub use repositories::in_memory_diary_repository::InMemoryDiaryRepository;
