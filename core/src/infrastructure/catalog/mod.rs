pub mod static_catalog;

pub use static_catalog::StaticFoodCatalog;
