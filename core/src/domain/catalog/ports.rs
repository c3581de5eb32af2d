use crate::domain::{
    catalog::entities::FoodCatalogEntry, common::entities::app_errors::CoreError,
    diary::entities::LineItem,
};

/// Read-only food table, iterated in declaration order.
pub trait FoodCatalog: Send + Sync {
    fn entries(&self) -> &[FoodCatalogEntry];

    fn find_by_id(&self, food_id: &str) -> Option<&FoodCatalogEntry> {
        self.entries().iter().find(|entry| entry.id == food_id)
    }

    /// First entry, in declaration order, whose name contains or is contained by `name`.
    /// Falls back to the first entry sharing a word stem when no containment match exists.
    fn find_first_match(&self, name: &str) -> Option<&FoodCatalogEntry> {
        let entries = self.entries();

        entries
            .iter()
            .find(|entry| entry.matches_name(name))
            .or_else(|| entries.iter().find(|entry| entry.shares_stem_with(name)))
    }
}

/// Service trait for browsing the catalog and adding manual portions
pub trait CatalogService: Send + Sync {
    fn search_foods(&self, query: &str) -> Vec<FoodCatalogEntry>;

    fn get_food(&self, food_id: &str) -> Result<FoodCatalogEntry, CoreError>;

    fn portion_from_catalog(&self, food_id: &str, grams: f64) -> Result<LineItem, CoreError>;
}
