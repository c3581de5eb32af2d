use crate::domain::{
    catalog::{
        entities::FoodCatalogEntry,
        ports::{CatalogService, FoodCatalog},
    },
    common::{entities::app_errors::CoreError, services::Service},
    diary::{entities::LineItem, ports::DiaryRepository},
    food_parsing::ports::LLMClient,
};

impl<FC, DR, LLM> CatalogService for Service<FC, DR, LLM>
where
    FC: FoodCatalog,
    DR: DiaryRepository,
    LLM: LLMClient,
{
    fn search_foods(&self, query: &str) -> Vec<FoodCatalogEntry> {
        let query = query.trim().to_lowercase();

        self.food_catalog
            .entries()
            .iter()
            .filter(|entry| query.is_empty() || entry.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    fn get_food(&self, food_id: &str) -> Result<FoodCatalogEntry, CoreError> {
        self.food_catalog
            .find_by_id(food_id)
            .cloned()
            .ok_or(CoreError::NotFound)
    }

    fn portion_from_catalog(&self, food_id: &str, grams: f64) -> Result<LineItem, CoreError> {
        let entry = self
            .food_catalog
            .find_by_id(food_id)
            .ok_or(CoreError::NotFound)?;

        Ok(LineItem::from_catalog(entry, grams))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        domain::{food_parsing::ports::MockLLMClient, food_parsing::policies::ParserPolicy},
        infrastructure::{
            catalog::StaticFoodCatalog, diary::InMemoryDiaryRepository,
        },
    };

    fn service() -> Service<StaticFoodCatalog, InMemoryDiaryRepository, MockLLMClient> {
        Service::new(
            Arc::new(StaticFoodCatalog::default()),
            Arc::new(InMemoryDiaryRepository::default()),
            Arc::new(MockLLMClient::new()),
            ParserPolicy::disabled(),
        )
    }

    #[test]
    fn test_blank_query_returns_whole_catalog() {
        let service = service();
        let all = service.search_foods("   ");
        assert_eq!(all.len(), 20);
        assert_eq!(all[0].name, "Яблоко");
        assert_eq!(all[19].name, "Сосиски");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let service = service();
        let found = service.search_foods("ХЛЕБ");
        let names: Vec<_> = found.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Хлеб белый", "Хлеб черный"]);

        assert!(service.search_foods("пицца").is_empty());
    }

    #[test]
    fn test_get_food() {
        let service = service();
        assert_eq!(service.get_food("6").unwrap().name, "Банан");
        assert_eq!(service.get_food("99"), Err(CoreError::NotFound));
    }

    #[test]
    fn test_portion_from_catalog() {
        let service = service();

        let item = service.portion_from_catalog("2", 150.0).unwrap();
        assert_eq!(item.product_id, "2");
        assert_eq!(item.name, "Куриная грудка (вареная)");
        assert_eq!(item.grams, 150.0);
        assert_eq!(item.macros.kcal, 247.5);

        let clamped = service.portion_from_catalog("1", -20.0).unwrap();
        assert_eq!(clamped.grams, 0.0);
        assert!(clamped.macros.is_zero());

        assert_eq!(
            service.portion_from_catalog("404", 100.0).unwrap_err(),
            CoreError::NotFound
        );
    }
}
