use crate::domain::{
    catalog::ports::FoodCatalog, diary::entities::LineItem,
    food_parsing::entities::ParsedCandidate,
};

/// Resolves each candidate to a macro-computed line item, or a zero-macro placeholder
/// when nothing in the catalog matches. Order is preserved and nothing is dropped.
pub fn match_candidates<FC>(catalog: &FC, candidates: &[ParsedCandidate]) -> Vec<LineItem>
where
    FC: FoodCatalog + ?Sized,
{
    candidates
        .iter()
        .map(|candidate| match catalog.find_first_match(&candidate.name) {
            Some(entry) => LineItem::from_catalog(entry, candidate.grams),
            None => LineItem::unmatched(candidate.name.clone(), candidate.grams),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{diary::entities::UNKNOWN_PRODUCT_ID, nutrition::MacroSet},
        infrastructure::catalog::StaticFoodCatalog,
    };

    #[test]
    fn test_chicken_resolves_to_chicken_breast() {
        let catalog = StaticFoodCatalog::default();

        let items = match_candidates(&catalog, &[ParsedCandidate::new("курица", 150.0, 0.9)]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, "2");
        assert_eq!(items[0].name, "Куриная грудка (вареная)");
        assert_eq!(items[0].macros, MacroSet::new(247.5, 46.5, 5.4, 0.0));
    }

    #[test]
    fn test_unknown_food_keeps_name_and_grams_with_zero_macros() {
        let catalog = StaticFoodCatalog::default();

        let items = match_candidates(
            &catalog,
            &[ParsedCandidate::new("неизвестный продукт", 80.0, 0.5)],
        );

        assert_eq!(items[0].product_id, UNKNOWN_PRODUCT_ID);
        assert_eq!(items[0].name, "неизвестный продукт");
        assert_eq!(items[0].grams, 80.0);
        assert!(items[0].macros.is_zero());
    }

    #[test]
    fn test_order_is_preserved_and_uids_are_unique() {
        let catalog = StaticFoodCatalog::default();

        let items = match_candidates(
            &catalog,
            &[
                ParsedCandidate::new("банан", 120.0, 0.9),
                ParsedCandidate::new("пицца", 300.0, 0.6),
                ParsedCandidate::new("яблоко", 150.0, 0.9),
            ],
        );

        let ids: Vec<_> = items.iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["6", UNKNOWN_PRODUCT_ID, "1"]);
        assert_ne!(items[0].uid, items[2].uid);
    }
}
