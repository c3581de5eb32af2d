use crate::domain::{
    catalog::{entities::FoodCatalogEntry, ports::FoodCatalog},
    nutrition::MacroSet,
};

/// (id, name, kcal, protein, fat, carbs) per 100 g.
const FOOD_TABLE: [(&str, &str, f64, f64, f64, f64); 20] = [
    ("1", "Яблоко", 52.0, 0.3, 0.2, 14.0),
    ("2", "Куриная грудка (вареная)", 165.0, 31.0, 3.6, 0.0),
    ("3", "Овсянка (сухая)", 380.0, 13.0, 7.0, 67.0),
    ("4", "Рис белый (сухой)", 360.0, 7.0, 0.6, 80.0),
    ("5", "Творог 5%", 145.0, 17.0, 5.0, 3.0),
    ("6", "Банан", 89.0, 1.1, 0.3, 23.0),
    ("7", "Авокадо", 160.0, 2.0, 15.0, 9.0),
    ("8", "Яйцо куриное", 155.0, 13.0, 11.0, 1.1),
    ("9", "Гречка (сухая)", 340.0, 13.0, 3.4, 72.0),
    ("10", "Семга (запеч.)", 208.0, 20.0, 13.0, 0.0),
    ("11", "Хлеб белый", 265.0, 9.0, 3.0, 49.0),
    ("12", "Хлеб черный", 250.0, 8.0, 3.0, 45.0),
    ("13", "Сыр", 350.0, 25.0, 28.0, 2.0),
    ("14", "Молоко", 60.0, 3.0, 3.0, 5.0),
    ("15", "Кофе", 2.0, 0.0, 0.0, 0.0),
    ("16", "Сок апельсиновый", 45.0, 0.0, 0.0, 11.0),
    ("17", "Печенье", 450.0, 6.0, 18.0, 65.0),
    ("18", "Шоколад", 546.0, 5.0, 31.0, 61.0),
    ("19", "Колбаса", 300.0, 12.0, 28.0, 1.0),
    ("20", "Сосиски", 250.0, 11.0, 22.0, 2.0),
];

/// The built-in food table, loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct StaticFoodCatalog {
    entries: Vec<FoodCatalogEntry>,
}

impl StaticFoodCatalog {
    pub fn new(entries: Vec<FoodCatalogEntry>) -> Self {
        Self { entries }
    }
}

impl Default for StaticFoodCatalog {
    fn default() -> Self {
        Self::new(
            FOOD_TABLE
                .iter()
                .map(|&(id, name, kcal, protein, fat, carbs)| {
                    FoodCatalogEntry::new(id, name, MacroSet::new(kcal, protein, fat, carbs))
                })
                .collect(),
        )
    }
}

impl FoodCatalog for StaticFoodCatalog {
    fn entries(&self) -> &[FoodCatalogEntry] {
        &self.entries
    }
}
