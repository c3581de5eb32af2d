use crate::application::http::{
    catalog::router::CatalogApiDoc, diary::router::DiaryApiDoc,
    food_parsing::router::FoodParsingApiDoc, goals::router::GoalsApiDoc, health::HealthApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Macronote API"
    ),
    nest(
        (path = "/catalog", api = CatalogApiDoc),
        (path = "/food-parsing", api = FoodParsingApiDoc),
        (path = "/diary", api = DiaryApiDoc),
        (path = "", api = GoalsApiDoc),
        (path = "", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
