use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFlightRequest {
    #[schema(example = 747)]
    pub number: Option<i64>,

    #[schema(example = "Chennai")]
    pub source: Option<String>,

    #[schema(example = "London")]
    pub destination: Option<String>,

    #[schema(example = 42000.0)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateFlightRequest {
    pub id: Option<i64>,

    #[schema(example = 747)]
    pub number: Option<i64>,

    #[serde(default, deserialize_with = "shared::utils::double_option")]
    #[schema(example = "Chennai")]
    pub source: Option<Option<String>>,

    #[serde(default, deserialize_with = "shared::utils::double_option")]
    #[schema(example = "London")]
    pub destination: Option<Option<String>>,

    #[schema(example = 42000.0)]
    pub price: Option<f64>,
}
