use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Smartphone")]
    pub name: Option<String>,

    #[schema(example = "Latest model, 128GB storage")]
    pub description: Option<String>,

    #[schema(example = 100)]
    pub stock: Option<i64>,

    #[schema(example = 99.99)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub id: Option<i64>,

    #[schema(example = "Smartphone")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "shared::utils::double_option")]
    #[schema(example = "Latest model, 128GB storage")]
    pub description: Option<Option<String>>,

    #[schema(example = 100)]
    pub stock: Option<i64>,

    #[schema(example = 99.99)]
    pub price: Option<f64>,
}
