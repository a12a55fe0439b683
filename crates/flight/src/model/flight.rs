use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Flight {
    pub id: i64,
    pub number: i64,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub price: f64,
}
