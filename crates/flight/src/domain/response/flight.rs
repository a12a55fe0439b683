use crate::model::flight::Flight as FlightModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct FlightResponse {
    pub id: i64,
    pub number: i64,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub price: f64,
}

impl From<FlightModel> for FlightResponse {
    fn from(value: FlightModel) -> Self {
        FlightResponse {
            id: value.id,
            number: value.number,
            source: value.source,
            destination: value.destination,
            price: value.price,
        }
    }
}
