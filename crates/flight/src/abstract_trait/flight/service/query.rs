use crate::domain::response::flight::FlightResponse;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynFlightQueryService = Arc<dyn FlightQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait FlightQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<FlightResponse>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<FlightResponse, ServiceError>;
}
