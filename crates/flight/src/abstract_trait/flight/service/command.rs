use crate::domain::{
    requests::flight::{CreateFlightRequest, UpdateFlightRequest},
    response::flight::FlightResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynFlightCommandService = Arc<dyn FlightCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait FlightCommandServiceTrait {
    async fn create_flight(
        &self,
        req: &CreateFlightRequest,
    ) -> Result<FlightResponse, ServiceError>;
    async fn update_flight(
        &self,
        req: &UpdateFlightRequest,
    ) -> Result<FlightResponse, ServiceError>;
    async fn delete_flight(&self, id: i64) -> Result<(), ServiceError>;
}
