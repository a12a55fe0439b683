use crate::{domain::requests::flight::CreateFlightRequest, model::flight::Flight as FlightModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynFlightCommandRepository = Arc<dyn FlightCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait FlightCommandRepositoryTrait {
    async fn create_flight(
        &self,
        req: &CreateFlightRequest,
    ) -> Result<FlightModel, RepositoryError>;
    async fn update_flight(&self, flight: &FlightModel) -> Result<FlightModel, RepositoryError>;
    async fn delete_flight(&self, id: i64) -> Result<(), RepositoryError>;
}
