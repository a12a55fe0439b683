use crate::model::flight::Flight as FlightModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynFlightQueryRepository = Arc<dyn FlightQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait FlightQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<FlightModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<FlightModel>, RepositoryError>;
}
