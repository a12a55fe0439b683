use crate::{
    abstract_trait::flight::{
        repository::DynFlightQueryRepository, service::FlightQueryServiceTrait,
    },
    domain::response::flight::FlightResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct FlightQueryService {
    query: DynFlightQueryRepository,
}

impl FlightQueryService {
    pub fn new(query: DynFlightQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl FlightQueryServiceTrait for FlightQueryService {
    async fn find_all(&self) -> Result<Vec<FlightResponse>, ServiceError> {
        let flights = match self.query.find_all().await {
            Ok(flights) => flights,
            Err(err) => {
                error!("❌ Failed to fetch flights: {err:?}");
                return Err(ServiceError::Repo(err));
            }
        };

        info!("✅ Fetched {} flights", flights.len());

        Ok(flights.into_iter().map(FlightResponse::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<FlightResponse, ServiceError> {
        let flight = match self.query.find_by_id(id).await {
            Ok(Some(flight)) => flight,
            Ok(None) => {
                info!("🔍 Flight with ID {} not found", id);
                return Err(ServiceError::NotFound("Flight not found".to_string()));
            }
            Err(err) => {
                error!("❌ Failed to fetch flight ID {}: {err:?}", id);
                return Err(ServiceError::Repo(err));
            }
        };

        Ok(FlightResponse::from(flight))
    }
}
