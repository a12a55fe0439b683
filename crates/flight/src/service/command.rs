use crate::{
    abstract_trait::flight::{
        repository::{DynFlightCommandRepository, DynFlightQueryRepository},
        service::FlightCommandServiceTrait,
    },
    domain::{
        requests::flight::{CreateFlightRequest, UpdateFlightRequest},
        response::flight::FlightResponse,
    },
    model::flight::Flight as FlightModel,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::{error, info};

#[derive(Clone)]
pub struct FlightCommandService {
    query: DynFlightQueryRepository,
    command: DynFlightCommandRepository,
}

impl FlightCommandService {
    pub fn new(query: DynFlightQueryRepository, command: DynFlightCommandRepository) -> Self {
        Self { query, command }
    }

    async fn find_existing(&self, id: i64) -> Result<FlightModel, ServiceError> {
        match self.query.find_by_id(id).await {
            Ok(Some(flight)) => Ok(flight),
            Ok(None) => {
                info!("🔍 Flight with ID {} not found", id);
                Err(ServiceError::NotFound("Flight not found".to_string()))
            }
            Err(err) => {
                error!("❌ Failed to fetch flight ID {}: {err:?}", id);
                Err(ServiceError::Repo(err))
            }
        }
    }
}

#[async_trait]
impl FlightCommandServiceTrait for FlightCommandService {
    async fn create_flight(
        &self,
        req: &CreateFlightRequest,
    ) -> Result<FlightResponse, ServiceError> {
        info!("🏗️ Creating new flight: {:?}", req.number);

        let flight = match self.command.create_flight(req).await {
            Ok(flight) => flight,
            Err(err) => {
                error!("❌ Failed to create flight: {err:?}");
                return Err(ServiceError::Repo(err));
            }
        };

        info!(
            "✅ Flight created successfully: number {} (ID: {})",
            flight.number, flight.id
        );

        Ok(FlightResponse::from(flight))
    }

    async fn update_flight(
        &self,
        req: &UpdateFlightRequest,
    ) -> Result<FlightResponse, ServiceError> {
        let id = req
            .id
            .ok_or_else(|| ServiceError::Internal("Missing flight id for update".to_string()))?;

        info!("✏️ Updating flight with ID: {}", id);

        let existing = self.find_existing(id).await?;

        // absent fields keep their stored values, an explicit null clears source/destination
        let merged = FlightModel {
            id: existing.id,
            number: req.number.unwrap_or(existing.number),
            source: match &req.source {
                Some(source) => source.clone(),
                None => existing.source,
            },
            destination: match &req.destination {
                Some(destination) => destination.clone(),
                None => existing.destination,
            },
            price: req.price.unwrap_or(existing.price),
        };

        let flight = match self.command.update_flight(&merged).await {
            Ok(flight) => flight,
            Err(RepositoryError::NotFound) => {
                info!("🔍 Flight with ID {} not found", id);
                return Err(ServiceError::NotFound("Flight not found".to_string()));
            }
            Err(err) => {
                error!("❌ Failed to update flight ID {}: {err:?}", id);
                return Err(ServiceError::Repo(err));
            }
        };

        info!(
            "✅ Flight updated successfully: number {} (ID: {})",
            flight.number, flight.id
        );

        Ok(FlightResponse::from(flight))
    }

    async fn delete_flight(&self, id: i64) -> Result<(), ServiceError> {
        info!("🗑️ Deleting flight with ID: {}", id);

        self.find_existing(id).await?;

        match self.command.delete_flight(id).await {
            Ok(()) => {
                info!("✅ Flight ID {} deleted", id);
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                info!("🔍 Flight with ID {} not found", id);
                Err(ServiceError::NotFound("Flight not found".to_string()))
            }
            Err(err) => {
                error!("❌ Failed to delete flight ID {}: {err:?}", id);
                Err(ServiceError::Repo(err))
            }
        }
    }
}
