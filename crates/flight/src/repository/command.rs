use crate::{
    abstract_trait::flight::repository::FlightCommandRepositoryTrait,
    domain::requests::flight::CreateFlightRequest, model::flight::Flight as FlightModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct FlightCommandRepository {
    db: ConnectionPool,
}

impl FlightCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FlightCommandRepositoryTrait for FlightCommandRepository {
    async fn create_flight(
        &self,
        req: &CreateFlightRequest,
    ) -> Result<FlightModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, FlightModel>(
            r#"
            INSERT INTO flights (number, source, destination, price)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, number, source, destination, price
            "#,
        )
        .bind(req.number)
        .bind(&req.source)
        .bind(&req.destination)
        .bind(req.price.unwrap_or(0.0))
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create flight: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created flight ID {} (number {})", result.id, result.number);
        Ok(result)
    }

    async fn update_flight(&self, flight: &FlightModel) -> Result<FlightModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, FlightModel>(
            r#"
            UPDATE flights
            SET number = ?2,
                source = ?3,
                destination = ?4,
                price = ?5
            WHERE id = ?1
            RETURNING id, number, source, destination, price
            "#,
        )
        .bind(flight.id)
        .bind(flight.number)
        .bind(&flight.source)
        .bind(&flight.destination)
        .bind(flight.price)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update flight ID {}: {:?}", flight.id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated flight ID {}", result.id);
        Ok(result)
    }

    async fn delete_flight(&self, id: i64) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting flight: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM flights
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete flight {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("✅ Flight ID {} deleted", id);
        Ok(())
    }
}
