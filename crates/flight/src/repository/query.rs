use crate::{
    abstract_trait::flight::repository::FlightQueryRepositoryTrait,
    model::flight::Flight as FlightModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct FlightQueryRepository {
    db: ConnectionPool,
}

impl FlightQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FlightQueryRepositoryTrait for FlightQueryRepository {
    async fn find_all(&self) -> Result<Vec<FlightModel>, RepositoryError> {
        info!("🔍 Fetching all flights");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let flights = sqlx::query_as::<_, FlightModel>(
            r#"
            SELECT id, number, source, destination, price
            FROM flights
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch flights: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(flights)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<FlightModel>, RepositoryError> {
        info!("🆔 Fetching flight by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, FlightModel>(
            r#"
            SELECT id, number, source, destination, price
            FROM flights
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
