use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::product::ProductResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = match self.query.find_all().await {
            Ok(products) => products,
            Err(err) => {
                error!("❌ Failed to fetch products: {err:?}");
                return Err(ServiceError::Repo(err));
            }
        };

        info!("✅ Fetched {} products", products.len());

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<ProductResponse, ServiceError> {
        let product = match self.query.find_by_id(id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                info!("🔍 Product with ID {} not found", id);
                return Err(ServiceError::NotFound("Product not found".to_string()));
            }
            Err(err) => {
                error!("❌ Failed to fetch product ID {}: {err:?}", id);
                return Err(ServiceError::Repo(err));
            }
        };

        Ok(ProductResponse::from(product))
    }
}
