use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::product::ProductResponse,
    },
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self { query, command }
    }

    async fn find_existing(&self, id: i64) -> Result<ProductModel, ServiceError> {
        match self.query.find_by_id(id).await {
            Ok(Some(product)) => Ok(product),
            Ok(None) => {
                info!("🔍 Product with ID {} not found", id);
                Err(ServiceError::NotFound("Product not found".to_string()))
            }
            Err(err) => {
                error!("❌ Failed to fetch product ID {}: {err:?}", id);
                Err(ServiceError::Repo(err))
            }
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Creating new product: {:?}", req.name);

        let product = match self.command.create_product(req).await {
            Ok(product) => product,
            Err(err) => {
                error!("❌ Failed to create product: {err:?}");
                return Err(ServiceError::Repo(err));
            }
        };

        info!(
            "✅ Product created successfully: {} (ID: {})",
            product.name, product.id
        );

        Ok(ProductResponse::from(product))
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let id = req
            .id
            .ok_or_else(|| ServiceError::Internal("Missing product id for update".to_string()))?;

        info!("✏️ Updating product with ID: {}", id);

        let existing = self.find_existing(id).await?;

        // absent fields keep their stored values, an explicit null clears description
        let merged = ProductModel {
            id: existing.id,
            name: req.name.clone().unwrap_or(existing.name),
            description: match &req.description {
                Some(description) => description.clone(),
                None => existing.description,
            },
            stock: req.stock.unwrap_or(existing.stock),
            price: req.price.unwrap_or(existing.price),
        };

        let product = match self.command.update_product(&merged).await {
            Ok(product) => product,
            Err(RepositoryError::NotFound) => {
                info!("🔍 Product with ID {} not found", id);
                return Err(ServiceError::NotFound("Product not found".to_string()));
            }
            Err(err) => {
                error!("❌ Failed to update product ID {}: {err:?}", id);
                return Err(ServiceError::Repo(err));
            }
        };

        info!(
            "✅ Product updated successfully: {} (ID: {})",
            product.name, product.id
        );

        Ok(ProductResponse::from(product))
    }

    async fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product with ID: {}", id);

        self.find_existing(id).await?;

        match self.command.delete_product(id).await {
            Ok(()) => {
                info!("✅ Product ID {} deleted", id);
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                info!("🔍 Product with ID {} not found", id);
                Err(ServiceError::NotFound("Product not found".to_string()))
            }
            Err(err) => {
                error!("❌ Failed to delete product ID {}: {err:?}", id);
                Err(ServiceError::Repo(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    };
    use std::sync::Arc;

    struct SeededQueryRepository;

    #[async_trait]
    impl ProductQueryRepositoryTrait for SeededQueryRepository {
        async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<ProductModel>, RepositoryError> {
            Ok(Some(ProductModel {
                id,
                name: "Gadget".to_string(),
                description: None,
                stock: 2,
                price: 4.5,
            }))
        }
    }

    // the row resolves on read but is gone by the time a write lands
    struct VanishingCommandRepository;

    #[async_trait]
    impl ProductCommandRepositoryTrait for VanishingCommandRepository {
        async fn create_product(
            &self,
            _req: &CreateProductRequest,
        ) -> Result<ProductModel, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn update_product(
            &self,
            _product: &ProductModel,
        ) -> Result<ProductModel, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn delete_product(&self, _id: i64) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound)
        }
    }

    fn service() -> ProductCommandService {
        ProductCommandService::new(
            Arc::new(SeededQueryRepository),
            Arc::new(VanishingCommandRepository),
        )
    }

    #[tokio::test]
    async fn update_of_a_concurrently_deleted_row_is_the_entity_not_found() {
        let req = UpdateProductRequest {
            id: Some(1),
            name: Some("Gadget Mk2".to_string()),
            description: None,
            stock: None,
            price: None,
        };

        let err = service().update_product(&req).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Product not found"));
    }

    #[tokio::test]
    async fn delete_of_a_concurrently_deleted_row_is_the_entity_not_found() {
        let err = service().delete_product(1).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Product not found"));
    }
}
