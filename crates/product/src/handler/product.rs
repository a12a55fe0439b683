use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::product::ProductResponse,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

// a non-numeric id never names a row, so it reads as missing
fn parse_id(raw: &str) -> Result<i64, HttpError> {
    raw.parse::<i64>()
        .map_err(|_| HttpError::NotFound("Product not found".to_string()))
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "Product",
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.find_all().await?;
    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;
    let product = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    Json(body): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = String, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<String>,
    Json(mut body): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;
    body.id = Some(id);
    let product = service.update_product(&body).await?;
    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = serde_json::Value),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;
    service.delete_product(id).await?;

    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/products", get(get_products))
        .route("/products/{id}", get(get_product))
        .route("/products", post(create_product))
        .route("/products/{id}", put(update_product))
        .route("/products/{id}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{handler::AppRouter, state::AppState, store};
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::Request,
    };
    use serde_json::Value;
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::ServiceExt;

    async fn setup() -> Router {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        store::init(&pool).await.unwrap();

        AppRouter::build(Arc::new(AppState::new(pool)))
    }

    async fn call(
        router: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        let request = match body {
            Some(json_body) => {
                builder = builder.header("content-type", "application/json");
                builder.body(Body::from(json_body.to_string())).unwrap()
            }
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    // ── listing and probing ──

    #[tokio::test]
    async fn fresh_store_lists_the_seeded_products() {
        let app = setup().await;

        let (status, body) = call(&app, "GET", "/products", None).await;

        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "Sample Product A");
        assert_eq!(rows[0]["description"], "Demo product A");
        assert_eq!(rows[0]["stock"], 10);
        assert_eq!(rows[0]["price"], 19.99);
        assert_eq!(rows[1]["name"], "Sample Product B");
        assert_eq!(rows[1]["price"], 49.50);
    }

    #[tokio::test]
    async fn emptied_store_lists_as_an_empty_array() {
        let app = setup().await;

        call(&app, "DELETE", "/products/1", None).await;
        call(&app, "DELETE", "/products/2", None).await;

        let (status, body) = call(&app, "GET", "/products", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn root_probe_reports_the_service() {
        let app = setup().await;

        let (status, body) = call(&app, "GET", "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true, "service": "Products API" }));
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = setup().await;

        let (status, body) = call(&app, "GET", "/api-docs/openapi.json", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["openapi"].is_string());
        assert!(body["paths"]["/products"].is_object());
    }

    // ── create ──

    #[tokio::test]
    async fn created_product_round_trips_through_fetch() {
        let app = setup().await;

        let (status, created) = call(
            &app,
            "POST",
            "/products",
            Some(json!({ "name": "Widget", "stock": 3, "price": 9.99 })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 3);
        assert_eq!(created["name"], "Widget");
        assert_eq!(created["description"], Value::Null);
        assert_eq!(created["stock"], 3);
        assert_eq!(created["price"], 9.99);

        let (status, fetched) = call(&app, "GET", "/products/3", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_without_name_is_an_internal_error() {
        let app = setup().await;

        let (status, body) = call(
            &app,
            "POST",
            "/products",
            Some(json!({ "stock": 1, "price": 1.0 })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    #[tokio::test]
    async fn create_defaults_stock_and_price() {
        let app = setup().await;

        let (status, created) =
            call(&app, "POST", "/products", Some(json!({ "name": "Bare" }))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["stock"], 0);
        assert_eq!(created["price"], 0.0);
        assert_eq!(created["description"], Value::Null);
    }

    // ── fetch by id ──

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let app = setup().await;

        let (status, body) = call(&app, "GET", "/products/9999", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Product not found" }));
    }

    #[tokio::test]
    async fn non_numeric_id_is_not_found() {
        let app = setup().await;

        let (status, body) = call(&app, "GET", "/products/abc", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Product not found" }));
    }

    // ── update ──

    #[tokio::test]
    async fn update_merges_only_the_supplied_fields() {
        let app = setup().await;

        let (status, updated) =
            call(&app, "PUT", "/products/1", Some(json!({ "price": 5.0 }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Sample Product A");
        assert_eq!(updated["description"], "Demo product A");
        assert_eq!(updated["stock"], 10);
        assert_eq!(updated["price"], 5.0);
    }

    #[tokio::test]
    async fn update_with_explicit_null_clears_description() {
        let app = setup().await;

        let (status, updated) = call(
            &app,
            "PUT",
            "/products/1",
            Some(json!({ "description": null })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["description"], Value::Null);
        assert_eq!(updated["name"], "Sample Product A");
    }

    #[tokio::test]
    async fn update_of_missing_product_is_not_found_and_changes_nothing() {
        let app = setup().await;

        let (status, body) = call(
            &app,
            "PUT",
            "/products/999",
            Some(json!({ "name": "Ghost" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Product not found" }));

        let (_, rows) = call(&app, "GET", "/products", None).await;
        let rows = rows.as_array().unwrap().clone();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row["name"] != "Ghost"));
    }

    // ── delete ──

    #[tokio::test]
    async fn deleted_product_stops_resolving() {
        let app = setup().await;

        let (status, body) = call(&app, "DELETE", "/products/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));

        let (status, body) = call(&app, "GET", "/products/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Product not found" }));

        let (_, rows) = call(&app, "GET", "/products", None).await;
        assert_eq!(rows.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_of_missing_product_is_not_found() {
        let app = setup().await;

        let (status, body) = call(&app, "DELETE", "/products/424242", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Product not found" }));
    }

    #[tokio::test]
    async fn deleted_id_is_never_reissued() {
        let app = setup().await;

        let (_, created) = call(
            &app,
            "POST",
            "/products",
            Some(json!({ "name": "Short-lived" })),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        call(&app, "DELETE", &format!("/products/{id}"), None).await;

        let (_, recreated) = call(
            &app,
            "POST",
            "/products",
            Some(json!({ "name": "Successor" })),
        )
        .await;

        assert!(recreated["id"].as_i64().unwrap() > id);

        let (status, _) = call(&app, "GET", &format!("/products/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
