use axum::{extract::{Path, State}, Json};
use models::Customer;
use service::errors::ServiceError;
use tracing::info;

use crate::errors::JsonApiError;
use crate::metrics;
use crate::state::ServerState;

/// Save a customer as given in the body.
#[utoipa::path(
    post,
    path = "/api/v1/customers/create",
    tag = "customers",
    request_body = Customer,
    responses(
        (status = 200, description = "Saved customer", body = Customer),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn create_customer(
    State(state): State<ServerState>,
    Json(input): Json<Customer>,
) -> Result<Json<Customer>, JsonApiError> {
    let saved = state.customers.save_customer(input).await?;
    metrics::CUSTOMERS_CREATED_TOTAL.inc();
    info!(customer_id = saved.id, "created customer");
    Ok(Json(saved))
}

/// All customers in the order they were created.
#[utoipa::path(
    get,
    path = "/api/v1/customers/all",
    tag = "customers",
    responses((status = 200, description = "All customers", body = [Customer]))
)]
pub async fn get_all_customers(
    State(state): State<ServerState>,
) -> Result<Json<Vec<Customer>>, JsonApiError> {
    let list = state.customers.get_all_customers().await?;
    info!(count = list.len(), "list customers");
    Ok(Json(list))
}

#[utoipa::path(
    get,
    path = "/api/v1/customers/{customer_id}",
    tag = "customers",
    params(("customer_id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer", body = Customer),
        (status = 404, description = "No customer with this id", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get_customer_by_id(
    State(state): State<ServerState>,
    Path(customer_id): Path<i32>,
) -> Result<Json<Customer>, JsonApiError> {
    let found = state.customers.find_by_id(customer_id).await?;
    metrics::record_lookup(found.is_some());
    let customer = found.ok_or_else(|| ServiceError::not_found(&format!("customer {customer_id}")))?;
    Ok(Json(customer))
}
