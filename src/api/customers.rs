//! Customer endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::customer::{CreateCustomer, Customer, CustomerQuery, UpdateCustomer},
};

use super::AuthenticatedUser;

/// List customers with search filters
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    security(("bearer_auth" = [])),
    params(CustomerQuery),
    responses(
        (status = 200, description = "List of customers", body = Vec<Customer>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_customers(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<CustomerQuery>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.services.customers.search(&query).await?;
    Ok(Json(customers))
}

/// Get customer by ID
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer details", body = Customer),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Customer>> {
    let customer = state.services.customers.get(id).await?;
    Ok(Json(customer))
}

/// Create a new customer
#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    security(("bearer_auth" = [])),
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Matching customer already exists")
    )
)]
pub async fn create_customer(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    request.validate()?;

    let created = state.services.customers.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing customer
#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "customers",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Matching customer already exists")
    )
)]
pub async fn update_customer(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    request.validate()?;

    let updated = state.services.customers.update(id, request).await?;
    Ok(Json(updated))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "customers",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer deleted", body = Customer),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Customer>> {
    let deleted = state.services.customers.delete(id).await?;
    Ok(Json(deleted))
}
