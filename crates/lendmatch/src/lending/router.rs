use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde_json::json;
use tracing::info;

use super::domain::{CustomerId, CustomerSubmission};
use super::repository::{BankDirectory, CustomerStore, RepositoryError};
use super::service::{LoanMatchService, ServiceError, UpsertDisposition};

/// Router builder exposing the upsert-and-match and lookup endpoints.
pub fn lending_router<C, D>(service: Arc<LoanMatchService<C, D>>) -> Router
where
    C: CustomerStore + 'static,
    D: BankDirectory + 'static,
{
    Router::new()
        .route(
            "/customers/with-eligible-banks",
            post(register_handler::<C, D>),
        )
        .route(
            "/customers/:customer_id/eligible-banks",
            get(eligible_banks_handler::<C, D>),
        )
        .with_state(service)
}

pub(crate) async fn register_handler<C, D>(
    State(service): State<Arc<LoanMatchService<C, D>>>,
    axum::Json(submission): axum::Json<CustomerSubmission>,
) -> Response
where
    C: CustomerStore + 'static,
    D: BankDirectory + 'static,
{
    let today = Local::now().date_naive();
    match service.register_and_match(submission, today) {
        Ok((report, disposition)) => {
            let status = match disposition {
                UpsertDisposition::Created => StatusCode::CREATED,
                UpsertDisposition::Updated => StatusCode::OK,
            };
            info!(
                customer_id = report.customer.id,
                eligible = report.eligible_banks.len(),
                ineligible = report.ineligible_banks.len(),
                "customer matched"
            );
            (status, axum::Json(report)).into_response()
        }
        Err(ServiceError::Intake(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "customer with this email or phone already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn eligible_banks_handler<C, D>(
    State(service): State<Arc<LoanMatchService<C, D>>>,
    Path(customer_id): Path<u64>,
) -> Response
where
    C: CustomerStore + 'static,
    D: BankDirectory + 'static,
{
    let today = Local::now().date_naive();
    match service.eligible_banks_for(CustomerId(customer_id), today) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(ServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "Customer not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
