//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use payments_types::{
    AppError, Clock, CreateCardPaymentRequest, CreatePixPaymentRequest, ErrorDetail, IdGenerator,
    PaymentResponse, ValidationErrors,
};

use crate::PaymentService;

/// Application state shared across handlers.
pub struct AppState<C: Clock, G: IdGenerator> {
    pub service: PaymentService<C, G>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError(AppError::from(errors))
    }
}

/// Malformed or mistyped bodies get the same `{error, code}` shape as every
/// other client error.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::BadRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            AppError::Validation(errors) => {
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                let details: Vec<ErrorDetail> = errors.iter().map(ErrorDetail::from).collect();
                (
                    status,
                    serde_json::json!({
                        "error": "Validation failed",
                        "code": status.as_u16(),
                        "details": details,
                    }),
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": msg,
                    "code": StatusCode::BAD_REQUEST.as_u16()
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Create a credit card payment.
///
/// Spans skip the request body so card data never reaches logs.
#[tracing::instrument(skip_all)]
pub async fn create_card_payment<C, G>(
    State(state): State<Arc<AppState<C, G>>>,
    payload: Result<Json<CreateCardPaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    C: Clock + 'static,
    G: IdGenerator + 'static,
{
    let Json(req) = payload?;
    tracing::debug!(currency = %req.currency, amount = %req.amount, "Creating card payment");

    let payment = state.service.create_card_payment(req)?;
    Ok((StatusCode::CREATED, Json(PaymentResponse::from(&payment))))
}

/// Create a Pix payment.
#[tracing::instrument(skip_all)]
pub async fn create_pix_payment<C, G>(
    State(state): State<Arc<AppState<C, G>>>,
    payload: Result<Json<CreatePixPaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    C: Clock + 'static,
    G: IdGenerator + 'static,
{
    let Json(req) = payload?;
    tracing::debug!(amount = %req.amount, "Creating Pix payment");

    let payment = state.service.create_pix_payment(req)?;
    Ok((StatusCode::CREATED, Json(PaymentResponse::from(&payment))))
}
