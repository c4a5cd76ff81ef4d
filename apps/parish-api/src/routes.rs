use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::{Deserialize, Serialize};

use parish_domain::{MetricsSearchType, SortDirection};
use parish_service::{
	Error as ServiceError, MetricsRequest, MetricsResponse, ReportDocument,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/metrics", get(metrics))
		.route("/v1/reports/metrics", get(metrics_report))
		.with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
	pub term: String,
	#[serde(rename = "search-type")]
	pub search_type: MetricsSearchType,
	#[serde(default)]
	pub order: SortDirection,
	#[serde(default)]
	pub limit: Option<i64>,
	#[serde(default)]
	pub offset: Option<i64>,
}
impl MetricsQuery {
	fn into_request(self) -> MetricsRequest {
		MetricsRequest {
			term: self.term,
			search_type: self.search_type,
			order: self.order,
			limit: self.limit,
			offset: self.offset,
		}
	}
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn metrics(
	State(state): State<AppState>,
	Query(query): Query<MetricsQuery>,
) -> Result<Json<MetricsResponse>, ApiError> {
	let response = state.service.metrics(query.into_request()).await?;

	Ok(Json(response))
}

async fn metrics_report(
	State(state): State<AppState>,
	Query(query): Query<MetricsQuery>,
) -> Result<Json<ReportDocument>, ApiError> {
	let document = state.service.metrics_report(query.into_request()).await?;

	Ok(Json(document))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } =>
				Self::new(StatusCode::BAD_REQUEST, "invalid_request", message),
			ServiceError::NotFound { message } =>
				Self::new(StatusCode::NOT_FOUND, "not_found", message),
			ServiceError::Conflict { message } =>
				Self::new(StatusCode::CONFLICT, "conflict", message),
			ServiceError::Storage { message } => {
				// The caller gets a generic message; the detail stays in the
				// server log.
				tracing::error!(error = %message, "Storage error while serving metrics.");

				Self::new(
					StatusCode::INTERNAL_SERVER_ERROR,
					"internal_error",
					"Internal error, contact support.",
				)
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
