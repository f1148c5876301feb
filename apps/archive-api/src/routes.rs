use axum::{
	Json, Router,
	extract::{Path, Query, State},
	http::StatusCode,
	response::{Html, IntoResponse, Response},
	routing::get,
};
use serde::{Deserialize, Serialize};

use archive_service::{AggregateBucket, Error as ServiceError, ListRequest, ListResponse};

use crate::{context::RequestActor, render, state::AppState};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/archive/", get(archive_page))
		.route("/archive/aggregate/{category}", get(aggregate))
		.route("/archive/list", get(list))
		.route("/archive/list/{category}/{filter_value}", get(list_filtered))
		.route("/notifications/unread_count", get(unread_count))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn archive_page(
	State(state): State<AppState>,
	RequestActor(actor): RequestActor,
) -> Result<Html<String>, ApiError> {
	let page = state.service.archive_page(&actor).await?;

	Ok(Html(render::archive_page(&page)))
}

async fn aggregate(
	State(state): State<AppState>,
	Path(category): Path<String>,
	RequestActor(actor): RequestActor,
) -> Result<Json<Vec<AggregateBucket>>, ApiError> {
	let buckets = state.service.aggregate(&actor, &category).await?;

	Ok(Json(buckets))
}

async fn list(
	State(state): State<AppState>,
	Query(params): Query<ListParams>,
	RequestActor(actor): RequestActor,
) -> Result<Json<ListResponse>, ApiError> {
	let response = state.service.list(&actor, params.into_request(None, None)).await?;

	Ok(Json(response))
}

async fn list_filtered(
	State(state): State<AppState>,
	Path((category, filter_value)): Path<(String, String)>,
	Query(params): Query<ListParams>,
	RequestActor(actor): RequestActor,
) -> Result<Json<ListResponse>, ApiError> {
	let request = params.into_request(Some(category), Some(filter_value));
	let response = state.service.list(&actor, request).await?;

	Ok(Json(response))
}

async fn unread_count(
	State(state): State<AppState>,
	RequestActor(actor): RequestActor,
) -> Result<Json<UnreadCount>, ApiError> {
	let unread_notifications_count = state.service.unread_notifications_count(&actor).await?;

	Ok(Json(UnreadCount { unread_notifications_count }))
}

/// Query string of the list routes. The category filter only comes from the path.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
	pub search: Option<String>,
	pub sort_by: Option<String>,
	pub order: Option<String>,
	pub page: Option<String>,
	pub page_size: Option<String>,
}
impl ListParams {
	fn into_request(self, category: Option<String>, filter_value: Option<String>) -> ListRequest {
		ListRequest {
			category,
			filter_value,
			search: self.search,
			sort_by: self.sort_by,
			order: self.order,
			page: self.page,
			page_size: self.page_size,
		}
	}
}

#[derive(Debug, Serialize)]
pub struct UnreadCount {
	pub unread_notifications_count: i64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
	error_code: String,
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
			err @ ServiceError::InvalidCategory { .. } =>
				json_error(StatusCode::BAD_REQUEST, "INVALID_CATEGORY", err.to_string()),
			ServiceError::InvalidRequest { message } =>
				json_error(StatusCode::BAD_REQUEST, "INVALID_REQUEST", message),
			ServiceError::NotFound { message } =>
				json_error(StatusCode::NOT_FOUND, "NOT_FOUND", message),
			ServiceError::DataAccessFailure { message } =>
				json_error(StatusCode::INTERNAL_SERVER_ERROR, "DATA_ACCESS_FAILURE", message),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error: self.message, error_code: self.error_code };

		(self.status, Json(body)).into_response()
	}
}

pub fn json_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
	ApiError::new(status, code, message)
}
