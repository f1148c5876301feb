//! Actor extraction for archive handlers.
//!
//! The session layer in front of this service forwards the authenticated user's id in
//! [`USER_ID_HEADER`]. Handlers never see the header; they receive the loaded [`Actor`].

use axum::{
	extract::FromRequestParts,
	http::{HeaderMap, StatusCode, request::Parts},
};
use uuid::Uuid;

use archive_domain::Actor;

use crate::{
	routes::{ApiError, json_error},
	state::AppState,
};

pub const USER_ID_HEADER: &str = "x-archive-user-id";

/// The actor behind the current request, loaded once per request.
#[derive(Debug, Clone)]
pub struct RequestActor(pub Actor);
impl FromRequestParts<AppState> for RequestActor {
	type Rejection = ApiError;

	async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
		let user_id = user_id_from_headers(&parts.headers)?;
		let actor = state.service.load_actor(user_id).await?;

		Ok(Self(actor))
	}
}

fn user_id_from_headers(headers: &HeaderMap) -> Result<Option<Uuid>, ApiError> {
	let Some(value) = headers.get(USER_ID_HEADER) else {
		return Ok(None);
	};
	let parsed = value.to_str().ok().map(str::trim).and_then(|raw| Uuid::parse_str(raw).ok());

	match parsed {
		Some(user_id) => Ok(Some(user_id)),
		None => {
			tracing::debug!(header = ?value, "Rejecting malformed user id header.");

			Err(json_error(
				StatusCode::BAD_REQUEST,
				"INVALID_REQUEST",
				"Malformed X-Archive-User-Id header.",
			))
		},
	}
}
