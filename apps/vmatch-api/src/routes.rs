use axum::{
	Json, Router,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::{Deserialize, Serialize};

use vmatch_service::{
	Error as ServiceError, EventListing, EventMatch, MatchScore, TaskSuggestion, TextVector,
	VolunteerProfile,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/embed", post(embed))
		.route("/v1/similarity", post(similarity))
		.route("/v1/tasks", post(generate_tasks))
		.route("/v1/match/events", post(rank_events))
		.route("/v1/match/tasks", post(personalize))
		.with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct EmbedRequest {
	pub text: String,
}

#[derive(Debug, Serialize)]
pub struct EmbedResponse {
	pub model: String,
	pub dimensions: usize,
	pub embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
pub struct SimilarityRequest {
	pub lhs: TextVector,
	pub rhs: TextVector,
}

#[derive(Debug, Serialize)]
pub struct SimilarityResponse {
	pub score: MatchScore,
}

#[derive(Debug, Deserialize)]
pub struct TasksRequest {
	#[serde(default)]
	pub event_description: String,
	#[serde(default)]
	pub user_description: String,
}

#[derive(Debug, Serialize)]
pub struct TasksResponse {
	pub tasks: TaskSuggestion,
}

#[derive(Debug, Deserialize)]
pub struct RankEventsRequest {
	pub profile: VolunteerProfile,
	pub events: Vec<EventListing>,
}

#[derive(Debug, Serialize)]
pub struct RankEventsResponse {
	pub matches: Vec<EventMatch>,
}

#[derive(Debug, Deserialize)]
pub struct PersonalizeRequest {
	pub profile: VolunteerProfile,
	pub event: EventListing,
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn embed(
	State(state): State<AppState>,
	Json(payload): Json<EmbedRequest>,
) -> Result<Json<EmbedResponse>, ApiError> {
	let vector = state.service.embed(&payload.text).await?;
	Ok(Json(EmbedResponse {
		model: vector.model().to_string(),
		dimensions: vector.dimensions(),
		embedding: vector.into_values(),
	}))
}

async fn similarity(
	State(state): State<AppState>,
	Json(payload): Json<SimilarityRequest>,
) -> Result<Json<SimilarityResponse>, ApiError> {
	let score = state.service.similarity(&payload.lhs, &payload.rhs)?;
	Ok(Json(SimilarityResponse { score }))
}

async fn generate_tasks(
	State(state): State<AppState>,
	Json(payload): Json<TasksRequest>,
) -> Result<Json<TasksResponse>, ApiError> {
	let tasks =
		state.service.generate_tasks(&payload.event_description, &payload.user_description).await?;
	Ok(Json(TasksResponse { tasks }))
}

async fn rank_events(
	State(state): State<AppState>,
	Json(payload): Json<RankEventsRequest>,
) -> Result<Json<RankEventsResponse>, ApiError> {
	let matches = state.service.rank_events(&payload.profile, &payload.events).await?;
	Ok(Json(RankEventsResponse { matches }))
}

async fn personalize(
	State(state): State<AppState>,
	Json(payload): Json<PersonalizeRequest>,
) -> Result<Json<TasksResponse>, ApiError> {
	let tasks = state.service.personalize(&payload.profile, &payload.event).await?;
	Ok(Json(TasksResponse { tasks }))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	retryable: bool,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	retryable: bool,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		retryable: bool,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), retryable }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let retryable = err.is_retryable();
		let message = err.to_string();
		let (status, code) = match &err {
			ServiceError::UpstreamUnavailable { .. } => {
				(StatusCode::SERVICE_UNAVAILABLE, "UPSTREAM_UNAVAILABLE")
			},
			ServiceError::UpstreamRefused { .. } => {
				(StatusCode::SERVICE_UNAVAILABLE, "UPSTREAM_REFUSED")
			},
			ServiceError::DimensionMismatch { .. } => {
				(StatusCode::INTERNAL_SERVER_ERROR, "DIMENSION_MISMATCH")
			},
			ServiceError::ModelMismatch { .. } => {
				(StatusCode::INTERNAL_SERVER_ERROR, "MODEL_MISMATCH")
			},
			ServiceError::DegenerateVector => {
				(StatusCode::INTERNAL_SERVER_ERROR, "DEGENERATE_VECTOR")
			},
			ServiceError::InvalidConfig { .. } => {
				(StatusCode::INTERNAL_SERVER_ERROR, "INVALID_CONFIG")
			},
		};

		if status.is_server_error() && !err.is_upstream() {
			tracing::error!(error = %err, "Matching request failed.");
		}

		Self::new(status, code, message, retryable)
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, retryable: self.retryable };
		(self.status, Json(body)).into_response()
	}
}
