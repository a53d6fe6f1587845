use std::sync::Arc;

use axum::{
	Router,
	body::{self, Body},
	http::{Request, StatusCode},
};
use serde_json::{Map, Value};
use tower::util::ServiceExt;

use vmatch_api::{routes, state::AppState};
use vmatch_config::{
	Config, EmbeddingCache, EmbeddingProviderConfig, LlmProviderConfig, Matching, Providers,
	Service,
};
use vmatch_providers::UnavailableReason;
use vmatch_service::{BoxFuture, EmbeddingProvider, GenerationProvider};

struct StubEmbedding;
impl EmbeddingProvider for StubEmbedding {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, vmatch_providers::Result<Vec<Vec<f32>>>> {
		let dim = cfg.dimensions as usize;
		let out: Vec<Vec<f32>> = texts
			.iter()
			.map(|text| {
				let mut vec = vec![0.0_f32; dim];

				vec[text.len() % dim] = 1.0;

				vec
			})
			.collect();

		Box::pin(async move { Ok(out) })
	}
}

struct StubGeneration;
impl GenerationProvider for StubGeneration {
	fn generate<'a>(
		&'a self,
		_cfg: &'a LlmProviderConfig,
		_prompt: &'a str,
	) -> BoxFuture<'a, vmatch_providers::Result<String>> {
		Box::pin(async move { Ok("Greet arriving guests and coordinate the serving line.".to_string()) })
	}
}

struct Offline;
impl EmbeddingProvider for Offline {
	fn embed<'a>(
		&'a self,
		_cfg: &'a EmbeddingProviderConfig,
		_texts: &'a [String],
	) -> BoxFuture<'a, vmatch_providers::Result<Vec<Vec<f32>>>> {
		Box::pin(async move { Err(offline_error()) })
	}
}
impl GenerationProvider for Offline {
	fn generate<'a>(
		&'a self,
		_cfg: &'a LlmProviderConfig,
		_prompt: &'a str,
	) -> BoxFuture<'a, vmatch_providers::Result<String>> {
		Box::pin(async move { Err(offline_error()) })
	}
}

fn offline_error() -> vmatch_providers::Error {
	vmatch_providers::Error::Unavailable {
		provider: "test".to_string(),
		reason: UnavailableReason::Auth,
		status: Some(401),
		message: "Incorrect API key provided.".to_string(),
	}
}

fn test_config() -> Config {
	Config {
		service: Service { http_bind: "127.0.0.1:0".to_string(), log_level: "info".to_string() },
		providers: Providers {
			embedding: EmbeddingProviderConfig {
				provider_id: "test".to_string(),
				api_base: "http://127.0.0.1:1".to_string(),
				api_key: "test-key".to_string(),
				api_key_env: None,
				path: "/embeddings".to_string(),
				model: "test-embedding".to_string(),
				dimensions: 8,
				request_dimensions: false,
				timeout_ms: 1_000,
				default_headers: Map::new(),
			},
			generation: LlmProviderConfig {
				provider_id: "test".to_string(),
				api_base: "http://127.0.0.1:1".to_string(),
				api_key: "test-key".to_string(),
				api_key_env: None,
				path: "/chat/completions".to_string(),
				model: "test-chat".to_string(),
				temperature: 0.5,
				timeout_ms: 1_000,
				default_headers: Map::new(),
			},
		},
		matching: Matching {
			min_score: -1.0,
			top_k: 10,
			cache: EmbeddingCache { enabled: true, max_entries: 16 },
		},
	}
}

fn online_app() -> Router {
	routes::router(AppState::with_providers(
		test_config(),
		vmatch_service::Providers::new(Arc::new(StubEmbedding), Arc::new(StubGeneration)),
	))
}

fn offline_app() -> Router {
	routes::router(AppState::with_providers(
		test_config(),
		vmatch_service::Providers::new(Arc::new(Offline), Arc::new(Offline)),
	))
}

async fn post_json(app: Router, uri: &str, payload: Value) -> (StatusCode, Value) {
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri(uri)
				.header("content-type", "application/json")
				.body(Body::from(payload.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call route.");
	let status = response.status();
	let body = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Failed to read response body.");
	let json: Value = serde_json::from_slice(&body).expect("Failed to parse response.");

	(status, json)
}

#[tokio::test]
async fn health_ok() {
	let response = online_app()
		.oneshot(
			Request::builder().uri("/health").body(Body::empty()).expect("Failed to build request."),
		)
		.await
		.expect("Failed to call /health.");

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn embed_returns_model_tagged_vector() {
	let (status, json) =
		post_json(online_app(), "/v1/embed", serde_json::json!({ "text": "soup" })).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["model"], "test-embedding");
	assert_eq!(json["dimensions"], 8);
	assert_eq!(json["embedding"].as_array().map(Vec::len), Some(8));
}

#[tokio::test]
async fn similarity_of_identical_vectors_is_one() {
	let vector = serde_json::json!({ "model": "m", "values": [0.2, 0.4, 0.1] });
	let (status, json) = post_json(
		online_app(),
		"/v1/similarity",
		serde_json::json!({ "lhs": vector, "rhs": vector }),
	)
	.await;

	assert_eq!(status, StatusCode::OK);

	let score = json["score"].as_f64().expect("Score must be numeric.");

	assert!((score - 1.0).abs() < 1e-6);
}

#[tokio::test]
async fn degenerate_and_mismatched_vectors_are_internal_errors() {
	let zero = serde_json::json!({ "model": "m", "values": [0.0, 0.0] });
	let unit = serde_json::json!({ "model": "m", "values": [1.0, 0.0] });
	let long = serde_json::json!({ "model": "m", "values": [1.0, 0.0, 0.0] });
	let (status, json) =
		post_json(online_app(), "/v1/similarity", serde_json::json!({ "lhs": zero, "rhs": unit }))
			.await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(json["error_code"], "DEGENERATE_VECTOR");
	assert_eq!(json["retryable"], false);

	let (status, json) =
		post_json(online_app(), "/v1/similarity", serde_json::json!({ "lhs": unit, "rhs": long }))
			.await;

	assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(json["error_code"], "DIMENSION_MISMATCH");
}

#[tokio::test]
async fn tasks_accept_empty_event_description() {
	let (status, json) = post_json(
		online_app(),
		"/v1/tasks",
		serde_json::json!({ "event_description": "", "user_description": "Chef." }),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["tasks"], "Greet arriving guests and coordinate the serving line.");
}

#[tokio::test]
async fn upstream_failures_map_to_service_unavailable() {
	let (status, json) =
		post_json(offline_app(), "/v1/embed", serde_json::json!({ "text": "soup" })).await;

	assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
	assert_eq!(json["error_code"], "UPSTREAM_UNAVAILABLE");
	assert_eq!(json["retryable"], true);

	let (status, json) = post_json(
		offline_app(),
		"/v1/tasks",
		serde_json::json!({ "event_description": "e", "user_description": "u" }),
	)
	.await;

	assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
	assert_eq!(json["error_code"], "UPSTREAM_UNAVAILABLE");
}

#[tokio::test]
async fn ranks_and_personalizes_events() {
	let profile = serde_json::json!({
		"describe_yourself": "Chef.",
		"interests_and_passions": "Cooking.",
		"past_volunteer_experience": "Shelter kitchen."
	});
	let event = serde_json::json!({
		"id": "evt-1",
		"title": "Soup kitchen",
		"dates": "2026-11-07",
		"location": "Hall",
		"description": "Serve meals.",
		"tasks": "Serve soup."
	});
	let (status, json) = post_json(
		online_app(),
		"/v1/match/events",
		serde_json::json!({ "profile": profile, "events": [event] }),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(json["matches"][0]["event_id"], "evt-1");
	assert!(json["matches"][0]["score"].is_number());

	let (status, json) = post_json(
		online_app(),
		"/v1/match/tasks",
		serde_json::json!({ "profile": profile, "event": event }),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert!(json["tasks"].as_str().is_some_and(|text| !text.is_empty()));
}
