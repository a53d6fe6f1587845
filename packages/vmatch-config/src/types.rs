use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub providers: Providers,
	#[serde(default)]
	pub matching: Matching,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Providers {
	pub embedding: EmbeddingProviderConfig,
	pub generation: LlmProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	#[serde(default)]
	pub api_key: String,
	/// Optional. Environment variable read at load time when `api_key` is empty.
	pub api_key_env: Option<String>,
	#[serde(default = "default_embedding_path")]
	pub path: String,
	#[serde(default = "default_embedding_model")]
	pub model: String,
	#[serde(default = "default_embedding_dimensions")]
	pub dimensions: u32,
	/// Send `dimensions` with each request. Only models that support shortening accept it.
	#[serde(default)]
	pub request_dimensions: bool,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	#[serde(default)]
	pub api_key: String,
	/// Optional. Environment variable read at load time when `api_key` is empty.
	pub api_key_env: Option<String>,
	#[serde(default = "default_generation_path")]
	pub path: String,
	#[serde(default = "default_generation_model")]
	pub model: String,
	#[serde(default = "default_temperature")]
	pub temperature: f32,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Matching {
	/// Events scoring below this are dropped from rankings.
	pub min_score: f32,
	pub top_k: u32,
	pub cache: EmbeddingCache,
}
impl Default for Matching {
	fn default() -> Self {
		Self { min_score: -1.0, top_k: 10, cache: EmbeddingCache::default() }
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingCache {
	pub enabled: bool,
	pub max_entries: u32,
}
impl Default for EmbeddingCache {
	fn default() -> Self {
		Self { enabled: true, max_entries: 4_096 }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_embedding_path() -> String {
	"/embeddings".to_string()
}

fn default_embedding_model() -> String {
	"text-embedding-ada-002".to_string()
}

fn default_embedding_dimensions() -> u32 {
	1_536
}

fn default_generation_path() -> String {
	"/chat/completions".to_string()
}

fn default_generation_model() -> String {
	"gpt-3.5-turbo-1106".to_string()
}

fn default_temperature() -> f32 {
	0.5
}

fn default_timeout_ms() -> u64 {
	30_000
}
