use std::{
	collections::{HashMap, VecDeque},
	sync::Mutex,
};

const EMBEDDING_CACHE_SCHEMA_VERSION: i32 = 1;

/// Process-wide `text hash -> vector` map with FIFO eviction.
///
/// Keys include the embedding version, so entries written under another model never match.
pub struct EmbeddingCache {
	max_entries: usize,
	state: Mutex<CacheState>,
}

#[derive(Default)]
struct CacheState {
	entries: HashMap<String, Vec<f32>>,
	order: VecDeque<String>,
}

impl EmbeddingCache {
	pub fn new(max_entries: usize) -> Self {
		Self { max_entries: max_entries.max(1), state: Mutex::new(CacheState::default()) }
	}

	pub fn get(&self, key: &str) -> Option<Vec<f32>> {
		let state = self.state.lock().unwrap_or_else(|err| err.into_inner());

		state.entries.get(key).cloned()
	}

	pub fn insert(&self, key: String, vec: Vec<f32>) {
		let mut state = self.state.lock().unwrap_or_else(|err| err.into_inner());

		if state.entries.insert(key.clone(), vec).is_some() {
			return;
		}

		state.order.push_back(key);

		while state.order.len() > self.max_entries {
			if let Some(oldest) = state.order.pop_front() {
				state.entries.remove(&oldest);
			}
		}
	}

	pub fn len(&self) -> usize {
		self.state.lock().unwrap_or_else(|err| err.into_inner()).entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

pub fn embedding_cache_key(embedding_version: &str, text: &str) -> String {
	let payload = serde_json::json!({
		"kind": "embedding",
		"schema_version": EMBEDDING_CACHE_SCHEMA_VERSION,
		"embedding_version": embedding_version,
		"text": text,
	});

	blake3::hash(payload.to_string().as_bytes()).to_hex().to_string()
}

pub fn cache_key_prefix(key: &str) -> &str {
	let len = key.len().min(12);

	&key[..len]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys_change_with_embedding_version() {
		let ada = embedding_cache_key("openai:text-embedding-ada-002:1536", "soup kitchen");
		let small = embedding_cache_key("openai:text-embedding-3-small:1536", "soup kitchen");

		assert_ne!(ada, small);
		assert_eq!(ada, embedding_cache_key("openai:text-embedding-ada-002:1536", "soup kitchen"));
	}

	#[test]
	fn evicts_oldest_entry_first() {
		let cache = EmbeddingCache::new(2);

		cache.insert("a".to_string(), vec![1.0]);
		cache.insert("b".to_string(), vec![2.0]);
		cache.insert("a".to_string(), vec![1.5]);
		cache.insert("c".to_string(), vec![3.0]);

		assert_eq!(cache.len(), 2);
		assert!(cache.get("a").is_none());
		assert_eq!(cache.get("b"), Some(vec![2.0]));
		assert_eq!(cache.get("c"), Some(vec![3.0]));
	}
}
