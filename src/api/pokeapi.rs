//! PokeAPI client: cache-first fetches gated by the cooldown.
//!
//! Every lookup goes through [`PokeApi::get_response`]: cache hit → decode and
//! return; miss (or an undecodable cached body) → wait for the cooldown,
//! fetch, cache the raw body, decode. Network failures surface as a single
//! [`ForgeError::ApiRequest`] carrying the failing URL — callers decide the
//! fallback policy, this client never retries.

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::cache::ResponseCache;
use crate::error::{ForgeError, Result};

use super::{Cooldown, PokemonWikiApi};

/// Production API base.
pub const POKEAPI_BASE: &str = "https://pokeapi.co/api/v2";

/// Generation tag rejected by [`PokeApi::get_random_species_name`]. The
/// target game engine ships no species from this generation and the API
/// carries no other signal distinguishing them.
const EXCLUDED_GENERATION: &str = "generation-ix";

/// Gender-rate sentinel the API uses for genderless species.
const GENDERLESS_RATE: i64 = -1;

/// Concrete [`PokemonWikiApi`] backed by PokeAPI, a persistent response
/// cache, and a per-instance cooldown between network calls.
pub struct PokeApi {
    client: Client,
    cache: Mutex<ResponseCache>,
    cooldown: Cooldown,
    base_url: String,
}

impl PokeApi {
    /// Build a client against `base_url`, caching to `cache_path`, with the
    /// given minimum interval between outbound fetches.
    pub fn new(
        base_url: impl Into<String>,
        cache_path: impl Into<PathBuf>,
        min_interval: Duration,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Self::build_client(),
            cache: Mutex::new(ResponseCache::open(cache_path)),
            cooldown: Cooldown::new(min_interval),
            base_url,
        }
    }

    fn build_client() -> Client {
        Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client")
    }

    /// Fetch a URL through the cache, decoding the body as JSON.
    ///
    /// An undecodable cached body is treated as a miss and re-fetched; this
    /// is the only path that ever overwrites an existing cache entry.
    pub async fn get_response(&self, url: &str) -> Result<Value> {
        let cached = {
            let cache = self.cache.lock().expect("cache lock poisoned");
            cache.get(url)
        };
        match cached {
            Ok(body) => match serde_json::from_str(&body) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(url, error = %e, "Cached body is not valid JSON, re-fetching");
                }
            },
            Err(ForgeError::CacheMiss) => {}
            Err(e) => return Err(e),
        }
        self.fetch_and_store(url).await
    }

    /// Cooldown-gated network fetch; caches the raw body on success.
    async fn fetch_and_store(&self, url: &str) -> Result<Value> {
        self.cooldown.wait_ready().await;
        let result = self.client.get(url).send().await;
        // The cooldown restarts after every call, success or failure.
        self.cooldown.reset();

        let response = result.map_err(|e| {
            debug!(url, error = %e, "Network request failed");
            ForgeError::ApiRequest {
                url: url.to_string(),
            }
        })?;
        if !response.status().is_success() {
            debug!(url, status = %response.status(), "Non-success response");
            return Err(ForgeError::ApiRequest {
                url: url.to_string(),
            });
        }
        let body = response.text().await.map_err(|e| {
            debug!(url, error = %e, "Failed to read response body");
            ForgeError::ApiRequest {
                url: url.to_string(),
            }
        })?;

        {
            let mut cache = self.cache.lock().expect("cache lock poisoned");
            cache.put(url, &body);
        }

        serde_json::from_str(&body).map_err(|e| {
            debug!(url, error = %e, "Response body is not valid JSON");
            ForgeError::ApiRequest {
                url: url.to_string(),
            }
        })
    }

    /// Resolve a species to the pokemon resource URL of its default variety.
    ///
    /// The varieties list is filtered for the entry flagged `is_default`;
    /// a species without one cannot be resolved.
    async fn default_variety_url(&self, name: &str) -> Result<String> {
        let species = self.get_response(&self.species_url(name)).await?;
        species["varieties"]
            .as_array()
            .and_then(|varieties| {
                varieties
                    .iter()
                    .find(|v| v["is_default"].as_bool().unwrap_or(false))
            })
            .and_then(|variety| variety["pokemon"]["url"].as_str())
            .map(String::from)
            .ok_or_else(|| ForgeError::SpeciesNotFound(name.to_string()))
    }

    fn species_url(&self, name: &str) -> String {
        format!("{}/pokemon-species/{}", self.base_url, name)
    }

    fn species_collection_url(&self) -> String {
        format!("{}/pokemon-species/", self.base_url)
    }
}

/// Strip the hyphens the API uses in identifiers (`solar-power` → `solarpower`).
fn strip_hyphens(name: &str) -> String {
    name.replace('-', "")
}

#[async_trait]
impl PokemonWikiApi for PokeApi {
    async fn get_abilities(&self, name: &str) -> Result<Vec<String>> {
        let url = self.default_variety_url(name).await?;
        let pokemon = self.get_response(&url).await?;
        pokemon["abilities"]
            .as_array()
            .map(|abilities| {
                abilities
                    .iter()
                    .filter_map(|a| a["ability"]["name"].as_str())
                    .map(strip_hyphens)
                    .collect()
            })
            .ok_or(ForgeError::ApiRequest { url })
    }

    async fn is_genderless(&self, name: &str) -> Result<bool> {
        let url = self.species_url(name);
        let species = self.get_response(&url).await?;
        species["gender_rate"]
            .as_i64()
            .map(|rate| rate == GENDERLESS_RATE)
            .ok_or(ForgeError::ApiRequest { url })
    }

    async fn get_moves(&self, name: &str) -> Result<Vec<String>> {
        let url = self.default_variety_url(name).await?;
        let pokemon = self.get_response(&url).await?;
        pokemon["moves"]
            .as_array()
            .map(|moves| {
                moves
                    .iter()
                    .filter_map(|m| m["move"]["name"].as_str())
                    .map(strip_hyphens)
                    .collect()
            })
            .ok_or(ForgeError::ApiRequest { url })
    }

    async fn assert_species_exists(&self, name: &str) -> Result<()> {
        self.get_response(&self.species_url(name))
            .await
            .map(|_| ())
            .map_err(|e| {
                debug!(name, error = %e, "Species lookup failed");
                ForgeError::SpeciesNotFound(name.to_string())
            })
    }

    async fn get_random_species_name(&self) -> Result<String> {
        let collection = self.get_response(&self.species_collection_url()).await?;
        let count = collection["count"]
            .as_u64()
            .filter(|&c| c > 0)
            .ok_or(ForgeError::ApiRequest {
                url: self.species_collection_url(),
            })?;

        // Rejection sampling: re-roll while the drawn species belongs to the
        // excluded generation. No upper retry bound; termination is
        // probabilistic, bounded by the excluded fraction of the catalog.
        loop {
            let index = rand::thread_rng().gen_range(1..=count);
            let url = self.species_url(&index.to_string());
            let species = self.get_response(&url).await?;
            let generation = species["generation"]["name"].as_str().unwrap_or_default();
            if generation == EXCLUDED_GENERATION {
                debug!(index, "Drew excluded-generation species, re-rolling");
                continue;
            }
            return species["name"]
                .as_str()
                .map(String::from)
                .ok_or(ForgeError::ApiRequest { url });
        }
    }
}
