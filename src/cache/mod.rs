//! Durable caching of raw PokeAPI response bodies, keyed by request URL.

pub mod response_cache;

pub use response_cache::ResponseCache;
