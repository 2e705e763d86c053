//! This module defines logic to serialize/deserialize problem and road geometry from json input
//! and create and write pragmatic solution.

use kargo_core::models::problem::{StationRegistry, TransportCost};
use kargo_core::network::{InMemoryRoutingCache, NetworkConfig, RoadGraph, RoadNetwork, RoadTransportCost, RoutingCache};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

pub mod geometry;
pub mod problem;
pub mod solution;

/// A format error.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)?;

        match &self.details {
            Some(details) => write!(f, " details: '{details}'"),
            None => Ok(()),
        }
    }
}

impl std::error::Error for FormatError {}

/// Keeps multiple format errors.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiFormatError {
    /// Inner errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Formats errors into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.errors).unwrap_or_else(|_| self.to_string())
    }

    /// Returns error codes in original order.
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|err| err.code.as_str()).collect()
    }
}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        Self { errors }
    }
}

impl From<FormatError> for MultiFormatError {
    fn from(error: FormatError) -> Self {
        Self { errors: vec![error] }
    }
}

impl fmt::Display for MultiFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join("\n"))
    }
}

impl std::error::Error for MultiFormatError {}

/// Keeps road network and routing cache shared by all problems created from the same source.
/// Cached entries are keyed by station identities, so they stay valid only while station ids keep
/// their locations.
pub struct RoutingContext {
    network: Arc<RoadNetwork>,
    cache: Arc<dyn RoutingCache>,
    config: NetworkConfig,
}

impl RoutingContext {
    /// Creates a new instance of `RoutingContext` with empty in-memory cache.
    pub fn new(graph: RoadGraph, config: NetworkConfig) -> Self {
        Self::new_with_cache(graph, Arc::new(InMemoryRoutingCache::default()), config)
    }

    /// Creates a new instance of `RoutingContext` with given cache.
    pub fn new_with_cache(graph: RoadGraph, cache: Arc<dyn RoutingCache>, config: NetworkConfig) -> Self {
        Self { network: Arc::new(RoadNetwork::new(Arc::new(graph))), cache, config }
    }

    /// Creates a routing context on top of the built-in fallback graph.
    pub fn fallback() -> Self {
        Self::new(RoadGraph::fallback(), NetworkConfig::default())
    }

    /// Returns road network.
    pub fn network(&self) -> &RoadNetwork {
        self.network.as_ref()
    }

    /// Creates station level transport cost for given stations.
    pub fn create_transport(&self, stations: Arc<StationRegistry>) -> Arc<dyn TransportCost> {
        Arc::new(RoadTransportCost::new(self.network.clone(), stations, self.cache.clone(), self.config.clone()))
    }
}
