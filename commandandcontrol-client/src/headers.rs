//! Request-header construction: fixed defaults layered under configuration
//! and per-call overrides, later layers winning per key.

use std::collections::BTreeMap;

/// One override layer of request headers. `Some(value)` sets the header;
/// `None` marks it for removal from the final set.
pub type RequestHeaders = BTreeMap<String, Option<String>>;

/// Versioned media type sent as both `Accept` and `Content-Type` by default.
pub const MIME_TYPE: &str = "application/vnd.aws-cdf-v1.0+json";

/// Builds the header set for a request from three layers: fixed defaults,
/// configuration overrides injected at construction, and per-call overrides
/// passed to [`build`](HeaderBuilder::build). Later layers override earlier
/// ones per key; keys whose final value is `None` are dropped entirely.
#[derive(Debug, Clone, Default)]
pub struct HeaderBuilder {
    config_overrides: Option<RequestHeaders>,
}

impl HeaderBuilder {
    /// Builder with the fixed defaults only.
    pub fn new() -> Self {
        Self {
            config_overrides: None,
        }
    }

    /// Builder with a configuration override layer applied on top of the defaults.
    pub fn with_overrides(overrides: RequestHeaders) -> Self {
        Self {
            config_overrides: Some(overrides),
        }
    }

    /// Merges defaults, configuration overrides, and `additional` into the
    /// final header set. Pure: same inputs always yield the same output.
    pub fn build(&self, additional: Option<&RequestHeaders>) -> BTreeMap<String, String> {
        let mut merged: RequestHeaders = BTreeMap::new();
        merged.insert("Accept".to_string(), Some(MIME_TYPE.to_string()));
        merged.insert("Content-Type".to_string(), Some(MIME_TYPE.to_string()));

        if let Some(overrides) = &self.config_overrides {
            for (key, value) in overrides {
                merged.insert(key.clone(), value.clone());
            }
        }

        if let Some(additional) = additional {
            for (key, value) in additional {
                merged.insert(key.clone(), value.clone());
            }
        }

        let headers: BTreeMap<String, String> = merged
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect();

        tracing::debug!(header_count = headers.len(), "built request headers");
        headers
    }
}
