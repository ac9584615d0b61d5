//! Client configuration: the optional header-override layer, loaded from the
//! environment or injected explicitly.
//!
//! External interaction: `from_env` reads `COMMANDANDCONTROL_HEADERS`, a JSON
//! object mapping header names to a string or null (null removes the header
//! from the final set). Load `.env` before calling `from_env` if you rely on
//! one; this crate does not load it for you.

use crate::error::{ClientError, Result};
use crate::headers::{HeaderBuilder, RequestHeaders};
use std::env;

/// Environment variable holding the JSON header-override map.
pub const HEADERS_ENV_VAR: &str = "COMMANDANDCONTROL_HEADERS";

/// Client configuration. Carries the header-override layer so it is injected
/// where needed instead of being read from a process-wide variable per call.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub header_overrides: Option<RequestHeaders>,
}

impl ClientConfig {
    /// Configuration with no overrides; requests carry the fixed defaults.
    pub fn new() -> Self {
        Self {
            header_overrides: None,
        }
    }

    /// Configuration with an explicit override layer.
    pub fn with_header_overrides(header_overrides: RequestHeaders) -> Self {
        Self {
            header_overrides: Some(header_overrides),
        }
    }

    /// Loads configuration from the environment. An unset variable means no
    /// overrides; a set variable must hold UTF-8 JSON object of string-or-null,
    /// e.g. `{"X-Tenant":"acme","Content-Type":null}`. Any set-but-unusable
    /// value is a Config error, never silently ignored.
    pub fn from_env() -> Result<Self> {
        match env::var(HEADERS_ENV_VAR) {
            Ok(raw) => {
                let header_overrides: RequestHeaders = serde_json::from_str(&raw).map_err(|e| {
                    ClientError::Config(format!(
                        "{} is not a JSON object of header name to string or null: {}",
                        HEADERS_ENV_VAR, e
                    ))
                })?;
                Ok(Self {
                    header_overrides: Some(header_overrides),
                })
            }
            Err(env::VarError::NotPresent) => Ok(Self {
                header_overrides: None,
            }),
            Err(env::VarError::NotUnicode(_)) => Err(ClientError::Config(format!(
                "{} is set but not valid UTF-8",
                HEADERS_ENV_VAR
            ))),
        }
    }

    /// Header builder carrying this configuration's override layer.
    pub fn header_builder(&self) -> HeaderBuilder {
        match &self.header_overrides {
            Some(overrides) => HeaderBuilder::with_overrides(overrides.clone()),
            None => HeaderBuilder::new(),
        }
    }
}
