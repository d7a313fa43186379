//! Tracing subscriber setup shared by the site binaries.
//!
//! ```ignore
//! use cgn_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("cgn_site=debug,cgn_core=debug")
//!     .init()?;
//! ```
//!
//! `RUST_LOG` takes precedence over the configured filter.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{SiteError, SiteResult};

pub const DEFAULT_FILTER: &str = "cgn_site=info,cgn_core=info";

/// Builder for the global tracing subscriber.
pub struct LoggingBuilder {
    env_filter: Option<String>,
    ansi: bool,
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            env_filter: None,
            ansi: true,
        }
    }

    /// Set the filter directive (e.g., "cgn_site=info,cgn_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Disable ANSI colors (for log files and CI output).
    pub fn no_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Resolve the effective filter: `RUST_LOG`, else the configured
    /// directive, else [`DEFAULT_FILTER`].
    pub fn build_filter(&self) -> SiteResult<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        let directive = self.env_filter.as_deref().unwrap_or(DEFAULT_FILTER);
        EnvFilter::try_new(directive)
            .map_err(|e| SiteError::Logging(format!("invalid filter '{}': {}", directive, e)))
    }

    /// Install as the global default subscriber.
    pub fn init(self) -> SiteResult<()> {
        let filter = self.build_filter()?;
        let fmt_layer = tracing_subscriber::fmt::layer().with_ansi(self.ansi);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| SiteError::Logging(e.to_string()))
    }
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter_is_accepted() {
        let builder = LoggingBuilder::new().with_filter("cgn_core=debug");
        assert!(builder.build_filter().is_ok());
    }

    #[test]
    fn test_no_ansi_keeps_filter() {
        let builder = LoggingBuilder::new().with_filter("cgn_site=warn").no_ansi();
        assert!(!builder.ansi);
        assert!(builder.build_filter().is_ok());
        assert!(LoggingBuilder::new().ansi);
    }

    #[test]
    fn test_default_filter_is_valid() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_events_reach_scoped_subscriber() {
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_filter(EnvFilter::new("debug")),
        );

        tracing::subscriber::with_default(subscriber, || {
            let gallery = crate::Gallery::builtin();
            let mut state = crate::ViewState::new(&gallery);
            assert!(state.apply(&gallery, crate::GalleryAction::ToggleMenu));
        });
    }
}
