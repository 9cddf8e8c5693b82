//! Position sources for the location assist.
//!
//! A [`PositionSource`] stands in for the platform location API. Requests are
//! made with [`GeolocationOptions`]; the caller enforces `timeout`, and
//! [`CachedPositionSource`] honours `maximum_age` by reusing a recent fix.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rfb_core::AppConfig;
use thiserror::Error;
use tokio::time::Instant;

use crate::types::Coordinate;

/// Options passed with every position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeolocationOptions {
    pub enable_high_accuracy: bool,
    /// Longest the caller waits for a fix before giving up.
    pub timeout: Duration,
    /// Oldest cached fix that may be returned instead of a fresh one.
    pub maximum_age: Duration,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(5 * 60),
        }
    }
}

impl GeolocationOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            enable_high_accuracy: config.geo_high_accuracy,
            timeout: config.geo_timeout(),
            maximum_age: config.geo_max_age(),
        }
    }
}

/// A position fix and when it was taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub coordinate: Coordinate,
    pub timestamp: Instant,
}

impl Position {
    #[must_use]
    pub fn now(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            timestamp: Instant::now(),
        }
    }

    #[must_use]
    pub fn age(&self) -> Duration {
        self.timestamp.elapsed()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("timed out waiting for a position fix")]
    Timeout,
}

/// Something that can report the user's current position.
pub trait PositionSource: Send + Sync {
    /// Whether the platform offers location at all. Unsupported sources are
    /// never queried.
    fn is_supported(&self) -> bool {
        true
    }

    /// Request the current position.
    fn current_position(
        &self,
        options: &GeolocationOptions,
    ) -> impl Future<Output = Result<Position, GeolocationError>> + Send;
}

/// A source that always answers with the same result, e.g. a position given
/// on the command line.
#[derive(Debug, Clone, Copy)]
pub struct FixedPositionSource {
    result: Result<Coordinate, GeolocationError>,
}

impl FixedPositionSource {
    #[must_use]
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            result: Ok(coordinate),
        }
    }

    #[must_use]
    pub fn failing(error: GeolocationError) -> Self {
        Self { result: Err(error) }
    }
}

impl PositionSource for FixedPositionSource {
    async fn current_position(
        &self,
        _options: &GeolocationOptions,
    ) -> Result<Position, GeolocationError> {
        self.result.map(Position::now)
    }
}

/// A platform without location support.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedPositionSource;

impl PositionSource for UnsupportedPositionSource {
    fn is_supported(&self) -> bool {
        false
    }

    async fn current_position(
        &self,
        _options: &GeolocationOptions,
    ) -> Result<Position, GeolocationError> {
        Err(GeolocationError::PositionUnavailable)
    }
}

/// Wraps a source and reuses its last fix while it is younger than
/// `maximum_age`.
#[derive(Debug)]
pub struct CachedPositionSource<S> {
    inner: S,
    last_fix: Mutex<Option<Position>>,
}

impl<S> CachedPositionSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            last_fix: Mutex::new(None),
        }
    }

    fn cached_fix(&self, maximum_age: Duration) -> Option<Position> {
        if maximum_age.is_zero() {
            return None;
        }
        let last_fix = *self.last_fix.lock().unwrap_or_else(PoisonError::into_inner);
        last_fix.filter(|fix| fix.age() <= maximum_age)
    }
}

impl<S: PositionSource> PositionSource for CachedPositionSource<S> {
    fn is_supported(&self) -> bool {
        self.inner.is_supported()
    }

    async fn current_position(
        &self,
        options: &GeolocationOptions,
    ) -> Result<Position, GeolocationError> {
        if let Some(fix) = self.cached_fix(options.maximum_age) {
            tracing::debug!(age_ms = fix.age().as_millis(), "reusing cached position fix");
            return Ok(fix);
        }

        let fix = self.inner.current_position(options).await?;
        *self.last_fix.lock().unwrap_or_else(PoisonError::into_inner) = Some(fix);
        Ok(fix)
    }
}
