//! Geolocation-assisted branch pre-selection.
//!
//! [`LocationAssist`] holds the branch picker's page-local state. One call to
//! [`LocationAssist::run`] asks for the user's position, resolves the nearest
//! branch and pre-selects it if the guest has not picked one yet. Status moves
//! `Idle -> Loading -> Success | Error` and never goes back; every failure
//! leaves manual selection untouched.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rfb_core::Branch;
use serde::{Deserialize, Serialize};

use crate::geolocation::{GeolocationError, GeolocationOptions, PositionSource};
use crate::resolve::{find_nearest_branch, ResolutionError};
use crate::types::NearestBranch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl ResolutionStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, ResolutionStatus::Success | ResolutionStatus::Error)
    }
}

/// What the branch picker observes once an assist settles.
///
/// Serializes as `{"status":"success","branchId":..,"branchName":..}` or
/// `{"status":"error"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AssistOutcome {
    Success {
        #[serde(rename = "branchId")]
        branch_id: String,
        #[serde(rename = "branchName")]
        branch_name: String,
    },
    Error,
}

#[derive(Debug, Default)]
struct AssistState {
    status: ResolutionStatus,
    selected_branch_id: Option<String>,
    nearest_branch_name: Option<String>,
    detached: bool,
}

impl AssistState {
    fn settle(&mut self, result: Result<NearestBranch, ResolutionError>) -> AssistOutcome {
        match result {
            Ok(nearest) => {
                if self.selected_branch_id.is_none() {
                    tracing::info!(
                        branch_id = %nearest.branch_id,
                        distance_km = nearest.distance_km,
                        "pre-selected nearest branch"
                    );
                    self.selected_branch_id = Some(nearest.branch_id.clone());
                    self.nearest_branch_name = Some(nearest.branch_name.clone());
                } else {
                    tracing::debug!(
                        branch_id = %nearest.branch_id,
                        "nearest branch found but a branch is already selected"
                    );
                }
                self.status = ResolutionStatus::Success;
                AssistOutcome::Success {
                    branch_id: nearest.branch_id,
                    branch_name: nearest.branch_name,
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "location assist failed; manual selection stays");
                self.status = ResolutionStatus::Error;
                AssistOutcome::Error
            }
        }
    }
}

/// Branch picker state plus the nearest-branch assist.
///
/// Clones share state, so a spawned task can run the assist while the owner
/// reads the selection.
#[derive(Debug, Clone, Default)]
pub struct LocationAssist {
    state: Arc<Mutex<AssistState>>,
}

/// Lets the owner of a [`LocationAssist`] mark it as gone.
///
/// After [`AssistHandle::detach`], a position request that settles late has
/// no effect on the state.
#[derive(Debug, Clone)]
pub struct AssistHandle {
    state: Arc<Mutex<AssistState>>,
}

impl AssistHandle {
    pub fn detach(&self) {
        lock(&self.state).detached = true;
    }

    #[must_use]
    pub fn is_detached(&self) -> bool {
        lock(&self.state).detached
    }
}

fn lock(state: &Mutex<AssistState>) -> MutexGuard<'_, AssistState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl LocationAssist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a branch already chosen, e.g. from a `?branchId=` link.
    #[must_use]
    pub fn with_selection(branch_id: impl Into<String>) -> Self {
        let assist = Self::default();
        lock(&assist.state).selected_branch_id = Some(branch_id.into());
        assist
    }

    #[must_use]
    pub fn handle(&self) -> AssistHandle {
        AssistHandle {
            state: Arc::clone(&self.state),
        }
    }

    /// Record a manual choice. Manual choices always win over the assist.
    pub fn select_branch(&self, branch_id: impl Into<String>) {
        lock(&self.state).selected_branch_id = Some(branch_id.into());
    }

    #[must_use]
    pub fn status(&self) -> ResolutionStatus {
        lock(&self.state).status
    }

    #[must_use]
    pub fn selected_branch_id(&self) -> Option<String> {
        lock(&self.state).selected_branch_id.clone()
    }

    /// Name of the branch the assist pre-selected, if it did.
    #[must_use]
    pub fn nearest_branch_name(&self) -> Option<String> {
        lock(&self.state).nearest_branch_name.clone()
    }

    /// Ask `source` for a position and pre-select the nearest branch.
    ///
    /// Returns `None` without touching the state when the source is
    /// unsupported, when this assist already ran, or when it was detached
    /// before the request settled. Otherwise returns the settled outcome.
    pub async fn run<S: PositionSource>(
        &self,
        source: &S,
        branches: &[Branch],
        options: &GeolocationOptions,
    ) -> Option<AssistOutcome> {
        if !source.is_supported() {
            tracing::debug!("geolocation not supported; branch selection stays manual");
            return None;
        }

        {
            let mut state = lock(&self.state);
            if state.detached || state.status != ResolutionStatus::Idle {
                return None;
            }
            state.status = ResolutionStatus::Loading;
        }

        let result =
            match tokio::time::timeout(options.timeout, source.current_position(options)).await {
                Ok(Ok(position)) => find_nearest_branch(position.coordinate, branches),
                Ok(Err(e)) => Err(ResolutionError::from(e)),
                Err(_) => Err(ResolutionError::from(GeolocationError::Timeout)),
            };

        let mut state = lock(&self.state);
        if state.detached {
            tracing::debug!("location assist detached before settling; ignoring result");
            return None;
        }
        Some(state.settle(result))
    }
}

#[cfg(test)]
#[path = "assist_test.rs"]
mod tests;
