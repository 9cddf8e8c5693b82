//! Nearest-branch resolution.

use rfb_core::Branch;
use thiserror::Error;

use crate::distance::haversine_km;
use crate::extract::extract_coordinates;
use crate::geolocation::GeolocationError;
use crate::types::{Coordinate, NearestBranch, ResolvedBranch};

/// Why no nearest branch could be determined.
///
/// Every variant leads to the same outcome for the guest: the branch picker
/// stays on manual selection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionError {
    #[error("no branch has a usable location")]
    NoResolvableBranches,

    #[error("user position {latitude},{longitude} is outside the valid range")]
    InvalidUserPosition { latitude: f64, longitude: f64 },

    #[error("geolocation failed: {0}")]
    Geolocation(#[from] GeolocationError),
}

/// Derive a coordinate for a branch.
///
/// The map link is tried first. Explicit latitude/longitude are used only
/// when the link is missing or yields nothing, and only when both are present
/// and in range.
#[must_use]
pub fn branch_coordinate(branch: &Branch) -> Option<Coordinate> {
    if let Some(coord) = branch.map_link.as_deref().and_then(extract_coordinates) {
        return Some(coord);
    }

    match (branch.latitude, branch.longitude) {
        (Some(lat), Some(lng)) => {
            let coord = Coordinate::checked(lat, lng);
            if coord.is_none() {
                tracing::debug!(
                    branch_id = %branch.id,
                    latitude = lat,
                    longitude = lng,
                    "ignoring out-of-range branch coordinates"
                );
            }
            coord
        }
        _ => None,
    }
}

/// Pair each branch with its coordinate, dropping branches that have none.
///
/// Input order is preserved.
#[must_use]
pub fn resolve_branches(branches: &[Branch]) -> Vec<ResolvedBranch<'_>> {
    branches
        .iter()
        .filter_map(|branch| {
            branch_coordinate(branch).map(|coordinate| ResolvedBranch { branch, coordinate })
        })
        .collect()
}

/// Find the branch closest to `user`.
///
/// When two branches are exactly the same distance away the one listed first
/// wins.
///
/// # Errors
///
/// - [`ResolutionError::InvalidUserPosition`] if `user` is out of range.
/// - [`ResolutionError::NoResolvableBranches`] if no branch has a coordinate.
pub fn find_nearest_branch(
    user: Coordinate,
    branches: &[Branch],
) -> Result<NearestBranch, ResolutionError> {
    if !user.is_valid() {
        return Err(ResolutionError::InvalidUserPosition {
            latitude: user.latitude,
            longitude: user.longitude,
        });
    }

    let resolved = resolve_branches(branches);
    tracing::debug!(
        total = branches.len(),
        resolvable = resolved.len(),
        "resolved branch coordinates"
    );

    let mut nearest: Option<(ResolvedBranch<'_>, f64)> = None;
    for candidate in resolved {
        let distance = haversine_km(user, candidate.coordinate);
        // Strict comparison keeps the earliest branch on exact ties.
        if nearest.as_ref().is_none_or(|(_, best)| distance < *best) {
            nearest = Some((candidate, distance));
        }
    }

    let (winner, distance_km) = nearest.ok_or(ResolutionError::NoResolvableBranches)?;
    Ok(NearestBranch {
        branch_id: winner.branch.id.clone(),
        branch_name: winner.branch.name.clone(),
        coordinate: winner.coordinate,
        distance_km,
    })
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
