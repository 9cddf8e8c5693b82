//! Nearest-branch resolution for the review form.
//!
//! Branch coordinates come from map-link URLs (see [`extract_coordinates`])
//! or from explicit latitude/longitude fields. [`find_nearest_branch`] picks
//! the closest branch by great-circle distance, and [`LocationAssist`] wraps
//! the whole flow behind a geolocation request whose failures never reach
//! the guest.

pub mod assist;
pub mod distance;
pub mod extract;
pub mod geolocation;
pub mod resolve;
pub mod types;

pub use assist::{AssistHandle, AssistOutcome, LocationAssist, ResolutionStatus};
pub use distance::{haversine_km, EARTH_RADIUS_KM};
pub use extract::{extract_coordinates, MapLinkPattern, MAP_LINK_PATTERNS};
pub use geolocation::{
    CachedPositionSource, FixedPositionSource, GeolocationError, GeolocationOptions, Position,
    PositionSource, UnsupportedPositionSource,
};
pub use resolve::{branch_coordinate, find_nearest_branch, resolve_branches, ResolutionError};
pub use types::{Coordinate, NearestBranch, ResolvedBranch};
