//! Geographic value types shared by the resolver.

use rfb_core::Branch;
use serde::{Deserialize, Serialize};

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without range checks.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate only if both parts are finite and in range.
    #[must_use]
    pub fn checked(latitude: f64, longitude: f64) -> Option<Self> {
        let coord = Self::new(latitude, longitude);
        coord.is_valid().then_some(coord)
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5},{:.5}", self.latitude, self.longitude)
    }
}

/// A branch paired with the coordinate derived for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBranch<'a> {
    pub branch: &'a Branch,
    pub coordinate: Coordinate,
}

/// The branch closest to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestBranch {
    pub branch_id: String,
    pub branch_name: String,
    pub coordinate: Coordinate,
    pub distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_accepts_boundaries() {
        assert!(Coordinate::checked(90.0, 180.0).is_some());
        assert!(Coordinate::checked(-90.0, -180.0).is_some());
        assert!(Coordinate::checked(0.0, 0.0).is_some());
    }

    #[test]
    fn checked_rejects_out_of_range_and_non_finite() {
        assert!(Coordinate::checked(90.5, 10.0).is_none());
        assert!(Coordinate::checked(10.0, -180.01).is_none());
        assert!(Coordinate::checked(f64::NAN, 10.0).is_none());
        assert!(Coordinate::checked(10.0, f64::INFINITY).is_none());
    }

    #[test]
    fn display_uses_five_decimals() {
        assert_eq!(
            Coordinate::new(13.0878, 80.2785).to_string(),
            "13.08780,80.27850"
        );
    }
}
