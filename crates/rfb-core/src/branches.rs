use serde::{Deserialize, Serialize};

/// A restaurant branch as returned by `GET /api/branches`.
///
/// Only `id` and `name` are guaranteed; everything else depends on how
/// completely the branch was set up on the API side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: String,
    pub name: String,
    /// Map-provider URL, possibly embedding the branch coordinates.
    #[serde(default)]
    pub map_link: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub working_hours: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default, rename = "_count")]
    pub count: Option<ReviewCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReviewCount {
    #[serde(default)]
    pub reviews: u64,
}

impl Branch {
    /// Creates a branch with only the identifying fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            map_link: None,
            latitude: None,
            longitude: None,
            address: None,
            city: None,
            state: None,
            phone: None,
            working_hours: None,
            average_rating: None,
            count: None,
        }
    }

    #[must_use]
    pub fn with_map_link(mut self, map_link: impl Into<String>) -> Self {
        self.map_link = Some(map_link.into());
        self
    }

    #[must_use]
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// `"City, State"` with whichever parts are known.
    #[must_use]
    pub fn locality(&self) -> Option<String> {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => Some(format!("{city}, {state}")),
            (Some(part), None) | (None, Some(part)) => Some(part.to_string()),
            (None, None) => None,
        }
    }

    /// Average rating to one decimal place, or `"N/A"` for unrated branches.
    #[must_use]
    pub fn rating_display(&self) -> String {
        self.average_rating
            .map_or_else(|| "N/A".to_string(), |r| format!("{r:.1}"))
    }

    #[must_use]
    pub fn review_count(&self) -> u64 {
        self.count.map_or(0, |c| c.reviews)
    }
}
