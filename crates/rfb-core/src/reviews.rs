//! Review records and the rules the feedback form applies before submitting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the guest received their order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisitType {
    DineIn,
    #[default]
    Takeaway,
    Delivery,
}

impl VisitType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VisitType::DineIn => "DINE_IN",
            VisitType::Takeaway => "TAKEAWAY",
            VisitType::Delivery => "DELIVERY",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            VisitType::DineIn => "Dine-in",
            VisitType::Takeaway => "Takeaway",
            VisitType::Delivery => "Delivery",
        }
    }
}

impl std::fmt::Display for VisitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VisitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "DINE_IN" => Ok(VisitType::DineIn),
            "TAKEAWAY" => Ok(VisitType::Takeaway),
            "DELIVERY" => Ok(VisitType::Delivery),
            other => Err(format!("unknown visit type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewUser {
    pub name: String,
}

/// A published review as returned by `GET /api/reviews`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub overall_rating: u8,
    #[serde(default)]
    pub taste_rating: Option<u8>,
    #[serde(default)]
    pub service_rating: Option<u8>,
    #[serde(default)]
    pub ambience_rating: Option<u8>,
    #[serde(default)]
    pub cleanliness_rating: Option<u8>,
    #[serde(default)]
    pub value_rating: Option<u8>,
    #[serde(default)]
    pub review_text: String,
    pub visit_type: VisitType,
    #[serde(default)]
    pub table_number: Option<String>,
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub guest_phone: Option<String>,
    #[serde(default)]
    pub staff_reply: Option<String>,
    #[serde(default)]
    pub staff_reply_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user: Option<ReviewUser>,
}

impl Review {
    /// Guest name, then the linked account name, then `"Anonymous"`.
    #[must_use]
    pub fn reviewer_name(&self) -> &str {
        self.guest_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.user.as_ref().map(|u| u.name.as_str()))
            .unwrap_or("Anonymous")
    }

    /// Detailed ratings that were actually given, labelled for this visit type.
    #[must_use]
    pub fn aspect_ratings(&self) -> Vec<(RatingAspect, u8)> {
        [
            (RatingAspect::Taste, self.taste_rating),
            (RatingAspect::Service, self.service_rating),
            (RatingAspect::Ambience, self.ambience_rating),
            (RatingAspect::Cleanliness, self.cleanliness_rating),
            (RatingAspect::Value, self.value_rating),
        ]
        .into_iter()
        .filter_map(|(aspect, rating)| rating.filter(|r| *r > 0).map(|r| (aspect, r)))
        .collect()
    }
}

/// The payload posted to `POST /api/reviews`. A rating of `0` means "not rated".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub branch_id: String,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub overall_rating: u8,
    pub taste_rating: u8,
    pub service_rating: u8,
    pub ambience_rating: u8,
    pub cleanliness_rating: u8,
    pub value_rating: u8,
    pub visit_type: VisitType,
    pub review_text: String,
    pub table_number: String,
}

impl NewReview {
    /// Drops fields that do not apply to the chosen visit type.
    ///
    /// Table numbers only make sense for dine-in guests.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.visit_type != VisitType::DineIn {
            self.table_number.clear();
        }
        self.review_text = self.review_text.trim().to_string();
        self
    }
}

/// Optional per-aspect ratings shown under the overall rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingAspect {
    Service,
    Taste,
    Ambience,
    Cleanliness,
    Value,
}

impl RatingAspect {
    pub const ALL: [RatingAspect; 5] = [
        RatingAspect::Service,
        RatingAspect::Taste,
        RatingAspect::Ambience,
        RatingAspect::Cleanliness,
        RatingAspect::Value,
    ];

    fn field_name(self) -> &'static str {
        match self {
            RatingAspect::Service => "serviceRating",
            RatingAspect::Taste => "tasteRating",
            RatingAspect::Ambience => "ambienceRating",
            RatingAspect::Cleanliness => "cleanlinessRating",
            RatingAspect::Value => "valueRating",
        }
    }
}

/// Question wording for an aspect. Delivery orders are asked about the
/// delivery experience instead of the restaurant floor.
#[must_use]
pub fn question_label(aspect: RatingAspect, visit_type: VisitType) -> &'static str {
    let delivery = visit_type == VisitType::Delivery;
    match aspect {
        RatingAspect::Service if delivery => "Delivery Time & Service",
        RatingAspect::Service => "Service",
        RatingAspect::Ambience if delivery => "Packaging Quality",
        RatingAspect::Ambience => "Ambience & Atmosphere",
        RatingAspect::Cleanliness if delivery => "Food Hygiene",
        RatingAspect::Cleanliness => "Cleanliness",
        RatingAspect::Taste => "Taste Quality",
        RatingAspect::Value => "Value for Money",
    }
}

/// Word shown next to each point on the 1-5 emoji scale.
#[must_use]
pub fn rating_label(rating: u8) -> Option<&'static str> {
    match rating {
        1 => Some("Angry"),
        2 => Some("Unhappy"),
        3 => Some("Neutral"),
        4 => Some("Happy"),
        5 => Some("Loved it"),
        _ => None,
    }
}

/// Low overall ratings must come with a written explanation.
#[must_use]
pub fn requires_grievance(overall_rating: u8) -> bool {
    (1..=3).contains(&overall_rating)
}

/// Reasons the form refuses to submit. The display text is shown to the guest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewValidationError {
    #[error("Please select a branch")]
    BranchRequired,

    #[error("Please provide an overall rating")]
    OverallRatingRequired,

    #[error("Please provide your phone number")]
    PhoneRequired,

    #[error("Please describe your grievance (required for 1-3 star ratings)")]
    GrievanceRequired,

    #[error("{field} must be between {min} and 5")]
    RatingOutOfRange { field: &'static str, min: u8 },
}

/// Check a review the way the form does before posting it.
///
/// Rules are applied in a fixed order and the first failure is returned.
///
/// # Errors
///
/// Returns the first [`ReviewValidationError`] that applies.
pub fn validate_new_review(review: &NewReview) -> Result<(), ReviewValidationError> {
    if review.branch_id.trim().is_empty() {
        return Err(ReviewValidationError::BranchRequired);
    }
    if review.overall_rating == 0 {
        return Err(ReviewValidationError::OverallRatingRequired);
    }
    if review.overall_rating > 5 {
        return Err(ReviewValidationError::RatingOutOfRange {
            field: "overallRating",
            min: 1,
        });
    }
    if review.guest_phone.trim().is_empty() {
        return Err(ReviewValidationError::PhoneRequired);
    }
    if requires_grievance(review.overall_rating) && review.review_text.trim().is_empty() {
        return Err(ReviewValidationError::GrievanceRequired);
    }

    for aspect in RatingAspect::ALL {
        let rating = match aspect {
            RatingAspect::Service => review.service_rating,
            RatingAspect::Taste => review.taste_rating,
            RatingAspect::Ambience => review.ambience_rating,
            RatingAspect::Cleanliness => review.cleanliness_rating,
            RatingAspect::Value => review.value_rating,
        };
        if rating > 5 {
            return Err(ReviewValidationError::RatingOutOfRange {
                field: aspect.field_name(),
                min: 0,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "reviews_test.rs"]
mod tests;
