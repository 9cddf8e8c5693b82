pub mod app_config;
pub mod branches;
pub mod config;
pub mod menu;
pub mod reviews;

pub use app_config::{AppConfig, Environment};
pub use branches::{Branch, ReviewCount};
pub use config::{load_app_config, load_app_config_from_env};
pub use menu::{group_by_category, MenuBranch, MenuItem, MENU_CATEGORIES};
pub use reviews::{
    question_label, rating_label, requires_grievance, validate_new_review, NewReview,
    RatingAspect, Review, ReviewUser, ReviewValidationError, VisitType,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
