//! HTTP client for the feedback REST API.
//!
//! Wraps `reqwest` with the API's `{success, data, error}` envelope handling.
//! A failed branch listing yields an empty list so the review form still
//! renders.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use rfb_core::{AppConfig, Branch, MenuItem, NewReview, Review};

use crate::error::ApiError;
use crate::types::ApiEnvelope;

/// Number of reviews requested when the caller does not say.
pub const DEFAULT_REVIEW_LIMIT: u32 = 10;

/// Client for the feedback REST API.
///
/// Use [`ApiClient::new`] with the API origin (e.g. `http://localhost:4000`);
/// all endpoints live under `/api`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute http(s) URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so path segments append instead of
        // replacing the last one.
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "expected an http(s) origin".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.api_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Lists all branches.
    ///
    /// A `"success": false` envelope, or one whose `data` is not an array, is
    /// logged and treated as an empty list.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] if the body is not an envelope or a listed
    ///   branch is malformed.
    pub async fn get_branches(&self) -> Result<Vec<Branch>, ApiError> {
        let url = self.endpoint(&["branches"], &[])?;
        let envelope: ApiEnvelope<serde_json::Value> = self.get_envelope(url, "branches").await?;

        if !envelope.success {
            tracing::warn!(
                error = envelope.error.as_deref().unwrap_or("unknown error"),
                "branch listing failed; continuing with no branches"
            );
            return Ok(Vec::new());
        }

        match envelope.data {
            Some(data @ serde_json::Value::Array(_)) => {
                serde_json::from_value(data).map_err(|e| ApiError::Deserialize {
                    context: "branches".to_string(),
                    source: e,
                })
            }
            other => {
                tracing::warn!(
                    data_kind = json_kind(other.as_ref()),
                    "branch data is not an array; continuing with no branches"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Fetches one branch by ID.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] if the API reports failure (e.g. unknown ID).
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] if the body does not match the expected shape.
    pub async fn get_branch(&self, id: &str) -> Result<Branch, ApiError> {
        let url = self.endpoint(&["branches", id], &[])?;
        let envelope: ApiEnvelope<Branch> =
            self.get_envelope(url, &format!("branch(id={id})")).await?;
        envelope.into_data("Branch not found").map_err(ApiError::Api)
    }

    /// Lists reviews, newest first as ordered by the API.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] if the API reports failure.
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] if the body does not match the expected shape.
    pub async fn get_reviews(
        &self,
        branch_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Review>, ApiError> {
        let limit = limit.to_string();
        let mut query = Vec::with_capacity(2);
        if let Some(id) = branch_id {
            query.push(("branchId", id));
        }
        query.push(("limit", limit.as_str()));

        let url = self.endpoint(&["reviews"], &query)?;
        let envelope: ApiEnvelope<Vec<Review>> = self.get_envelope(url, "reviews").await?;
        envelope
            .into_data("Failed to load reviews")
            .map_err(ApiError::Api)
    }

    /// Submits a review and returns the stored record.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] on a non-2xx status or a `"success": false`
    ///   envelope, carrying the API's message or `"Failed to submit review"`.
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] if a successful body cannot be parsed.
    pub async fn submit_review(&self, review: &NewReview) -> Result<Review, ApiError> {
        const FALLBACK: &str = "Failed to submit review";

        let url = self.endpoint(&["reviews"], &[])?;
        tracing::debug!(url = %url, branch_id = %review.branch_id, "submitting review");

        let response = self.client.post(url.clone()).json(review).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let envelope = serde_json::from_str::<ApiEnvelope<Review>>(&body);
        if !status.is_success() {
            let message = envelope
                .ok()
                .and_then(|e| e.error)
                .unwrap_or_else(|| FALLBACK.to_string());
            tracing::warn!(status = status.as_u16(), error = %message, "review rejected");
            return Err(ApiError::Api(message));
        }

        let envelope = envelope.map_err(|e| ApiError::Deserialize {
            context: "submit review".to_string(),
            source: e,
        })?;
        envelope.into_data(FALLBACK).map_err(ApiError::Api)
    }

    /// Lists menu items, optionally filtered by category and branch.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] if the API reports failure.
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] if the body does not match the expected shape.
    pub async fn get_menus(
        &self,
        category: Option<&str>,
        branch_id: Option<&str>,
    ) -> Result<Vec<MenuItem>, ApiError> {
        let mut query = Vec::with_capacity(2);
        if let Some(category) = category {
            query.push(("category", category));
        }
        if let Some(id) = branch_id {
            query.push(("branchId", id));
        }

        let url = self.endpoint(&["menus"], &query)?;
        let envelope: ApiEnvelope<Vec<MenuItem>> = self.get_envelope(url, "menus").await?;
        envelope
            .into_data("Failed to load menu")
            .map_err(ApiError::Api)
    }

    /// Builds `{base}/api/{segments..}?{query}` with each segment and query
    /// value percent-encoded.
    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .push("api")
            .extend(segments);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET and parses the body as an envelope.
    ///
    /// Error statuses are tolerated as long as the body is still an envelope,
    /// so the API's own message reaches the caller.
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        tracing::debug!(url = %url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ApiEnvelope<T>>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            }),
            Err(e) => Err(ApiError::Deserialize {
                context: context.to_string(),
                source: e,
            }),
        }
    }
}

fn json_kind(value: Option<&serde_json::Value>) -> &'static str {
    match value {
        None | Some(serde_json::Value::Null) => "null",
        Some(serde_json::Value::Bool(_)) => "bool",
        Some(serde_json::Value::Number(_)) => "number",
        Some(serde_json::Value::String(_)) => "string",
        Some(serde_json::Value::Array(_)) => "array",
        Some(serde_json::Value::Object(_)) => "object",
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
