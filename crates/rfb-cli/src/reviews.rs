//! Review listing and submission.

use clap::Args;
use rfb_api::{ApiClient, ApiError};
use rfb_core::{
    question_label, rating_label, requires_grievance, validate_new_review, Branch, NewReview,
    Review, VisitType,
};

/// Fields of the feedback form.
#[derive(Debug, Args)]
pub(crate) struct ReviewArgs {
    /// Branch ID being reviewed
    #[arg(long)]
    pub branch: String,
    /// Contact phone number
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Overall rating, 1-5
    #[arg(long, default_value_t = 0)]
    pub overall: u8,
    /// Guest name
    #[arg(long, default_value = "")]
    pub name: String,
    /// Guest email
    #[arg(long, default_value = "")]
    pub email: String,
    /// DINE_IN, TAKEAWAY or DELIVERY
    #[arg(long, default_value_t = VisitType::Takeaway)]
    pub visit_type: VisitType,
    /// Table number (dine-in only)
    #[arg(long, default_value = "")]
    pub table: String,
    /// Review text; required for ratings of 3 or lower
    #[arg(long, default_value = "")]
    pub text: String,
    #[arg(long, default_value_t = 0)]
    pub taste: u8,
    #[arg(long, default_value_t = 0)]
    pub service: u8,
    #[arg(long, default_value_t = 0)]
    pub ambience: u8,
    #[arg(long, default_value_t = 0)]
    pub cleanliness: u8,
    #[arg(long, default_value_t = 0)]
    pub value: u8,
}

impl ReviewArgs {
    pub(crate) fn into_new_review(self) -> NewReview {
        NewReview {
            branch_id: self.branch,
            guest_name: self.name,
            guest_email: self.email,
            guest_phone: self.phone,
            overall_rating: self.overall,
            taste_rating: self.taste,
            service_rating: self.service,
            ambience_rating: self.ambience,
            cleanliness_rating: self.cleanliness,
            value_rating: self.value,
            visit_type: self.visit_type,
            review_text: self.text,
            table_number: self.table,
        }
        .normalized()
    }
}

/// Print recent reviews, under a branch header when filtered by branch.
///
/// # Errors
///
/// Returns an error if the review request fails.
pub(crate) async fn run_reviews(
    client: &ApiClient,
    branch_filter: Option<&str>,
    limit: u32,
) -> anyhow::Result<()> {
    let (branch, reviews) = load_reviews(client, branch_filter, limit).await?;

    if let Some(branch) = &branch {
        println!("{}", branch_header(branch));
    }

    if reviews.is_empty() {
        println!(
            "no reviews yet{}",
            branch_filter
                .map(|b| format!(" for branch {b}"))
                .unwrap_or_default()
        );
        return Ok(());
    }

    for review in &reviews {
        println!("{}", format_review(review));
    }
    Ok(())
}

/// Fetch the reviews and, for a branch filter, the branch they belong to.
///
/// A branch the API refuses to describe leaves the listing without a header.
async fn load_reviews(
    client: &ApiClient,
    branch_filter: Option<&str>,
    limit: u32,
) -> anyhow::Result<(Option<Branch>, Vec<Review>)> {
    let branch = match branch_filter {
        Some(id) => match client.get_branch(id).await {
            Ok(branch) => Some(branch),
            Err(ApiError::Api(message)) => {
                tracing::warn!(branch_id = id, error = %message, "branch details unavailable");
                None
            }
            Err(e) => return Err(e.into()),
        },
        None => None,
    };

    let reviews = client.get_reviews(branch_filter, limit).await?;
    Ok((branch, reviews))
}

fn branch_header(branch: &Branch) -> String {
    let mut header = branch.name.clone();
    if let Some(locality) = branch.locality() {
        header.push_str(&format!(" - {locality}"));
    }
    header.push_str(&format!(
        "\n{} ({} reviews)\n",
        branch.rating_display(),
        branch.review_count()
    ));
    header
}

/// Validate the form locally, then submit it.
///
/// # Errors
///
/// Returns the form message if validation fails, or the API's message if the
/// submission is rejected.
pub(crate) async fn run_submit_review(client: &ApiClient, args: ReviewArgs) -> anyhow::Result<()> {
    let review = args.into_new_review();
    validate_new_review(&review)?;

    if requires_grievance(review.overall_rating) {
        tracing::info!(
            branch_id = %review.branch_id,
            overall_rating = review.overall_rating,
            "submitting grievance"
        );
    }

    let stored = client.submit_review(&review).await?;
    println!("thank you for your feedback (review {})", stored.id);
    Ok(())
}

fn format_review(review: &Review) -> String {
    let mut out = format!(
        "{} {}/5 ({}) - {} - {} - {}",
        "*".repeat(usize::from(review.overall_rating.min(5))),
        review.overall_rating,
        rating_label(review.overall_rating).unwrap_or("unrated"),
        review.reviewer_name(),
        review.visit_type.display_name(),
        review.created_at.format("%Y-%m-%d"),
    );

    if let Some(table) = review
        .table_number
        .as_deref()
        .filter(|_| review.visit_type == VisitType::DineIn)
    {
        out.push_str(&format!(" - table {table}"));
    }
    if !review.review_text.is_empty() {
        out.push_str(&format!("\n  {}", review.review_text));
    }
    for (aspect, rating) in review.aspect_ratings() {
        out.push_str(&format!(
            "\n  {}: {rating}/5",
            question_label(aspect, review.visit_type)
        ));
    }
    if let Some(reply) = review.staff_reply.as_deref() {
        out.push_str(&format!("\n  reply from the restaurant: {reply}"));
    }
    out
}
