//! Branch listing and nearest-branch lookup.

use rfb_api::ApiClient;
use rfb_core::{AppConfig, Branch};
use rfb_locator::{
    AssistOutcome, Coordinate, FixedPositionSource, GeolocationOptions, LocationAssist,
    PositionSource, UnsupportedPositionSource,
};

/// Print every branch as a table.
///
/// # Errors
///
/// Returns an error if the branch request fails.
pub(crate) async fn run_branches(client: &ApiClient) -> anyhow::Result<()> {
    let branches = client.get_branches().await?;

    if branches.is_empty() {
        println!("no branches found");
        return Ok(());
    }

    println!("{:<14}{:<28}{:<26}{:<8}REVIEWS", "ID", "NAME", "LOCATION", "RATING");
    for branch in &branches {
        println!(
            "{:<14}{:<28}{:<26}{:<8}{}",
            branch.id,
            branch.name,
            branch.locality().unwrap_or_default(),
            branch.rating_display(),
            branch.review_count()
        );
    }

    Ok(())
}

/// Resolve the branch nearest to `position` through the location assist.
///
/// Without a position the assist behaves as on a platform with no location
/// support and the guest is told to choose manually.
///
/// # Errors
///
/// Returns an error if the branch request fails or the JSON output cannot be
/// serialized. Resolution failures are reported, not returned.
pub(crate) async fn run_nearest(
    client: &ApiClient,
    config: &AppConfig,
    position: Option<(f64, f64)>,
    json: bool,
) -> anyhow::Result<()> {
    let branches = client.get_branches().await?;
    let options = GeolocationOptions::from_config(config);

    let outcome = match position {
        Some((lat, lng)) => {
            let source = FixedPositionSource::new(Coordinate::new(lat, lng));
            assist_once(&source, &branches, &options).await
        }
        None => assist_once(&UnsupportedPositionSource, &branches, &options).await,
    };

    if json {
        let value = match &outcome {
            Some(outcome) => serde_json::to_value(outcome)?,
            None => serde_json::json!({ "status": "idle" }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", describe_outcome(outcome.as_ref()));
    Ok(())
}

async fn assist_once<S: PositionSource>(
    source: &S,
    branches: &[Branch],
    options: &GeolocationOptions,
) -> Option<AssistOutcome> {
    LocationAssist::new().run(source, branches, options).await
}

fn describe_outcome(outcome: Option<&AssistOutcome>) -> String {
    match outcome {
        Some(AssistOutcome::Success {
            branch_id,
            branch_name,
        }) => format!("nearest branch: {branch_name} ({branch_id})"),
        Some(AssistOutcome::Error) => "no nearby branch found; choose a branch manually".to_string(),
        None => "location unavailable; choose a branch manually".to_string(),
    }
}
