// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Aggregation pipeline: one access token in, one renderable bundle out.
//!
//! Fetches athlete stats, the first page of activities, and every
//! activity's GPS stream. Upstream failures degrade the affected section
//! instead of failing the request; each section records its own outcome.

use crate::error::AppError;
use crate::models::{ActivitySummary, AthleteStats, Route, RouteCollection};
use crate::services::strava::StravaClient;
use futures_util::stream::{self, StreamExt};

/// Fixed page size for the activity list; only the first page is fetched,
/// so activities beyond this count are omitted.
const ACTIVITY_PAGE_SIZE: u32 = 200;

/// Upper bound on in-flight stream fetches, sized against Strava's
/// per-15-minute rate limit.
const STREAM_FETCH_CONCURRENCY: usize = 4;

/// Everything the success view needs, with per-section fetch outcomes.
#[derive(Debug)]
pub struct Bundle {
    pub stats: Result<AthleteStats, AppError>,
    pub activities: Result<Vec<ActivitySummary>, AppError>,
    pub routes: RouteCollection,
}

/// Run the full pipeline for one authenticated athlete.
///
/// Stats and the activity list are fetched in turn; stream fetches fan out
/// with bounded concurrency. Nothing is retried or cached.
pub async fn aggregate(client: &StravaClient, access_token: &str, athlete_id: u64) -> Bundle {
    let stats = client.athlete_stats(access_token, athlete_id).await;
    if let Err(e) = &stats {
        tracing::warn!(error = %e, athlete_id, "athlete stats fetch failed");
    }

    let activities = client.list_activities(access_token, ACTIVITY_PAGE_SIZE).await;

    let routes = match &activities {
        Ok(list) => fetch_routes(client, access_token, list).await,
        Err(e) => {
            tracing::warn!(error = %e, athlete_id, "activity list fetch failed");
            RouteCollection::new()
        }
    };

    Bundle {
        stats,
        activities,
        routes,
    }
}

/// Fetch one route per activity, preserving activity-list order.
///
/// Results are position-tagged so the collection stays index-aligned no
/// matter which fetch completes first. A failed fetch fills its slot with
/// the error rather than aborting the rest.
async fn fetch_routes(
    client: &StravaClient,
    access_token: &str,
    activities: &[ActivitySummary],
) -> RouteCollection {
    let indexed_ids: Vec<(usize, u64)> = activities
        .iter()
        .enumerate()
        .map(|(index, activity)| (index, activity.id))
        .collect();

    let mut tagged: Vec<(usize, Result<Route, AppError>)> =
        stream::iter(indexed_ids)
            .map(|(index, activity_id)| {
                let client = client.clone();
                let access_token = access_token.to_string();
                async move {
                    let slot = client.activity_route(&access_token, activity_id).await;
                    if let Err(e) = &slot {
                        tracing::warn!(error = %e, activity_id, "location stream fetch failed");
                    }
                    (index, slot)
                }
            })
            .buffer_unordered(STREAM_FETCH_CONCURRENCY)
            .collect()
            .await;

    tagged.sort_by_key(|(index, _)| *index);
    tagged.into_iter().map(|(_, slot)| slot).collect()
}
