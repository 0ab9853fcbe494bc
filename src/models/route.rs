// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! GPS routes assembled from activity location streams.
//!
//! A [`RouteCollection`] is index-aligned with the activity list it was
//! built from: slot `i` always belongs to activity `i`, whether the fetch
//! produced a track, an empty stream, or an error.

use crate::error::AppError;
use serde_json::Value;

/// One GPS sample: `[latitude, longitude]`.
pub type RoutePoint = [f64; 2];

/// One activity's track, points in chronological order. May be empty when
/// the activity carries no location stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    pub points: Vec<RoutePoint>,
}

impl Route {
    pub fn new(points: Vec<RoutePoint>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Ordered per-activity route slots.
///
/// Each slot keeps the fetch outcome, so "no GPS data" (`Ok` with an empty
/// route) stays distinguishable from "stream fetch failed" (`Err`). Both
/// serialize to an empty array in the page payload.
#[derive(Debug, Default)]
pub struct RouteCollection {
    slots: Vec<Result<Route, AppError>>,
}

impl RouteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, slot: Result<Route, AppError>) {
        self.slots.push(slot);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Result<Route, AppError>> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Result<Route, AppError>> {
        self.slots.iter()
    }

    /// Serialize as a JSON array of arrays of `[lat, lon]` pairs.
    ///
    /// Failed slots keep their position and serialize as empty arrays.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.slots
                .iter()
                .map(|slot| match slot {
                    Ok(route) => Value::Array(
                        route
                            .points
                            .iter()
                            .map(|point| {
                                Value::Array(vec![point[0].into(), point[1].into()])
                            })
                            .collect(),
                    ),
                    Err(_) => Value::Array(Vec::new()),
                })
                .collect(),
        )
    }
}

impl FromIterator<Result<Route, AppError>> for RouteCollection {
    fn from_iter<I: IntoIterator<Item = Result<Route, AppError>>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_slot_keeps_position_in_json() {
        let mut routes = RouteCollection::new();
        routes.push(Ok(Route::new(vec![[37.4, -122.1], [37.5, -122.2]])));
        routes.push(Err(AppError::StravaApi("boom".to_string())));
        routes.push(Ok(Route::default()));

        let json = routes.to_json();
        let rendered = serde_json::to_string(&json).expect("serialize routes");
        assert_eq!(rendered, "[[[37.4,-122.1],[37.5,-122.2]],[],[]]");
    }

    #[test]
    fn test_empty_and_failed_slots_stay_distinguishable() {
        let mut routes = RouteCollection::new();
        routes.push(Ok(Route::default()));
        routes.push(Err(AppError::StravaApi("boom".to_string())));

        assert!(matches!(routes.get(0), Some(Ok(route)) if route.is_empty()));
        assert!(matches!(routes.get(1), Some(Err(AppError::StravaApi(_)))));
    }

    #[test]
    fn test_empty_collection_serializes_to_empty_array() {
        let routes = RouteCollection::new();
        assert_eq!(routes.to_json(), serde_json::json!([]));
    }
}
