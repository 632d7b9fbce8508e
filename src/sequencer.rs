//! Route sequencing by greedy nearest-neighbor.
//!
//! Orders a set of stops by repeatedly visiting the nearest unvisited
//! one. O(n²), no 2-opt pass, no capacity or time-window constraints;
//! stop counts here are small enough that a better tour is not worth
//! the complexity. Deterministic for identical input order; ties keep
//! the first-encountered minimum.

use serde::Serialize;

use crate::traits::DistanceProvider;

/// What a stop is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopKind {
    /// Customer pickup.
    Pickup,
    /// Vendor drop-off.
    DropOff,
}

/// A transient stop for sequencing; built from an order or vendor record.
///
/// Callers must filter out records without coordinates before building
/// stops; the sequencer assumes every stop has a valid position.
#[derive(Debug, Clone, Serialize)]
pub struct RouteStop {
    pub id: String,
    pub label: String,
    pub kind: StopKind,
    pub coords: (f64, f64),
}

impl RouteStop {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: StopKind, coords: (f64, f64)) -> Self {
        Self { id: id.into(), label: label.into(), kind, coords }
    }
}

/// One leg of a sequenced route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteLeg {
    pub stop: RouteStop,
    /// Distance from the previous position, in kilometers.
    pub leg_km: f64,
    /// Total distance travelled up to and including this leg.
    pub cumulative_km: f64,
}

/// Sequence stops from a start position by greedy nearest-neighbor.
///
/// An empty stop list yields an empty route.
pub fn sequence_route<D: DistanceProvider>(
    start: (f64, f64),
    stops: Vec<RouteStop>,
    distance: &D,
) -> Vec<RouteLeg> {
    let mut remaining = stops;
    let mut route = Vec::with_capacity(remaining.len());
    let mut position = start;
    let mut cumulative_km = 0.0;

    while !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_km = distance.distance_km(position, remaining[0].coords);
        for (idx, stop) in remaining.iter().enumerate().skip(1) {
            let km = distance.distance_km(position, stop.coords);
            if km < best_km {
                best_km = km;
                best_idx = idx;
            }
        }

        let stop = remaining.remove(best_idx);
        position = stop.coords;
        cumulative_km += best_km;
        route.push(RouteLeg { stop, leg_km: best_km, cumulative_km });
    }

    route
}
