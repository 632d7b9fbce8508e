//! Core seams for the dispatch planner.
//!
//! These are intentionally minimal. The matcher and sequencer only need
//! distances and plain records; where those records come from (REST table,
//! spreadsheet export, test fixture) is behind `VendorSource`/`OrderWriter`.

use crate::vendor::Vendor;

/// Provides a point-to-point distance in kilometers.
pub trait DistanceProvider {
    fn distance_km(&self, from: (f64, f64), to: (f64, f64)) -> f64;
}

/// Loads the current vendor list from whatever backend is configured.
///
/// Vendors are read fresh per decision and treated as immutable within
/// one assignment.
pub trait VendorSource {
    type Error: std::error::Error;

    fn list_vendors(&self) -> Result<Vec<Vendor>, Self::Error>;
}

/// Writes an assignment decision back onto an order record.
///
/// A single generic field update, fire-and-forget: the caller gets a
/// success/failure result and decides whether to retry later. No retry
/// or backoff happens at this layer.
pub trait OrderWriter {
    type Error: std::error::Error;

    fn assign_vendor(&self, order_id: &str, vendor_name: &str) -> Result<(), Self::Error>;
}
