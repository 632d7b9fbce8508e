//! Vendor selection policy.
//!
//! Pure selection over an in-memory vendor list (tens of entries); the
//! caller persists the result. Tiers are tried in strict priority order
//! and a tier that cannot produce a vendor falls through to the next,
//! so malformed input degrades instead of failing:
//!
//! 1. Langkawi postcode: laundry work goes to the nearest `Season`
//!    outlet, everything else to `Theresa`.
//! 2. Kuala Lumpur postcode with a per-item service: `Ampang`.
//! 3. Haversine nearest among vendors with known coordinates.
//! 4. Nearest postcode by absolute numeric difference.

use tracing::debug;

use crate::order::Order;
use crate::region;
use crate::traits::DistanceProvider;
use crate::vendor::{ServiceKind, Vendor, VendorRole};

/// Inputs to one vendor selection.
#[derive(Debug, Clone)]
pub struct MatchRequest<'a> {
    pub postcode: Option<&'a str>,
    pub coords: Option<(f64, f64)>,
    pub service: ServiceKind,
}

impl<'a> MatchRequest<'a> {
    pub fn from_order(order: &'a Order) -> Self {
        Self {
            postcode: order.pickup_postcode(),
            coords: order.coords(),
            service: ServiceKind::parse(&order.service_type),
        }
    }
}

/// Select one vendor for a request, or `None` when no tier can decide.
///
/// Distance-based tiers use the same provider the sequencer routes with.
pub fn find_optimal_vendor<'a, D: DistanceProvider>(
    request: &MatchRequest<'_>,
    vendors: &'a [Vendor],
    distance: &D,
) -> Option<&'a Vendor> {
    if vendors.is_empty() {
        return None;
    }

    // Tier 1: Langkawi overrides.
    if let Some(code) = request.postcode {
        if region::is_langkawi_postcode(code) {
            let role = if request.service.is_laundry() {
                VendorRole::Season
            } else {
                VendorRole::Theresa
            };
            if let Some(vendor) = pick_by_role(request, vendors, role, distance) {
                return Some(vendor);
            }
            debug!(role = ?role, "no vendor carries the Langkawi role, falling through");
        } else if region::is_kl_postcode(code) && request.service.is_per_item() {
            // Tier 2: Kuala Lumpur per-item overrides.
            if let Some(vendor) = vendors.iter().find(|v| v.role == VendorRole::Ampang) {
                return Some(vendor);
            }
            debug!("no Ampang vendor registered, falling through");
        }
    }

    // Tier 3: geographic nearest.
    if let Some(position) = request.coords {
        if let Some(vendor) = nearest_by_coords(position, vendors.iter(), distance) {
            return Some(vendor);
        }
        debug!("no vendor has coordinates, falling back to postcode match");
    }

    // Tier 4: numeric postcode nearest.
    nearest_by_postcode(request.postcode?, vendors)
}

/// Resolve a role override: nearest outlet of that role when the customer
/// and at least one outlet have coordinates, else the first registered
/// outlet of that role.
fn pick_by_role<'a, D: DistanceProvider>(
    request: &MatchRequest<'_>,
    vendors: &'a [Vendor],
    role: VendorRole,
    distance: &D,
) -> Option<&'a Vendor> {
    if let Some(position) = request.coords {
        let candidates = vendors.iter().filter(|v| v.role == role);
        if let Some(vendor) = nearest_by_coords(position, candidates, distance) {
            return Some(vendor);
        }
    }
    vendors.iter().find(|v| v.role == role)
}

/// Nearest vendor with known coordinates; ties keep the first seen.
fn nearest_by_coords<'a, D: DistanceProvider>(
    position: (f64, f64),
    vendors: impl Iterator<Item = &'a Vendor>,
    distance: &D,
) -> Option<&'a Vendor> {
    let mut best: Option<(&Vendor, f64)> = None;
    for vendor in vendors {
        let Some(location) = vendor.coords() else {
            continue;
        };
        let dist = distance.distance_km(position, location);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((vendor, dist)),
        }
    }
    best.map(|(vendor, _)| vendor)
}

/// Nearest vendor by absolute numeric postcode difference; vendors with
/// unparseable postcodes are skipped, ties keep the first seen.
fn nearest_by_postcode<'a>(postcode: &str, vendors: &'a [Vendor]) -> Option<&'a Vendor> {
    let target: i64 = postcode.trim().parse().ok()?;
    let mut best: Option<(&Vendor, i64)> = None;
    for vendor in vendors {
        let Some(code) = vendor.postcode_numeric() else {
            continue;
        };
        let diff = (code - target).abs();
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((vendor, diff)),
        }
    }
    best.map(|(vendor, _)| vendor)
}
