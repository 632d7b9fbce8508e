//! Assignment orchestration.
//!
//! Glues the tracker, matcher, and write-back together: one status
//! observation in, one outcome out. Nothing here is fatal; a failed
//! assignment leaves the order unassigned for a human to fix, and the
//! tracker stays re-armed for a later attempt.

use tracing::{debug, warn};

use crate::geo::Haversine;
use crate::matcher::{self, MatchRequest};
use crate::order::Order;
use crate::tracker::AssignmentTracker;
use crate::traits::OrderWriter;
use crate::vendor::Vendor;

/// Result of processing one status observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentOutcome {
    /// The tracker decided no attempt should fire.
    NotTriggered,
    /// A vendor was chosen and persisted.
    Assigned { vendor: String },
    /// No tier of the matcher produced a vendor.
    NoCandidate,
    /// A vendor was chosen but the write-back failed.
    PersistFailed,
}

/// Run the assignment flow for one order status observation.
///
/// Fires the matcher at most once per call, and only when the tracker
/// says the order just entered `Approved` without a vendor. On failure
/// the tracker reverts so a later observation can retry.
pub fn run_assignment<W: OrderWriter>(
    tracker: &mut AssignmentTracker,
    order: &Order,
    vendors: &[Vendor],
    writer: &W,
) -> AssignmentOutcome {
    if !tracker.on_status(order.status, order.assigned_vendor.is_some()) {
        return AssignmentOutcome::NotTriggered;
    }

    let request = MatchRequest::from_order(order);
    let Some(vendor) = matcher::find_optimal_vendor(&request, vendors, &Haversine) else {
        debug!(order_id = %order.id, "no suitable vendor for order");
        tracker.on_attempt_failed();
        return AssignmentOutcome::NoCandidate;
    };

    match writer.assign_vendor(&order.id, &vendor.name) {
        Ok(()) => {
            debug!(order_id = %order.id, vendor = %vendor.name, "vendor assigned");
            tracker.on_attempt_succeeded();
            AssignmentOutcome::Assigned { vendor: vendor.name.clone() }
        }
        Err(err) => {
            warn!(order_id = %order.id, vendor = %vendor.name, error = %err,
                "vendor write-back failed, order left unassigned");
            tracker.on_attempt_failed();
            AssignmentOutcome::PersistFailed
        }
    }
}
