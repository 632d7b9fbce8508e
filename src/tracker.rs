//! Per-order assignment attempt tracking.
//!
//! A small state machine owned by whatever is displaying the order (one
//! tracker per order view). It answers one question: should a status
//! observation fire an assignment attempt now? The guarantee is
//! deliberately session-scoped: at most one fire per session on success,
//! at least one more chance after a failure. A new tracker (new session)
//! starts from scratch; there is no durable attempt flag.

use tracing::debug;

use crate::order::OrderStatus;

/// Assignment attempt state for one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentState {
    /// No vendor attached and no successful attempt recorded.
    NoVendor,
    /// An attempt has fired and its outcome has not been reported yet.
    AttemptInFlight,
    /// A vendor is attached, or an attempt succeeded this session.
    Attempted,
}

/// Tracks assignment attempts for a single order within one session.
#[derive(Debug, Clone)]
pub struct AssignmentTracker {
    state: AssignmentState,
    last_status: Option<OrderStatus>,
    had_vendor: bool,
}

impl Default for AssignmentTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentTracker {
    pub fn new() -> Self {
        Self { state: AssignmentState::NoVendor, last_status: None, had_vendor: false }
    }

    pub fn state(&self) -> AssignmentState {
        self.state
    }

    /// Observe the order's current status and vendor field.
    ///
    /// Returns `true` when an assignment attempt should fire now: the
    /// order just transitioned into `Approved`, has no vendor, and no
    /// attempt is in flight or already recorded. Repeated observations
    /// of `Approved` do not re-fire.
    ///
    /// A vendor field observed empty after it was observed attached
    /// counts as an external clear and resets attempt history, same as
    /// [`Self::on_vendor_cleared`].
    pub fn on_status(&mut self, status: OrderStatus, has_vendor: bool) -> bool {
        if self.had_vendor && !has_vendor {
            debug!("vendor field cleared since last observation, re-arming");
            self.state = AssignmentState::NoVendor;
            self.last_status = None;
        }
        self.had_vendor = has_vendor;

        let entering_approved =
            status == OrderStatus::Approved && self.last_status != Some(OrderStatus::Approved);
        self.last_status = Some(status);

        if has_vendor {
            self.state = AssignmentState::Attempted;
            return false;
        }

        if entering_approved && self.state == AssignmentState::NoVendor {
            self.state = AssignmentState::AttemptInFlight;
            debug!("order entered approved without a vendor, firing assignment");
            return true;
        }

        false
    }

    /// The fired attempt chose a vendor and the write-back succeeded.
    pub fn on_attempt_succeeded(&mut self) {
        self.state = AssignmentState::Attempted;
    }

    /// The fired attempt found no vendor or the write-back failed.
    ///
    /// Reverts to `NoVendor` so a later trigger (manual retry, another
    /// status transition) can fire again.
    pub fn on_attempt_failed(&mut self) {
        self.state = AssignmentState::NoVendor;
    }

    /// The vendor field was cleared externally.
    ///
    /// Resets attempt history entirely: the next observation of an
    /// approved, vendorless order fires again even if the status never
    /// formally left `Approved`.
    pub fn on_vendor_cleared(&mut self) {
        self.state = AssignmentState::NoVendor;
        self.last_status = None;
        self.had_vendor = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_transition_into_approved() {
        let mut tracker = AssignmentTracker::new();
        assert!(!tracker.on_status(OrderStatus::Processing, false));
        assert!(tracker.on_status(OrderStatus::Approved, false));
        assert_eq!(tracker.state(), AssignmentState::AttemptInFlight);
    }

    #[test]
    fn test_does_not_refire_while_in_flight() {
        let mut tracker = AssignmentTracker::new();
        assert!(tracker.on_status(OrderStatus::Approved, false));
        // Processing -> approved again while the first attempt is pending.
        assert!(!tracker.on_status(OrderStatus::Processing, false));
        assert!(!tracker.on_status(OrderStatus::Approved, false));
    }

    #[test]
    fn test_repeated_approved_is_noop() {
        let mut tracker = AssignmentTracker::new();
        assert!(tracker.on_status(OrderStatus::Approved, false));
        tracker.on_attempt_succeeded();
        assert!(!tracker.on_status(OrderStatus::Approved, false));
        assert!(!tracker.on_status(OrderStatus::Approved, false));
    }

    #[test]
    fn test_failure_allows_retry_on_next_transition() {
        let mut tracker = AssignmentTracker::new();
        assert!(tracker.on_status(OrderStatus::Approved, false));
        tracker.on_attempt_failed();
        assert_eq!(tracker.state(), AssignmentState::NoVendor);

        assert!(!tracker.on_status(OrderStatus::Processing, false));
        assert!(tracker.on_status(OrderStatus::Approved, false));
    }

    #[test]
    fn test_vendor_present_marks_attempted() {
        let mut tracker = AssignmentTracker::new();
        assert!(!tracker.on_status(OrderStatus::Approved, true));
        assert_eq!(tracker.state(), AssignmentState::Attempted);
    }

    #[test]
    fn test_observed_vendor_clear_rearms_without_explicit_call() {
        // Another session clears the vendor; this tracker only ever sees
        // the field flip back to empty.
        let mut tracker = AssignmentTracker::new();
        assert!(!tracker.on_status(OrderStatus::Approved, true));
        assert_eq!(tracker.state(), AssignmentState::Attempted);

        assert!(!tracker.on_status(OrderStatus::Processing, false));
        assert_eq!(tracker.state(), AssignmentState::NoVendor);
        assert!(tracker.on_status(OrderStatus::Approved, false));
    }

    #[test]
    fn test_observed_vendor_clear_fires_even_while_approved() {
        let mut tracker = AssignmentTracker::new();
        assert!(!tracker.on_status(OrderStatus::Approved, true));
        // Field observed empty on the next poll, status never left approved.
        assert!(tracker.on_status(OrderStatus::Approved, false));
    }

    #[test]
    fn test_clearing_vendor_rearms_without_status_change() {
        let mut tracker = AssignmentTracker::new();
        assert!(tracker.on_status(OrderStatus::Approved, false));
        tracker.on_attempt_succeeded();
        assert!(!tracker.on_status(OrderStatus::Approved, false));

        tracker.on_vendor_cleared();
        assert_eq!(tracker.state(), AssignmentState::NoVendor);
        assert!(tracker.on_status(OrderStatus::Approved, false));
    }
}
