//! laundry-dispatch core
//!
//! Vendor assignment and route ordering for a laundry pickup/delivery
//! dispatch operation. Classifies service regions, selects a vendor per
//! business policy, and sequences pickup/drop-off routes.

pub mod traits;
pub mod geo;
pub mod region;
pub mod vendor;
pub mod order;
pub mod matcher;
pub mod sequencer;
pub mod tracker;
pub mod dispatch;
pub mod store;
pub mod rate_limit;
