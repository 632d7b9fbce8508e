//! Order records.
//!
//! Orders arrive from the backend with loosely-populated fields; every
//! optional column deserializes permissively to `None` rather than
//! failing the whole row. Accessors normalize the loose parts (empty
//! postcode strings, postcodes buried in the address) in one place.

use serde::{Deserialize, Serialize};

use crate::region::{self, Region};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Approved,
    PickedUp,
    Delivered,
    Completed,
    Cancelled,
}

/// A customer order as stored in the backend table.
///
/// Created externally; this crate only mutates `status` and
/// `assigned_vendor` (via the store adapter). At most one vendor is
/// attached at a time; assignment overwrites, never appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub pickup_address: String,
    #[serde(default)]
    pub pickup_date: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub assigned_vendor: Option<String>,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub region: Option<Region>,
}

impl Order {
    /// Coordinates, present only when both components are known.
    pub fn coords(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    /// Postcode for routing: the explicit field when non-empty, else the
    /// first five-digit run found in the pickup address.
    pub fn pickup_postcode(&self) -> Option<&str> {
        match self.postcode.as_deref() {
            Some(code) if !code.trim().is_empty() => Some(code.trim()),
            _ => extract_postcode(&self.pickup_address),
        }
    }

    /// Service region, computed on demand when not stored on the record.
    pub fn region(&self) -> Region {
        self.region
            .unwrap_or_else(|| region::classify(self.pickup_postcode(), self.coords()))
    }
}

/// Find the first run of exactly five ASCII digits in an address string.
///
/// Malaysian postcodes are five digits; longer digit runs (phone numbers,
/// unit numbers) are skipped.
pub fn extract_postcode(address: &str) -> Option<&str> {
    let bytes = address.as_bytes();
    let mut start = 0;
    while start < bytes.len() {
        if !bytes[start].is_ascii_digit() {
            start += 1;
            continue;
        }
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end - start == 5 {
            return Some(&address[start..end]);
        }
        start = end;
    }
    None
}
