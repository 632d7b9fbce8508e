//! Service region classification.
//!
//! Maps a postal code and/or coordinate pair to a named service region
//! using postcode prefixes and coarse bounding boxes. The boxes overlap
//! deliberately; classification checks them in a fixed order and the
//! first match wins. Preserving that check order matters more than
//! geographic precision here.

use serde::{Deserialize, Serialize};

/// A named service region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Langkawi,
    KualaLumpur,
    Selangor,
    Penang,
    Johor,
    /// Inside the broad national bounding box but no specific region matched.
    Malaysia,
    International,
    Unknown,
}

struct BoundingBox {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl BoundingBox {
    fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

const LANGKAWI_BOX: BoundingBox =
    BoundingBox { min_lat: 6.15, max_lat: 6.55, min_lng: 99.60, max_lng: 99.95 };

// Sits inside the Selangor box and must be checked before it.
const KUALA_LUMPUR_BOX: BoundingBox =
    BoundingBox { min_lat: 3.03, max_lat: 3.25, min_lng: 101.63, max_lng: 101.78 };

const SELANGOR_BOX: BoundingBox =
    BoundingBox { min_lat: 2.65, max_lat: 3.90, min_lng: 100.90, max_lng: 102.00 };

const PENANG_BOX: BoundingBox =
    BoundingBox { min_lat: 5.10, max_lat: 5.60, min_lng: 100.10, max_lng: 100.60 };

const JOHOR_BOX: BoundingBox =
    BoundingBox { min_lat: 1.20, max_lat: 2.80, min_lng: 102.40, max_lng: 104.40 };

const MALAYSIA_BOX: BoundingBox =
    BoundingBox { min_lat: 0.80, max_lat: 7.60, min_lng: 99.40, max_lng: 119.60 };

/// Langkawi postcodes all carry the "07" prefix.
pub fn is_langkawi_postcode(postcode: &str) -> bool {
    postcode.starts_with("07")
}

/// Kuala Lumpur city postcodes fall in the 50000-60000 numeric range.
pub fn is_kl_postcode(postcode: &str) -> bool {
    postcode
        .trim()
        .parse::<u32>()
        .is_ok_and(|code| (50000..=60000).contains(&code))
}

/// Classify a postcode and/or coordinate pair into a [`Region`].
///
/// Postcode rules win over coordinates; coordinate boxes are checked
/// Langkawi, then Kuala Lumpur, then Selangor, Penang, Johor, then the
/// national catch-all.
pub fn classify(postcode: Option<&str>, coords: Option<(f64, f64)>) -> Region {
    if let Some(code) = postcode {
        if is_langkawi_postcode(code) {
            return Region::Langkawi;
        }
        if is_kl_postcode(code) {
            return Region::KualaLumpur;
        }
    }

    let Some((lat, lng)) = coords else {
        return Region::Unknown;
    };

    if LANGKAWI_BOX.contains(lat, lng) {
        Region::Langkawi
    } else if KUALA_LUMPUR_BOX.contains(lat, lng) {
        Region::KualaLumpur
    } else if SELANGOR_BOX.contains(lat, lng) {
        Region::Selangor
    } else if PENANG_BOX.contains(lat, lng) {
        Region::Penang
    } else if JOHOR_BOX.contains(lat, lng) {
        Region::Johor
    } else if MALAYSIA_BOX.contains(lat, lng) {
        Region::Malaysia
    } else {
        Region::International
    }
}
