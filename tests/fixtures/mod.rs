//! Test fixtures for laundry-dispatch.
//!
//! Provides realistic test data:
//! - Real Malaysian locations grouped by service region
//! - Builders for vendor lists and orders

pub mod malaysia_locations;

#[allow(unused_imports)]
pub use malaysia_locations::*;

use laundry_dispatch::order::{Order, OrderStatus};
use laundry_dispatch::vendor::Vendor;

/// Build an order with sensible defaults for assignment tests.
#[allow(dead_code)]
pub fn order(id: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        customer_name: "Aminah".to_string(),
        phone: Some("+60123456789".to_string()),
        pickup_address: String::new(),
        pickup_date: None,
        status,
        assigned_vendor: None,
        service_type: "5kg Wash & Fold".to_string(),
        postcode: None,
        latitude: None,
        longitude: None,
        region: None,
    }
}

/// A spread of vendors covering the regional override roles plus
/// distance-matched generalists.
#[allow(dead_code)]
pub fn standard_vendors() -> Vec<Vendor> {
    vec![
        Vendor::new("Season Laundry Kuah")
            .with_coords(KUAH_TOWN.lat, KUAH_TOWN.lng)
            .with_postcode("07000")
            .with_service_area("Langkawi")
            .with_rate_per_kg(8.0),
        Vendor::new("Season Laundry Cenang")
            .with_coords(PANTAI_CENANG.lat, PANTAI_CENANG.lng)
            .with_postcode("07000")
            .with_service_area("Langkawi")
            .with_rate_per_kg(8.0),
        Vendor::new("Theresa Laundromat")
            .with_coords(KUAH_TOWN.lat, KUAH_TOWN.lng)
            .with_postcode("07000")
            .with_service_area("Langkawi"),
        Vendor::new("Dobi Ampang Point")
            .with_coords(AMPANG_POINT.lat, AMPANG_POINT.lng)
            .with_postcode("55100")
            .with_service_area("Kuala Lumpur"),
        Vendor::new("Fresh Press PJ")
            .with_coords(PETALING_JAYA.lat, PETALING_JAYA.lng)
            .with_postcode("46000")
            .with_service_area("Selangor")
            .with_rate_per_kg(6.5),
        Vendor::new("Dobi Mesra Shah Alam")
            .with_coords(SHAH_ALAM.lat, SHAH_ALAM.lng)
            .with_postcode("40000")
            .with_service_area("Selangor")
            .with_rate_per_kg(6.0),
    ]
}
