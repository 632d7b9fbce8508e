//! Real Malaysian locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Grouped by the service
//! regions the classifier knows about.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    #[allow(dead_code)]
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Langkawi
// ============================================================================

pub const KUAH_TOWN: Location = Location::new("Kuah Town", 6.3260, 99.8432);
pub const PANTAI_CENANG: Location = Location::new("Pantai Cenang", 6.2926, 99.7283);
#[allow(dead_code)]
pub const LANGKAWI_AIRPORT: Location = Location::new("Langkawi Airport", 6.3297, 99.7287);

// ============================================================================
// Kuala Lumpur
// ============================================================================

pub const KLCC: Location = Location::new("KLCC", 3.1579, 101.7116);
pub const AMPANG_POINT: Location = Location::new("Ampang Point", 3.1587, 101.7481);
#[allow(dead_code)]
pub const MID_VALLEY: Location = Location::new("Mid Valley Megamall", 3.1175, 101.6774);
pub const SETAPAK: Location = Location::new("Setapak", 3.2010, 101.7046);

// ============================================================================
// Selangor
// ============================================================================

pub const PETALING_JAYA: Location = Location::new("Petaling Jaya", 3.1073, 101.6067);
pub const SHAH_ALAM: Location = Location::new("Shah Alam", 3.0733, 101.5185);
pub const SUBANG_JAYA: Location = Location::new("Subang Jaya", 3.0567, 101.5851);

// ============================================================================
// Elsewhere
// ============================================================================

#[allow(dead_code)]
pub const GEORGE_TOWN: Location = Location::new("George Town", 5.4141, 100.3288);
#[allow(dead_code)]
pub const JOHOR_BAHRU: Location = Location::new("Johor Bahru", 1.4927, 103.7414);
#[allow(dead_code)]
pub const MELAKA: Location = Location::new("Melaka", 2.1896, 102.2501);
