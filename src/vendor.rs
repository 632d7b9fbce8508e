//! Vendor records and ingestion-time normalization.
//!
//! The backend identifies vendors by display name only, and the routing
//! rules historically keyed off substrings of those names. Both the role
//! tag and the service kind are decided once here, at the ingestion
//! boundary, so the matcher can branch on typed fields instead of
//! re-parsing free text at every decision.

use serde::Serialize;

/// Business-rule identity of a vendor, derived from its registered name.
///
/// Encodes the regional override rules: "Season" outlets serve Langkawi
/// weight-based laundry, "Theresa" takes Langkawi per-item work, "Ampang"
/// takes Kuala Lumpur per-item work. Everyone else competes on distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorRole {
    Season,
    Theresa,
    Ampang,
    #[default]
    General,
}

impl VendorRole {
    /// Derive the role from a registered vendor name, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("season") {
            VendorRole::Season
        } else if lower.contains("theresa") {
            VendorRole::Theresa
        } else if lower.contains("ampang") {
            VendorRole::Ampang
        } else {
            VendorRole::General
        }
    }
}

/// Billing shape of a service-type string.
///
/// Service types arrive as free text ("5kg Wash & Fold", "Shoe Cleaning",
/// "Dry Clean (Jacket)"). The two keyword families the routing rules care
/// about are kept distinct: per-kilogram pricing mentions "kg"; wash/fold
/// without a weight still counts as laundry but not as weight-billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    WeightBased,
    WashFold,
    PerItem,
}

impl ServiceKind {
    pub fn parse(service_type: &str) -> Self {
        let lower = service_type.to_lowercase();
        if lower.contains("kg") {
            ServiceKind::WeightBased
        } else if lower.contains("wash") || lower.contains("fold") {
            ServiceKind::WashFold
        } else {
            ServiceKind::PerItem
        }
    }

    /// Laundry keyword family: kg, wash, or fold.
    pub fn is_laundry(self) -> bool {
        matches!(self, ServiceKind::WeightBased | ServiceKind::WashFold)
    }

    /// Anything not billed by the kilogram (shoes, mattresses, dry clean).
    pub fn is_per_item(self) -> bool {
        !matches!(self, ServiceKind::WeightBased)
    }
}

/// A vendor outlet, keyed by name.
///
/// Loaded fresh from the backend per read; immutable within one
/// assignment decision. Carries no load or capacity notion.
#[derive(Debug, Clone, Serialize)]
pub struct Vendor {
    pub name: String,
    pub role: VendorRole,
    pub service_area: Option<String>,
    pub service_type: Option<String>,
    pub rate_per_kg: Option<f64>,
    pub phone: Option<String>,
    pub postcode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Vendor {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let role = VendorRole::from_name(&name);
        Self {
            name,
            role,
            service_area: None,
            service_type: None,
            rate_per_kg: None,
            phone: None,
            postcode: None,
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = Some(postcode.into());
        self
    }

    pub fn with_coords(mut self, lat: f64, lng: f64) -> Self {
        self.latitude = Some(lat);
        self.longitude = Some(lng);
        self
    }

    pub fn with_service_area(mut self, area: impl Into<String>) -> Self {
        self.service_area = Some(area.into());
        self
    }

    pub fn with_rate_per_kg(mut self, rate: f64) -> Self {
        self.rate_per_kg = Some(rate);
        self
    }

    /// Coordinates, present only when both components are known.
    pub fn coords(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    /// Vendor postcode parsed as a number, for the numeric-nearest fallback.
    pub fn postcode_numeric(&self) -> Option<i64> {
        self.postcode.as_deref()?.trim().parse().ok()
    }
}
