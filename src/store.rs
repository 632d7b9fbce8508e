//! HTTP adapter for the order/vendor backend.
//!
//! The backend is a managed tabular service consumed as-is: vendors are
//! listed with a GET, assignments land as a single PATCH on the order
//! row. Failures come back as values; the dispatch flow treats them as
//! a failed attempt, never as a crash. No retry or backoff here, only
//! the client timeout and an optional per-order write limiter.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::rate_limit::RateLimiter;
use crate::traits::{OrderWriter, VendorSource};
use crate::vendor::Vendor;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    /// Bearer token sent on every request when set.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("too many writes for order {0} in this window")]
    RateLimited(String),
}

/// REST client for the backend tables.
#[derive(Debug)]
pub struct RestStore {
    config: StoreConfig,
    client: reqwest::blocking::Client,
    write_limiter: Option<RateLimiter>,
}

impl RestStore {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client, write_limiter: None })
    }

    /// Cap assignment writes per order id within the limiter's window.
    pub fn with_write_limiter(mut self, limiter: RateLimiter) -> Self {
        self.write_limiter = Some(limiter);
        self
    }

    fn request(&self, builder: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.config.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }
}

impl VendorSource for RestStore {
    type Error = StoreError;

    fn list_vendors(&self) -> Result<Vec<Vendor>, StoreError> {
        let url = format!("{}/vendors", self.config.base_url);
        let records: Vec<VendorRecord> = self
            .request(self.client.get(url))
            .send()?
            .error_for_status()?
            .json()?;

        Ok(records.into_iter().map(Vendor::from).collect())
    }
}

impl OrderWriter for RestStore {
    type Error = StoreError;

    fn assign_vendor(&self, order_id: &str, vendor_name: &str) -> Result<(), StoreError> {
        if let Some(limiter) = &self.write_limiter {
            if !limiter.check(order_id) {
                warn!(order_id, "assignment write rate-limited");
                return Err(StoreError::RateLimited(order_id.to_string()));
            }
        }

        let url = format!("{}/orders/{}", self.config.base_url, order_id);
        self.request(self.client.patch(url))
            .json(&AssignVendorPatch { assigned_vendor: vendor_name })
            .send()?
            .error_for_status()?;

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct AssignVendorPatch<'a> {
    assigned_vendor: &'a str,
}

/// Wire shape of a vendor row. Every optional column defaults to `None`
/// so a sparse row never fails the whole listing.
#[derive(Debug, Deserialize)]
struct VendorRecord {
    name: String,
    #[serde(default)]
    service_area: Option<String>,
    #[serde(default)]
    service_type: Option<String>,
    #[serde(default)]
    rate_per_kg: Option<f64>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    postcode: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

impl From<VendorRecord> for Vendor {
    fn from(record: VendorRecord) -> Self {
        let mut vendor = Vendor::new(record.name);
        vendor.service_area = record.service_area;
        vendor.service_type = record.service_type;
        vendor.rate_per_kg = record.rate_per_kg;
        vendor.phone = record.phone;
        vendor.postcode = record.postcode;
        vendor.latitude = record.latitude;
        vendor.longitude = record.longitude;
        vendor
    }
}
