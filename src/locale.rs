//! # Locale Module
//!
//! Seeds the default measurement system from the user's country. The lookup
//! itself sits behind the [`CountryLookup`] trait so the IP-geolocation
//! client can be swapped for a fake in tests; the resolved preference lives
//! in [`MeasurementPreference`], explicit state owned by the caller.

use crate::measurement_types::MeasurementSystem;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use serde::Deserialize;

/// ISO 3166-1 alpha-2 codes of countries that primarily use the imperial
/// system: United States, Liberia, Myanmar.
pub const IMPERIAL_COUNTRIES: [&str; 3] = ["US", "LR", "MM"];

/// Geolocation endpoint answering with the caller's country code.
pub const GEOLOCATION_ENDPOINT: &str = "https://ipapi.co/json/";

/// Classify a country code into the measurement system its recipes should
/// default to. Codes are expected uppercase as geolocation providers return
/// them; anything not in the imperial list is metric.
pub fn system_for_country(country_code: &str) -> MeasurementSystem {
    if IMPERIAL_COUNTRIES.contains(&country_code) {
        MeasurementSystem::Imperial
    } else {
        MeasurementSystem::Metric
    }
}

/// Source of the user's country code, looked up once at startup.
#[async_trait]
pub trait CountryLookup: Send + Sync {
    async fn country_code(&self) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    country_code: String,
}

/// [`CountryLookup`] backed by the ipapi.co IP-geolocation service.
pub struct IpApiLookup {
    client: reqwest::Client,
    endpoint: String,
}

impl IpApiLookup {
    pub fn new() -> Self {
        Self::with_endpoint(GEOLOCATION_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }
}

impl Default for IpApiLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CountryLookup for IpApiLookup {
    async fn country_code(&self) -> Result<String> {
        let response: GeoResponse = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .context("Failed to reach geolocation service")?
            .json()
            .await
            .context("Failed to decode geolocation response")?;

        Ok(response.country_code)
    }
}

/// The active measurement-system preference.
///
/// Defaults to metric. [`seed_from`](Self::seed_from) consults a country
/// lookup once at startup; a manual override via
/// [`set_system`](Self::set_system) pins the preference so later seeding
/// cannot change it.
#[derive(Debug, Clone)]
pub struct MeasurementPreference {
    system: MeasurementSystem,
    overridden: bool,
}

impl MeasurementPreference {
    pub fn new() -> Self {
        Self {
            system: MeasurementSystem::Metric,
            overridden: false,
        }
    }

    /// The currently active system, to be passed into the conversion calls.
    pub fn system(&self) -> MeasurementSystem {
        self.system
    }

    /// Seed the preference from the user's country. Lookup failures keep the
    /// metric default rather than surfacing an error.
    pub async fn seed_from(&mut self, lookup: &dyn CountryLookup) {
        if self.overridden {
            return;
        }

        match lookup.country_code().await {
            Ok(country_code) => {
                self.system = system_for_country(&country_code);
                info!(
                    "Seeded measurement preference from country '{}': {}",
                    country_code, self.system
                );
            }
            Err(err) => {
                warn!("Could not determine location, defaulting to metric: {}", err);
                self.system = MeasurementSystem::Metric;
            }
        }
    }

    /// Manually select a system, pinning the preference against re-seeding.
    pub fn set_system(&mut self, system: MeasurementSystem) {
        self.system = system;
        self.overridden = true;
    }
}

impl Default for MeasurementPreference {
    fn default() -> Self {
        Self::new()
    }
}
