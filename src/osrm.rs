//! OSRM HTTP adapter for travel-time matrices.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ProviderError;
use crate::matrix::DistanceMatrix;
use crate::traits::DistanceMatrixProvider;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// `/table` request URL; OSRM expects `lng,lat` pairs.
    pub fn table_url(&self, locations: &[(f64, f64)]) -> String {
        let coords = locations
            .iter()
            .map(|(lat, lng)| format!("{:.6},{:.6}", lng, lat))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/table/v1/{}/{}?annotations=duration",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            coords
        )
    }
}

impl DistanceMatrixProvider for OsrmClient {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Result<DistanceMatrix, ProviderError> {
        let url = self.table_url(locations);
        debug!(locations = locations.len(), "requesting OSRM table");

        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmTableResponse>())
            .inspect_err(|err| warn!(error = %err, "OSRM table request failed"))?;

        body.into_matrix()
    }
}

#[derive(Debug, Deserialize)]
struct OsrmTableResponse {
    durations: Option<Vec<Vec<Option<f64>>>>,
}

impl OsrmTableResponse {
    /// Pairs OSRM cannot route between come back as `null`; they become
    /// unreachable edges.
    fn into_matrix(self) -> Result<DistanceMatrix, ProviderError> {
        let durations = self.durations.ok_or(ProviderError::MissingDurations)?;
        let rows = durations
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|value| value.unwrap_or(f64::INFINITY))
                    .collect()
            })
            .collect();

        Ok(DistanceMatrix::new(rows)?)
    }
}
