// src/core/service_client.rs
//! Read-only client for the portal REST backend

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, trace, warn};

use crate::types::{CompanyRecord, JobRecord};

const JOBS_ENDPOINT: &str = "/jobs";
const COMPANIES_ENDPOINT: &str = "/companies";
// The collection lives under the singular path on the backend.
const JOB_POOL_ENDPOINT: &str = "/job";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Backend operations the job views depend on.
#[async_trait]
pub trait JobsApi: Send + Sync {
    async fn fetch_job(&self, id: &str) -> Result<JobRecord>;

    async fn fetch_company(&self, id: &str) -> Result<CompanyRecord>;

    /// Every job the backend lists, minus entries that fail to parse.
    async fn fetch_job_pool(&self) -> Result<Vec<JobRecord>>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generic GET request
    pub async fn get<R>(&self, endpoint: &str) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        trace!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<R>()
                .await
                .with_context(|| format!("Failed to parse JSON response from {}", url))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("HTTP {} error from {}: {}", status, url, error_text)
        }
    }
}

#[async_trait]
impl JobsApi for ServiceClient {
    async fn fetch_job(&self, id: &str) -> Result<JobRecord> {
        info!("Fetching job {}", id);
        self.get(&format!("{}/{}", JOBS_ENDPOINT, id)).await
    }

    async fn fetch_company(&self, id: &str) -> Result<CompanyRecord> {
        info!("Fetching company {}", id);
        self.get(&format!("{}/{}", COMPANIES_ENDPOINT, id)).await
    }

    async fn fetch_job_pool(&self) -> Result<Vec<JobRecord>> {
        let raw: Vec<serde_json::Value> = self.get(JOB_POOL_ENDPOINT).await?;
        let total = raw.len();

        let jobs: Vec<JobRecord> = raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<JobRecord>(value) {
                Ok(job) => Some(job),
                Err(e) => {
                    warn!("Skipping malformed job in pool: {}", e);
                    None
                }
            })
            .collect();

        info!("Fetched job pool: {} of {} entries usable", jobs.len(), total);
        Ok(jobs)
    }
}
