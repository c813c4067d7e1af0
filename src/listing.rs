// src/listing.rs
//! Job cards for the listing page

use anyhow::{Context, Result};
use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::core::JobsApi;
use crate::types::JobRecord;
use crate::view::{Route, PLACEHOLDER_LOGO};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    pub id: String,
    pub logo: String,
    /// Empty when the company could not be resolved.
    pub company_name: String,
    pub work_location: String,
    pub employment_type: String,
    pub title: String,
}

impl JobCard {
    pub fn route(&self) -> Route {
        Route::Job(self.id.clone())
    }
}

/// Every listed job as a card, with company names resolved concurrently.
pub async fn load_cards(api: &dyn JobsApi) -> Result<Vec<JobCard>> {
    let jobs = api
        .fetch_job_pool()
        .await
        .context("Failed to fetch job listing")?;

    info!("Building {} job cards", jobs.len());
    Ok(join_all(jobs.into_iter().map(|job| card_for(api, job))).await)
}

async fn card_for(api: &dyn JobsApi, job: JobRecord) -> JobCard {
    let company = match job.company_ref() {
        Some(company_id) => match api.fetch_company(company_id).await {
            Ok(company) => Some(company),
            Err(e) => {
                warn!("Error fetching company details for {}: {:#}", company_id, e);
                None
            }
        },
        None => None,
    };

    let logo = company
        .as_ref()
        .and_then(|c| c.logo.clone())
        .or_else(|| job.logo.clone())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_LOGO.to_string());

    JobCard {
        logo,
        company_name: company.map(|c| c.name).unwrap_or_default(),
        work_location: job.work_location.unwrap_or_default(),
        employment_type: job.employment_type.unwrap_or_default(),
        title: job.title,
        id: job.id,
    }
}
