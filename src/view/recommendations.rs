// src/view/recommendations.rs
//! Sampling and company enrichment of recommended jobs

use chrono::{DateTime, Utc};
use futures::future::join_all;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::core::JobsApi;
use crate::countdown::deadline_elapsed;
use crate::types::{JobRecord, RecommendationEntry};

/// Random sample of at most `limit` jobs that are still open and are not
/// `exclude_id`.
pub fn select_recommendations<R: Rng + ?Sized>(
    pool: Vec<JobRecord>,
    exclude_id: &str,
    now: DateTime<Utc>,
    limit: usize,
    rng: &mut R,
) -> Vec<JobRecord> {
    let mut eligible: Vec<JobRecord> = pool
        .into_iter()
        .filter(|job| job.id != exclude_id)
        .filter(|job| !deadline_elapsed(job.application_deadline, now))
        .collect();

    eligible.shuffle(rng);
    eligible.truncate(limit);
    eligible
}

/// Attach company branding to every native job. Lookups run concurrently and
/// a failed lookup leaves only its own entry unenriched.
pub async fn enrich_with_companies(
    api: &dyn JobsApi,
    jobs: Vec<JobRecord>,
) -> Vec<RecommendationEntry> {
    join_all(jobs.into_iter().map(|job| enrich_one(api, job))).await
}

async fn enrich_one(api: &dyn JobsApi, job: JobRecord) -> RecommendationEntry {
    let Some(company_id) = job.company_ref().map(str::to_owned) else {
        return RecommendationEntry::unenriched(job);
    };

    match api.fetch_company(&company_id).await {
        Ok(company) => RecommendationEntry::with_company(job, &company),
        Err(e) => {
            warn!(
                "Company {} unavailable for recommended job {}: {:#}",
                company_id, job.id, e
            );
            RecommendationEntry::unenriched(job)
        }
    }
}
