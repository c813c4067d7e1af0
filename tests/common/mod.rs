#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use job_portal::types::{CompanyRecord, JobRecord};
use job_portal::view::{ApplicationRequest, ApplyHandoff};
use job_portal::JobsApi;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 9, 30, 0).unwrap()
}

pub fn native_job(id: &str, company_id: &str, deadline: DateTime<Utc>) -> JobRecord {
    serde_json::from_value(json!({
        "_id": id,
        "title": format!("Engineer {}", id),
        "description": "Ship things",
        "employmentType": "Full-time",
        "experienceLevel": "Mid",
        "salaryRange": { "min": 60000, "max": 90000 },
        "workLocation": "Berlin",
        "remote": false,
        "applicationDeadline": deadline,
        "jobResponsibilities": ["Own services"],
        "requirements": ["Rust"],
        "type": "native",
        "postedBy": company_id
    }))
    .expect("valid native job")
}

pub fn external_job(id: &str, deadline: DateTime<Utc>) -> JobRecord {
    serde_json::from_value(json!({
        "_id": id,
        "title": format!("Contractor {}", id),
        "description": "Elsewhere",
        "remote": true,
        "applicationDeadline": deadline,
        "type": "external",
        // ignored for external postings
        "postedBy": "C-IGNORED",
        "link": format!("https://careers.example.com/{}", id)
    }))
    .expect("valid external job")
}

pub fn company(id: &str, name: &str) -> CompanyRecord {
    serde_json::from_value(json!({
        "_id": id,
        "name": name,
        "logo": format!("https://cdn.example.com/{}.png", id),
        "industry": "Software",
        "email": "hr@example.com",
        "socialMediaLinks": { "linkedin": "https://linkedin.com/company/example" }
    }))
    .expect("valid company")
}

/// In-memory backend recording every company lookup.
#[derive(Default)]
pub struct FakeJobsApi {
    jobs: HashMap<String, JobRecord>,
    companies: HashMap<String, CompanyRecord>,
    failing_companies: HashSet<String>,
    pool: Option<Vec<JobRecord>>,
    job_delay: Option<std::time::Duration>,
    company_calls: Mutex<Vec<String>>,
}

impl FakeJobsApi {
    pub fn new() -> Self {
        Self {
            pool: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn with_job(mut self, job: JobRecord) -> Self {
        self.jobs.insert(job.id.clone(), job);
        self
    }

    pub fn with_company(mut self, company: CompanyRecord) -> Self {
        self.companies.insert(company.id.clone(), company);
        self
    }

    pub fn with_failing_company(mut self, id: &str) -> Self {
        self.failing_companies.insert(id.to_string());
        self
    }

    pub fn with_pool(mut self, pool: Vec<JobRecord>) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn with_broken_pool(mut self) -> Self {
        self.pool = None;
        self
    }

    pub fn with_job_delay(mut self, delay: std::time::Duration) -> Self {
        self.job_delay = Some(delay);
        self
    }

    pub fn company_calls(&self) -> Vec<String> {
        self.company_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobsApi for FakeJobsApi {
    async fn fetch_job(&self, id: &str) -> Result<JobRecord> {
        if let Some(delay) = self.job_delay {
            tokio::time::sleep(delay).await;
        }
        self.jobs
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow!("HTTP 404 Not Found: job {}", id))
    }

    async fn fetch_company(&self, id: &str) -> Result<CompanyRecord> {
        self.company_calls.lock().unwrap().push(id.to_string());
        if self.failing_companies.contains(id) {
            return Err(anyhow!("connection reset while fetching company {}", id));
        }
        self.companies
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow!("HTTP 404 Not Found: company {}", id))
    }

    async fn fetch_job_pool(&self) -> Result<Vec<JobRecord>> {
        self.pool
            .clone()
            .ok_or_else(|| anyhow!("HTTP 500 Internal Server Error"))
    }
}

/// Records what the apply action handed off.
#[derive(Default)]
pub struct RecordingHandoff {
    pub opened: Mutex<Vec<String>>,
    pub applications: Mutex<Vec<ApplicationRequest>>,
}

impl ApplyHandoff for RecordingHandoff {
    fn open_external(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn start_application(&self, request: &ApplicationRequest) -> Result<()> {
        self.applications.lock().unwrap().push(request.clone());
        Ok(())
    }
}

pub fn days(n: i64) -> Duration {
    Duration::days(n)
}
