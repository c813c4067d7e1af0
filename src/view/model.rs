// src/view/model.rs
//! Presentation state handed to the rendering layer

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::countdown::TimeLeft;
use crate::types::{CompanyRecord, JobRecord, RecommendationEntry};

/// Shown wherever a company logo cannot be resolved.
pub const PLACEHOLDER_LOGO: &str = "company.png";

// ===== Navigation =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    JobListing,
    Job(String),
    Application,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::JobListing => f.write_str("/jobs"),
            Route::Job(id) => write!(f, "/job/{}", id),
            Route::Application => f.write_str("/application"),
        }
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ===== View Model =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ViewStatus {
    Loading,
    Error { message: String, recovery: Route },
    Ready,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    #[serde(flatten)]
    pub status: ViewStatus,
    pub job: Option<JobRecord>,
    pub company: Option<CompanyRecord>,
    pub recommendations: Vec<RecommendationEntry>,
    pub time_left: Option<TimeLeft>,
    #[serde(skip)]
    pub recommendations_pending: bool,
}

impl ViewModel {
    pub fn loading() -> Self {
        Self {
            status: ViewStatus::Loading,
            job: None,
            company: None,
            recommendations: Vec::new(),
            time_left: None,
            recommendations_pending: true,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == ViewStatus::Ready
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, ViewStatus::Error { .. })
    }

    /// Primary load finished one way or the other and the pool load is done.
    pub fn is_settled(&self) -> bool {
        self.status != ViewStatus::Loading && !self.recommendations_pending
    }

    pub(crate) fn show_job(
        &mut self,
        job: JobRecord,
        company: Option<CompanyRecord>,
        now: DateTime<Utc>,
    ) {
        self.time_left = Some(TimeLeft::until(job.application_deadline, now));
        self.job = Some(job);
        self.company = company;
        self.status = ViewStatus::Ready;
    }

    pub(crate) fn show_error(&mut self, message: String) {
        self.status = ViewStatus::Error {
            message,
            recovery: Route::JobListing,
        };
        self.job = None;
        self.company = None;
        self.time_left = None;
    }

    pub(crate) fn show_recommendations(&mut self, entries: Vec<RecommendationEntry>) {
        self.recommendations = entries;
        self.recommendations_pending = false;
    }

    /// Recompute the countdown. Returns whether it changed; does nothing
    /// until a job is shown.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let Some(job) = &self.job else {
            return false;
        };

        let next = TimeLeft::until(job.application_deadline, now);
        if self.time_left == Some(next) {
            return false;
        }
        self.time_left = Some(next);
        true
    }

    /// Logo for the header: the company's for native postings, the
    /// posting's own for external ones.
    pub fn header_logo(&self) -> &str {
        let logo = match &self.job {
            Some(job) if job.is_native() => self.company.as_ref().and_then(|c| c.logo.as_deref()),
            Some(job) => job.logo.as_deref(),
            None => None,
        };
        logo.filter(|l| !l.is_empty()).unwrap_or(PLACEHOLDER_LOGO)
    }
}

impl RecommendationEntry {
    /// Company logo when enrichment found one, else the posting's own.
    pub fn logo(&self) -> &str {
        self.company_logo
            .as_deref()
            .filter(|l| !l.is_empty())
            .or(self.job.logo.as_deref())
            .filter(|l| !l.is_empty())
            .unwrap_or(PLACEHOLDER_LOGO)
    }

    pub fn route(&self) -> Route {
        Route::Job(self.job.id.clone())
    }
}
