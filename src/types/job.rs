// src/types/job.rs
//! Job posting records as served by the portal backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ===== Posting Kind =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostingKind {
    /// Owned by a company registered on the portal
    Native,
    /// Redirects applicants to a third-party site
    External,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

// ===== Job Record =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "JobWire")]
pub struct JobRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    pub salary_range: Option<SalaryRange>,
    pub work_location: Option<String>,
    pub remote: bool,
    pub application_deadline: DateTime<Utc>,
    pub job_responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub languages_required: Vec<String>,
    pub keywords: Vec<String>,
    pub shift: Vec<String>,
    pub company_culture: Option<String>,
    #[serde(rename = "type")]
    pub kind: PostingKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    posted_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(rename = "comlogo", skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl JobRecord {
    /// Company to join against. Always `None` for external postings.
    pub fn company_ref(&self) -> Option<&str> {
        match self.kind {
            PostingKind::Native => self.posted_by.as_deref(),
            PostingKind::External => None,
        }
    }

    /// Off-site application link. Always `None` for native postings.
    pub fn external_link(&self) -> Option<&str> {
        match self.kind {
            PostingKind::External => self.link.as_deref(),
            PostingKind::Native => None,
        }
    }

    pub fn is_native(&self) -> bool {
        self.kind == PostingKind::Native
    }
}

/// Backend shape before the native/external invariants are applied.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobWire {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    employment_type: Option<String>,
    experience_level: Option<String>,
    salary_range: Option<SalaryRange>,
    work_location: Option<String>,
    #[serde(default)]
    remote: bool,
    application_deadline: DateTime<Utc>,
    #[serde(default)]
    job_responsibilities: Vec<String>,
    #[serde(default)]
    requirements: Vec<String>,
    #[serde(default)]
    languages_required: Vec<String>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    shift: Vec<String>,
    company_culture: Option<String>,
    #[serde(rename = "type")]
    kind: Option<PostingKind>,
    posted_by: Option<String>,
    link: Option<String>,
    comlogo: Option<String>,
}

impl From<JobWire> for JobRecord {
    fn from(wire: JobWire) -> Self {
        // Untyped records are native when they name an owning company.
        let kind = wire.kind.unwrap_or(if wire.posted_by.is_some() {
            PostingKind::Native
        } else {
            PostingKind::External
        });

        let (posted_by, link) = match kind {
            PostingKind::Native => (wire.posted_by.filter(|c| !c.is_empty()), None),
            PostingKind::External => (None, wire.link.filter(|l| !l.is_empty())),
        };

        Self {
            id: wire.id,
            title: wire.title,
            description: wire.description,
            employment_type: wire.employment_type,
            experience_level: wire.experience_level,
            salary_range: wire.salary_range,
            work_location: wire.work_location,
            remote: wire.remote,
            application_deadline: wire.application_deadline,
            job_responsibilities: wire.job_responsibilities,
            requirements: wire.requirements,
            languages_required: wire.languages_required,
            keywords: wire.keywords,
            shift: wire.shift,
            company_culture: wire.company_culture.filter(|c| !c.trim().is_empty()),
            kind,
            posted_by,
            link,
            logo: wire.comlogo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base(kind: &str) -> serde_json::Value {
        json!({
            "_id": "J1",
            "title": "Backend Engineer",
            "description": "Build services",
            "applicationDeadline": "2030-05-01T00:00:00.000Z",
            "type": kind,
            "postedBy": "C1",
            "link": "https://careers.example.com/123"
        })
    }

    #[test]
    fn test_native_keeps_company_and_drops_link() {
        let job: JobRecord = serde_json::from_value(base("native")).unwrap();
        assert_eq!(job.company_ref(), Some("C1"));
        assert_eq!(job.external_link(), None);
        assert!(job.requirements.is_empty());
    }

    #[test]
    fn test_external_never_carries_company() {
        let job: JobRecord = serde_json::from_value(base("external")).unwrap();
        assert_eq!(job.company_ref(), None);
        assert_eq!(job.external_link(), Some("https://careers.example.com/123"));

        let echoed = serde_json::to_value(&job).unwrap();
        assert!(echoed.get("postedBy").is_none());
        assert_eq!(echoed["type"], "external");
    }

    #[test]
    fn test_missing_kind_inferred_from_company() {
        let mut value = base("native");
        value.as_object_mut().unwrap().remove("type");
        let job: JobRecord = serde_json::from_value(value).unwrap();
        assert_eq!(job.kind, PostingKind::Native);

        let mut value = base("native");
        let obj = value.as_object_mut().unwrap();
        obj.remove("type");
        obj.remove("postedBy");
        let job: JobRecord = serde_json::from_value(value).unwrap();
        assert_eq!(job.kind, PostingKind::External);
    }

    #[test]
    fn test_missing_deadline_is_rejected() {
        let mut value = base("native");
        value.as_object_mut().unwrap().remove("applicationDeadline");
        assert!(serde_json::from_value::<JobRecord>(value).is_err());
    }
}
