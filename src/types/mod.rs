// src/types/mod.rs
//! Records exchanged with the portal backend

pub mod company;
pub mod job;

pub use company::{CompanyRecord, ContactInfo, SocialLinks};
pub use job::{JobRecord, PostingKind, SalaryRange};

use serde::{Deserialize, Serialize};

/// A job offered as a recommendation, with its company's branding when it
/// could be resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationEntry {
    #[serde(flatten)]
    pub job: JobRecord,
    pub company_logo: Option<String>,
    pub company_name: Option<String>,
}

impl RecommendationEntry {
    pub fn unenriched(job: JobRecord) -> Self {
        Self {
            job,
            company_logo: None,
            company_name: None,
        }
    }

    pub fn with_company(job: JobRecord, company: &CompanyRecord) -> Self {
        Self {
            job,
            company_logo: company.logo.clone(),
            company_name: Some(company.name.clone()),
        }
    }
}
