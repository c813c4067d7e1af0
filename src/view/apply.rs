// src/view/apply.rs
//! Apply hand-off: external postings open off-site, native ones start the
//! portal's application flow

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::session::CallerIdentity;
use crate::types::{JobRecord, PostingKind};

/// What the application flow receives for a native posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub job_id: String,
    pub caller: CallerIdentity,
}

/// Side effects the apply action triggers outside this crate.
pub trait ApplyHandoff {
    /// Open `url` in a new browsing context.
    fn open_external(&self, url: &str) -> anyhow::Result<()>;

    fn start_application(&self, request: &ApplicationRequest) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    OpenedExternal { url: String },
    ApplicationStarted(ApplicationRequest),
}

#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("job details are not loaded")]
    NotReady,
    #[error("external job {0} has no application link")]
    MissingLink(String),
    #[error("apply hand-off failed: {0}")]
    Handoff(String),
}

pub fn apply(
    job: &JobRecord,
    caller: &CallerIdentity,
    handoff: &dyn ApplyHandoff,
) -> Result<ApplyOutcome, ApplyError> {
    match job.kind {
        PostingKind::External => {
            let url = job
                .external_link()
                .ok_or_else(|| ApplyError::MissingLink(job.id.clone()))?;

            info!("Opening external application for job {}: {}", job.id, url);
            handoff
                .open_external(url)
                .map_err(|e| ApplyError::Handoff(format!("{:#}", e)))?;

            Ok(ApplyOutcome::OpenedExternal {
                url: url.to_string(),
            })
        }
        PostingKind::Native => {
            let request = ApplicationRequest {
                job_id: job.id.clone(),
                caller: caller.clone(),
            };

            info!("Starting application for job {}", job.id);
            handoff
                .start_application(&request)
                .map_err(|e| ApplyError::Handoff(format!("{:#}", e)))?;

            Ok(ApplyOutcome::ApplicationStarted(request))
        }
    }
}
