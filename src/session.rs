// src/session.rs
use serde::Serialize;

/// Identity of whoever is browsing, handed to the application flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallerIdentity {
    pub email: Option<String>,
}

impl CallerIdentity {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_email(email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            email: Some(email).filter(|e| !e.trim().is_empty()),
        }
    }
}
