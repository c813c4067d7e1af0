// src/types/company.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub established_year: Option<u16>,
    pub employees_count: Option<u32>,
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub social_media_links: Option<SocialLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
}

impl SocialLinks {
    /// Platforms with a link set, in display order.
    pub fn present(&self) -> Vec<(&'static str, &str)> {
        [
            ("LinkedIn", self.linkedin.as_deref()),
            ("Facebook", self.facebook.as_deref()),
            ("Twitter", self.twitter.as_deref()),
        ]
        .into_iter()
        .filter_map(|(platform, link)| link.filter(|l| !l.is_empty()).map(|l| (platform, l)))
        .collect()
    }
}
