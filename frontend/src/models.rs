use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend ids are uuids today but older records carry integers.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ClientId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientId::Number(n) => write!(f, "{}", n),
            ClientId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Metric {
    pub metric_name: String,
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One client's results record. Extra backend fields (`image_url`,
/// `created_at`, ...) are ignored.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ClientCaseStudy {
    pub id: ClientId,
    pub display_name: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub testimonial: Option<String>,
    #[serde(default)]
    pub testimonial_author: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct PortfolioStats {
    #[serde(default)]
    pub total_clients: Option<u32>,
    #[serde(default)]
    pub total_reach: Option<String>,
    #[serde(default)]
    pub success_rate: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}
