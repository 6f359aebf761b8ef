use serde::{Deserialize, Serialize};

/// Query parameters shared by every analytics endpoint
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalyticsRequest {
    pub limit: Option<i64>,
    pub period: Option<String>,
}

impl AnalyticsRequest {
    pub fn new(limit: Option<i64>, period: Option<&str>) -> Self {
        Self {
            limit,
            period: period.map(str::to_string),
        }
    }
}
