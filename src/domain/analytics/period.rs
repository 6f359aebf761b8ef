use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

/// Coarse time bucket used to scope analytics
///
/// Each period is a trailing window ending now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::Daily,
        Period::Weekly,
        Period::Monthly,
        Period::Quarterly,
        Period::Yearly,
    ];

    /// Parses a period name, ignoring case
    ///
    /// # Example
    /// ```
    /// use kudos_api::domain::analytics::Period;
    ///
    /// assert_eq!(Period::parse("Weekly"), Ok(Period::Weekly));
    /// assert!(Period::parse("hourly").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                format!(
                    "Invalid period: {}. Valid periods are: daily, weekly, monthly, quarterly, yearly",
                    value
                )
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Quarterly => "quarterly",
            Period::Yearly => "yearly",
        }
    }

    /// Returns the first instant covered by the window ending at `now`
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let start = match self {
            Period::Daily => now.checked_sub_signed(Duration::days(1)),
            Period::Weekly => now.checked_sub_signed(Duration::days(7)),
            Period::Monthly => now.checked_sub_months(Months::new(1)),
            Period::Quarterly => now.checked_sub_months(Months::new(3)),
            Period::Yearly => now.checked_sub_months(Months::new(12)),
        };

        start.unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
