use super::errors::{UseCaseError, UseCaseResult};

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_OFFSET: i64 = 0;

/// Validated page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// Applies defaults and rejects a non-positive limit or negative offset
    pub fn resolve(limit: Option<i64>, offset: Option<i64>) -> UseCaseResult<Self> {
        let limit = resolve_limit(limit)?;
        let offset = offset.unwrap_or(DEFAULT_OFFSET);
        if offset < 0 {
            return Err(UseCaseError::Validation(
                "Offset cannot be negative".to_string(),
            ));
        }

        Ok(Self { limit, offset })
    }
}

/// Defaults a missing limit to 10 and rejects zero or negative values
pub fn resolve_limit(limit: Option<i64>) -> UseCaseResult<i64> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    if limit <= 0 {
        return Err(UseCaseError::Validation(
            "Limit must be greater than 0".to_string(),
        ));
    }
    Ok(limit)
}
