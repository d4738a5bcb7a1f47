//! Page selection for listing subscriptions.

use super::SubscriptionError;

/// A validated `limit`/`offset` pair.
///
/// `limit` is at least 1 and `offset` is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: i64,
    offset: i64,
}

impl PageRequest {
    pub fn new(limit: i64, offset: i64) -> Result<Self, SubscriptionError> {
        if limit < 1 {
            return Err(SubscriptionError::incorrect_value(
                "limit",
                format!("must be a positive integer, got {}", limit),
            ));
        }
        if offset < 0 {
            return Err(SubscriptionError::incorrect_value(
                "offset",
                format!("must not be negative, got {}", offset),
            ));
        }
        Ok(Self { limit, offset })
    }

    /// Parses raw query-string values. Both parameters are required.
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> Result<Self, SubscriptionError> {
        let limit = parse_param("limit", limit)?;
        let offset = parse_param("offset", offset)?;
        Self::new(limit, offset)
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

fn parse_param(field: &str, raw: Option<&str>) -> Result<i64, SubscriptionError> {
    let raw = raw.ok_or_else(|| SubscriptionError::incorrect_value(field, "is required"))?;
    raw.parse::<i64>().map_err(|_| {
        SubscriptionError::incorrect_value(field, format!("expected an integer, got '{}'", raw))
    })
}
