use time::OffsetDateTime;

use super::{activity::non_empty, ActivityId, ProductionId};
use crate::domain::ProgressError;

/// A quantity of progress logged against an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub id: ProductionId,
    /// Copy of the activity name at the time the production was written.
    pub title: String,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub activity_id: ActivityId,
    pub created_at: OffsetDateTime,
}

/// A production together with the name of its activity, if it still exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionListing {
    pub production: Production,
    pub activity_name: Option<String>,
}

/// Raw production fields as submitted by a caller, before validation.
#[derive(Debug, Clone, Default)]
pub struct ProductionInput {
    pub activity_id: Option<String>,
    pub quantity: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
impl ProductionInput {
    pub fn for_activity(activity_id: impl ToString) -> Self {
        Self {
            activity_id: Some(activity_id.to_string()),
            ..Default::default()
        }
    }

    pub fn with_quantity(mut self, quantity: impl ToString) -> Self {
        self.quantity = Some(quantity.to_string());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl ProductionInput {
    /// Parse the activity reference, quantity and description.
    ///
    /// Unlike activity goals, a quantity that is present but not an
    /// integer is rejected. Whether the activity exists is checked by
    /// the caller.
    pub fn parse(&self) -> Result<ParsedProduction, ProgressError> {
        let raw_activity_id = self
            .activity_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ProgressError::validation("activity is required"))?;

        let activity_id = raw_activity_id
            .parse::<i64>()
            .map(ActivityId::new)
            .map_err(|_| ProgressError::validation("invalid activity"))?;

        Ok(ParsedProduction {
            activity_id,
            quantity: parse_quantity(self.quantity.as_deref())?,
            description: non_empty(self.description.as_deref()),
        })
    }
}

/// Production fields after parsing, before the title is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedProduction {
    pub activity_id: ActivityId,
    pub quantity: Option<i64>,
    pub description: Option<String>,
}

impl ParsedProduction {
    pub fn titled(self, title: impl Into<String>) -> NewProduction {
        NewProduction {
            title: title.into(),
            quantity: self.quantity,
            description: self.description,
            activity_id: self.activity_id,
        }
    }
}

/// Validated production fields, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduction {
    pub title: String,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub activity_id: ActivityId,
}

/// Strict quantity parsing. Blank means unset; anything else must be an integer.
pub fn parse_quantity(raw: Option<&str>) -> Result<Option<i64>, ProgressError> {
    match raw.map(str::trim).filter(|q| !q.is_empty()) {
        None => Ok(None),
        Some(q) => q
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ProgressError::validation("quantity must be an integer")),
    }
}
