use time::OffsetDateTime;

use super::ActivityId;
use crate::domain::ProgressError;

/// A goal definition with an optional point target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub date: Option<String>,
    pub description: Option<String>,
    /// Target point count. `None` means no goal has been set.
    pub goal_points: Option<i64>,
    pub created_at: OffsetDateTime,
}

/// Raw activity fields as submitted by a caller, before validation.
#[derive(Debug, Clone, Default)]
pub struct ActivityInput {
    pub name: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub goal_points: Option<String>,
}

#[cfg(test)]
impl ActivityInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_goal_points(mut self, goal_points: impl Into<String>) -> Self {
        self.goal_points = Some(goal_points.into());
        self
    }
}

impl ActivityInput {
    /// Validate the input into the fields that get persisted.
    ///
    /// The name is required. An unparseable or negative `goal_points` is
    /// stored as "no goal" rather than rejected.
    pub fn validate(&self) -> Result<NewActivity, ProgressError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProgressError::validation("activity name is required"));
        }

        Ok(NewActivity {
            name: name.to_string(),
            date: non_empty(self.date.as_deref()),
            description: non_empty(self.description.as_deref()),
            goal_points: self.goal_points.as_deref().and_then(parse_goal_points),
        })
    }
}

/// Validated activity fields, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub name: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub goal_points: Option<i64>,
}

/// Ordering for activity listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityOrder {
    /// Most recently created first.
    #[default]
    Newest,
    /// Alphabetical by name (sidebar summary).
    ByName,
}

/// Lenient goal parsing: anything that isn't a non-negative integer is "no goal".
pub fn parse_goal_points(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|goal| *goal >= 0)
}

pub(crate) fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
