use super::Activity;

/// An activity with its completed points and percent of goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityProgress {
    pub activity: Activity,
    /// Sum of all production quantities, unset quantities counting as zero.
    pub completed: i64,
    /// `None` when the activity has no positive goal.
    pub percent: Option<i64>,
}

impl ActivityProgress {
    pub fn new(activity: Activity, completed: i64) -> Self {
        let percent = percent_of_goal(activity.goal_points, completed);
        Self {
            activity,
            completed,
            percent,
        }
    }
}

/// `min(100, floor(completed * 100 / goal))`, undefined unless `goal > 0`.
pub fn percent_of_goal(goal_points: Option<i64>, completed: i64) -> Option<i64> {
    let goal = goal_points.filter(|goal| *goal > 0)?;
    let percent = (i128::from(completed) * 100).div_euclid(i128::from(goal));

    Some(i64::try_from(percent.min(100)).unwrap_or(i64::MIN))
}

/// Sum of production quantities, unset quantities counting as zero.
///
/// Storage computes this in SQL; the in-memory store uses this directly.
#[cfg(test)]
pub fn completed_points<I>(quantities: I) -> i64
where
    I: IntoIterator<Item = Option<i64>>,
{
    quantities.into_iter().flatten().sum()
}
