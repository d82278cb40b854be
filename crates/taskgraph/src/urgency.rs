//! Urgency scoring.
//!
//! Urgency is a ranking score in `[0, 100]` derived from priority, due date
//! proximity, task age, status and tags. It is computed by whoever owns the
//! task (the store loader here) and cached on the task; graph builders only
//! copy the cached value onto nodes.
//!
//! All functions take an explicit `now` so results are reproducible.

use crate::domain::{Priority, Task, TaskStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lower bound of the final score.
pub const MIN_URGENCY: f64 = 0.0;

/// Upper bound of the final score.
pub const MAX_URGENCY: f64 = 100.0;

/// Base contribution of any overdue or due-this-week task.
const DUE_SOON_BASE: f64 = 12.0;

/// Base contribution of tasks due in 8 to 14 days.
const DUE_LATER_BASE: f64 = 5.0;

/// Per-day contribution of task age.
const AGE_PER_DAY: f64 = 0.01;

const URGENT_TAG: &str = "urgent";
const IMPORTANT_TAG: &str = "important";

/// Contribution of the priority level.
pub fn priority_contribution(priority: Priority) -> f64 {
    match priority {
        Priority::High => 6.0,
        Priority::Medium => 3.9,
        Priority::Low => 1.8,
        Priority::None => 0.0,
    }
}

/// Contribution of the due date relative to `now`.
///
/// Days are whole days truncated toward zero, negative when overdue:
///
/// - overdue: `12 + |days| * 0.2`
/// - 0 to 7 days: `12 - days * 1.4`
/// - 8 to 14 days: `5 - days * 0.3`
/// - later, or no due date: `0`
#[allow(clippy::cast_precision_loss)]
pub fn due_date_contribution(due_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let Some(due) = due_date else {
        return 0.0;
    };

    let days_until_due = (due - now).num_days();
    match days_until_due {
        d if d < 0 => DUE_SOON_BASE + d.unsigned_abs() as f64 * 0.2,
        d @ 0..=7 => DUE_SOON_BASE - d as f64 * 1.4,
        d @ 8..=14 => DUE_LATER_BASE - d as f64 * 0.3,
        _ => 0.0,
    }
}

/// Contribution of the task's age; future creation dates count as zero.
#[allow(clippy::cast_precision_loss)]
pub fn age_contribution(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age_days = (now - created_at).num_days().max(0);
    age_days as f64 * AGE_PER_DAY
}

/// Contribution of the status.
pub fn status_contribution(status: TaskStatus) -> f64 {
    match status {
        TaskStatus::Active => 4.0,
        TaskStatus::Waiting => -3.0,
        TaskStatus::Pending | TaskStatus::Completed | TaskStatus::Deleted => 0.0,
    }
}

/// Contribution of tags. `urgent` and `important` each count once.
pub fn tag_contribution(tags: &[String]) -> f64 {
    let has = |wanted: &str| tags.iter().any(|t| t.eq_ignore_ascii_case(wanted));

    let mut total = 0.0;
    if has(URGENT_TAG) {
        total += 5.0;
    }
    if has(IMPORTANT_TAG) {
        total += 3.0;
    }
    total
}

/// Per-component view of a task's urgency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UrgencyBreakdown {
    /// From [`priority_contribution`]
    pub priority: f64,
    /// From [`due_date_contribution`]
    pub due_date: f64,
    /// From [`age_contribution`]
    pub age: f64,
    /// From [`status_contribution`]
    pub status: f64,
    /// From [`tag_contribution`]
    pub tags: f64,
}

impl UrgencyBreakdown {
    /// Compute every component for `task` at `now`.
    pub fn compute(task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            priority: priority_contribution(task.priority),
            due_date: due_date_contribution(task.due_date, now),
            age: age_contribution(task.created_at, now),
            status: status_contribution(task.status),
            tags: tag_contribution(&task.tags),
        }
    }

    /// Sum of the components, clamped to `[0, 100]`.
    pub fn total(&self) -> f64 {
        let raw = self.priority + self.due_date + self.age + self.status + self.tags;
        raw.clamp(MIN_URGENCY, MAX_URGENCY)
    }
}

/// Urgency score of `task` at `now`.
pub fn score(task: &Task, now: DateTime<Utc>) -> f64 {
    UrgencyBreakdown::compute(task, now).total()
}
