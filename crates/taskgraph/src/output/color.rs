//! Color and icon helpers for text output.
//!
//! Semantic Color Theme:
//!   - Done:        green   (completed)
//!   - Active:      yellow  (active status, HIGH priority)
//!   - Attention:   red     (cycles, deleted)
//!   - Reference:   cyan    (task IDs, center node)
//!   - Muted:       dimmed  (placeholders, waiting, field labels)

use crate::domain::{Priority, TaskStatus};
use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().bold().to_string()
}

/// Colorize a task ID (cyan).
pub(crate) fn colorize_id(id: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return id.to_string();
    }
    id.cyan().to_string()
}

/// Apply dimmed style to text.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text (for section headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Status icon, with ASCII fallback support.
pub(crate) fn status_icon(status: TaskStatus, config: &OutputConfig) -> &'static str {
    if config.use_ascii {
        match status {
            TaskStatus::Pending => "o",
            TaskStatus::Waiting => "~",
            TaskStatus::Active => ">",
            TaskStatus::Completed => "+",
            TaskStatus::Deleted => "x",
        }
    } else {
        match status {
            TaskStatus::Pending => "○",
            TaskStatus::Waiting => "◌",
            TaskStatus::Active => "▶",
            TaskStatus::Completed => "✓",
            TaskStatus::Deleted => "✗",
        }
    }
}

/// Colored status icon.
pub(crate) fn colored_status_icon(status: TaskStatus, config: &OutputConfig) -> String {
    let icon = status_icon(status, config);
    if !config.use_colors {
        return icon.to_string();
    }
    match status {
        TaskStatus::Pending => icon.white().to_string(),
        TaskStatus::Waiting => icon.dimmed().to_string(),
        TaskStatus::Active => icon.yellow().to_string(),
        TaskStatus::Completed => icon.green().to_string(),
        TaskStatus::Deleted => icon.red().to_string(),
    }
}

/// Priority label colored by level.
pub(crate) fn colorize_priority(priority: Priority, config: &OutputConfig) -> String {
    let text = priority.label();
    if !config.use_colors {
        return text.to_string();
    }
    match priority {
        Priority::High => text.yellow().bold().to_string(),
        Priority::Medium => text.to_string(),
        Priority::Low | Priority::None => text.dimmed().to_string(),
    }
}
