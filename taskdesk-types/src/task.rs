use std::fmt;

use chrono::{DateTime, Utc};
use strum_macros::{Display, EnumString};

use crate::TaskTitle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Absent until the store assigns one, immutable afterwards.
    pub id: Option<i64>,
    pub title: TaskTitle,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(title: TaskTitle, description: String, priority: TaskPriority) -> Self {
        Self {
            id: None,
            title,
            description,
            priority,
            status: TaskStatus::default(),
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Task: {}", self.title)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Priority: {}", self.priority)?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Created: {}", self.created_at.format("%d/%m/%Y"))?;
        write!(
            f,
            "ID: {}",
            self.id.map_or_else(|| "-".into(), |id| id.to_string())
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const VARIANTS: [Self; 3] = [Self::Low, Self::Medium, Self::High];
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum TaskStatus {
    Pending,
    Done,
}

impl TaskStatus {
    pub const VARIANTS: [Self; 2] = [Self::Pending, Self::Done];

    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Done,
            Self::Done => Self::Pending,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}
