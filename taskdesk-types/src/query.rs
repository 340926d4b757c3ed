use strum_macros::Display;

use crate::{TaskPriority, TaskStatus};

/// Criteria are ANDed together. Title is substring containment, the
/// enumerated fields are exact matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub title_contains: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        self.title_contains.is_none() && self.priority.is_none() && self.status.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskOrder {
    pub field: OrderField,
    pub direction: OrderDirection,
}

/// The fixed set of sortable fields. This enumeration is the allow-list
/// for anything interpolated into query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum OrderField {
    Title,
    Priority,
    Status,
    CreatedAt,
}

impl OrderField {
    pub const VARIANTS: [Self; 4] = [Self::Title, Self::Priority, Self::Status, Self::CreatedAt];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl Default for OrderDirection {
    fn default() -> Self {
        Self::Asc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_empty() {
        assert!(TaskFilter::default().is_empty());
    }

    #[test]
    fn filter_with_any_criterion_is_not_empty() {
        let filter = TaskFilter {
            title_contains: Some("rent".into()),
            ..Default::default()
        };
        assert!(!filter.is_empty());

        let filter = TaskFilter {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        assert!(!filter.is_empty());
    }
}
