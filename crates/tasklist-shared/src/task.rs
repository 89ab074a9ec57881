//! Task list and todo records as the API returns them

use std::fmt::Display;

use egui::WidgetText;

use crate::{
    errors::ConversionError,
    id::{TaskListId, TodoId},
};

/// Title of a task list, constrained to not be an empty string
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

/// Body text of a todo item, constrained to not be an empty string
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct TodoDescription(String);

impl TaskTitle {
    pub const MAX_LENGTH: usize = 80;
}

impl TodoDescription {
    pub const MAX_LENGTH: usize = 500;
}

impl TryFrom<String> for TaskTitle {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ConversionError::Empty);
        }
        if value.len() > Self::MAX_LENGTH {
            return Err(ConversionError::MaxExceeded {
                max: Self::MAX_LENGTH,
                actual: value.len(),
            });
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for TaskTitle {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl TryFrom<String> for TodoDescription {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ConversionError::Empty);
        }
        if value.len() > Self::MAX_LENGTH {
            return Err(ConversionError::MaxExceeded {
                max: Self::MAX_LENGTH,
                actual: value.len(),
            });
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for TodoDescription {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

impl From<TodoDescription> for String {
    fn from(value: TodoDescription) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TodoDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for TaskTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for TodoDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&TaskTitle> for WidgetText {
    fn from(value: &TaskTitle) -> Self {
        (&value.0).into()
    }
}

impl From<&TodoDescription> for WidgetText {
    fn from(value: &TodoDescription) -> Self {
        (&value.0).into()
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Pending,
    Completed,
}

impl TodoStatus {
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub description: TodoDescription,
    pub status: TodoStatus,
}

/// One row of the task lists overview
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct TaskListSummary {
    pub id: TaskListId,
    pub title: TaskTitle,
    /// True when the requesting user owns the list (owners can share it)
    pub is_own: bool,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct TaskListDetail {
    pub id: TaskListId,
    pub title: TaskTitle,
    pub is_own: bool,
    pub todos: Vec<Todo>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty("", ConversionError::Empty)]
    #[case::too_long("a".repeat(81), ConversionError::MaxExceeded{max:80, actual:81})]
    fn illegal_task_title(#[case] title: String, #[case] expect: ConversionError) {
        // Act
        let actual: Result<TaskTitle, ConversionError> = title.try_into();

        // Assert
        assert_eq!(actual.unwrap_err(), expect);
    }

    #[rstest]
    #[case::empty("", ConversionError::Empty)]
    #[case::too_long("a".repeat(501), ConversionError::MaxExceeded{max:500, actual:501})]
    fn illegal_todo_description(#[case] description: String, #[case] expect: ConversionError) {
        // Act
        let actual: Result<TodoDescription, ConversionError> = description.try_into();

        // Assert
        assert_eq!(actual.unwrap_err(), expect);
    }

    #[rstest]
    #[case::pending(TodoStatus::Pending, TodoStatus::Completed)]
    #[case::completed(TodoStatus::Completed, TodoStatus::Pending)]
    fn toggling_status_flips_it(#[case] start: TodoStatus, #[case] expected: TodoStatus) {
        assert_eq!(start.toggled(), expected);
    }
}
