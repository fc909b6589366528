//! To-do item entity.

/// A titled task with an optional description and a completion flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl TodoItem {
    /// Attaches an id to a set of item fields.
    pub fn from_fields(id: i64, fields: TodoFields) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            completed: fields.completed,
        }
    }
}

/// The user-supplied part of an item.
///
/// Used both for creation and for updates. Updates are full overwrites:
/// every field replaces the stored value, `description: None` included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFields {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl TodoFields {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
        }
    }
}
