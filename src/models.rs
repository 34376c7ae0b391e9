//! Frontend Models
//!
//! Data structures matching the remote todo collection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Todo record (matches backend, camelCase on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Id carried by a todo that has not been saved yet
    pub const PLACEHOLDER_ID: u32 = 0;

    /// Unsaved todo shown while its creation request is in flight
    pub fn placeholder(user_id: u32, title: &str) -> Self {
        Self {
            id: Self::PLACEHOLDER_ID,
            user_id,
            title: title.to_string(),
            completed: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == Self::PLACEHOLDER_ID
    }
}

/// Which todos the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterStatus {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterStatus {
    /// Every filter, in footer order
    pub const ALL: [FilterStatus; 3] = [FilterStatus::All, FilterStatus::Active, FilterStatus::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            FilterStatus::All => "All",
            FilterStatus::Active => "Active",
            FilterStatus::Completed => "Completed",
        }
    }

    /// Location hash the footer link points at
    pub fn href(&self) -> &'static str {
        match self {
            FilterStatus::All => "#/",
            FilterStatus::Active => "#/active",
            FilterStatus::Completed => "#/completed",
        }
    }

    /// Parse a location hash such as `#/active`; unknown routes show everything
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_start_matches('/') {
            "active" => FilterStatus::Active,
            "completed" => FilterStatus::Completed,
            _ => FilterStatus::All,
        }
    }
}

/// User-facing error, one per failing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    Load,
    Add,
    Delete,
    Update,
    EmptyTitle,
}

impl ErrorMessage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorMessage::Load => "Unable to load todos",
            ErrorMessage::Add => "Unable to add a todo",
            ErrorMessage::Delete => "Unable to delete a todo",
            ErrorMessage::Update => "Unable to update a todo",
            ErrorMessage::EmptyTitle => "Title should not be empty",
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
