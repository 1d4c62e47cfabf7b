//! Request payloads
//!
//! Optional fields are `Option`s and are left out of the JSON entirely when
//! `None`. Presence is what counts: `Some("")` or `Some(0)` is still sent.

use serde::Serialize;

use crate::error::{HydrobondError, Result};

/// Body of a new post.
///
/// ```
/// use hydrobond::PostBody;
///
/// let body = PostBody::new("text").with_file_ids([1, 2, 3]);
/// assert!(body.has_attachments());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBody {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_ids: Option<Vec<u64>>,
}

impl PostBody {
    /// The text is passed through as given; the server decides what it
    /// accepts.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            file_ids: None,
        }
    }

    /// Attach uploaded files. The order is kept and becomes the order of
    /// `Post::files`.
    pub fn with_file_ids(mut self, file_ids: impl IntoIterator<Item = u64>) -> Self {
        self.file_ids = Some(file_ids.into_iter().collect());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file_ids(&self) -> Option<&[u64]> {
        self.file_ids.as_deref()
    }

    pub fn has_attachments(&self) -> bool {
        self.file_ids.as_ref().is_some_and(|ids| !ids.is_empty())
    }
}

/// Partial update of the account. Only the fields that were set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_file_id: Option<u64>,
}

impl UserSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_avatar_file_id(mut self, avatar_file_id: u64) -> Self {
        self.avatar_file_id = Some(avatar_file_id);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn avatar_file_id(&self) -> Option<u64> {
        self.avatar_file_id
    }

    /// Nothing set. Sending this still asks the server for the current
    /// account.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.avatar_file_id.is_none()
    }
}

pub const DEFAULT_TIMELINE_COUNT: u32 = 30;
pub const MIN_TIMELINE_COUNT: u32 = 1;
pub const MAX_TIMELINE_COUNT: u32 = 100;

/// Page of the public timeline.
///
/// `since_id` returns only posts newer than that id, `max_id` only posts
/// older than it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineQuery {
    pub count: u32,
    pub since_id: Option<u64>,
    pub max_id: Option<u64>,
}

impl Default for TimelineQuery {
    fn default() -> Self {
        Self::new(DEFAULT_TIMELINE_COUNT)
    }
}

impl TimelineQuery {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            since_id: None,
            max_id: None,
        }
    }

    pub fn since_id(mut self, since_id: u64) -> Self {
        self.since_id = Some(since_id);
        self
    }

    pub fn max_id(mut self, max_id: u64) -> Self {
        self.max_id = Some(max_id);
        self
    }

    /// Check `count` against the server's page limits.
    pub fn validate(&self) -> Result<()> {
        if self.count > MAX_TIMELINE_COUNT {
            return Err(HydrobondError::Validation(format!(
                "count must be less than or equal to {}",
                MAX_TIMELINE_COUNT
            )));
        }
        if self.count < MIN_TIMELINE_COUNT {
            return Err(HydrobondError::Validation(format!(
                "count must be greater than or equal to {}",
                MIN_TIMELINE_COUNT
            )));
        }
        Ok(())
    }

    /// Query parameters in wire order: `count`, `sinceId`, `maxId`.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("count", self.count.to_string())];
        if let Some(since_id) = self.since_id {
            pairs.push(("sinceId", since_id.to_string()));
        }
        if let Some(max_id) = self.max_id {
            pairs.push(("maxId", max_id.to_string()));
        }
        pairs
    }
}
