use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Application, File, User};

/// Post as returned by the API.
///
/// `files` follows the order of the file ids the post was created with and
/// is empty for text-only posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub text: String,
    pub user: User,
    pub application: Application,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub files: Vec<File>,
}
