//! Response types
//!
//! Snapshots of server resources, deserialized from the API's camelCase JSON.
//! Timestamps are ISO-8601 strings on the wire and `DateTime<Utc>` here.

mod application;
mod file;
mod post;
mod user;

pub use application::Application;
pub use file::{File, FileVariant};
pub use post::Post;
pub use user::User;

#[cfg(test)]
pub(crate) mod fixtures {
    /// A post by `user` from the `hydrobond` application with no attachments.
    pub const POST_JSON: &str = r#"{
        "id": 1,
        "text": "text",
        "user": {
            "avatarFile": null,
            "id": 1,
            "name": "user",
            "screenName": "user",
            "postsCount": 1,
            "createdAt": "1970-01-01T00:00:00.000Z",
            "updatedAt": "1970-01-01T00:00:00.000Z"
        },
        "application": { "id": 1, "name": "hydrobond" },
        "createdAt": "1970-01-01T00:00:00.000Z",
        "updatedAt": "1970-01-01T00:00:00.000Z",
        "files": []
    }"#;

    pub const AVATAR_JSON: &str = r#"{
        "id": 1,
        "name": "Avatar",
        "variants": [
            {
                "id": 101,
                "score": 100,
                "extension": "webp",
                "type": "image",
                "size": 0,
                "url": "https://example.com/1/101/image.webp",
                "mime": "image/webp"
            }
        ]
    }"#;
}
