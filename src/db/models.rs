use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered author, stored in the `users` collection.
///
/// Field names on the wire (`emailAddress`, `_id`) are fixed by the public
/// API contract; the Rust side uses snake_case with serde renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Generated string id. `None` until the repository assigns one.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Unique across all users.
    #[serde(rename = "emailAddress")]
    pub email_address: String,
    /// Optional author profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorProfile>,
}

/// Structured author profile attached to a [`User`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// A blog, stored in the `blogs` collection with its entries and comments
/// embedded. Entries and comments have no identity of their own and are
/// destroyed with the parent document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "URL")]
    pub url: String,
    /// Id of the owning [`User`]. Referential integrity is advisory: the
    /// store performs no foreign-key checks.
    pub author: String,
    #[serde(rename = "blogEntry", default)]
    pub blog_entry: Vec<Entry>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A single entry embedded in a [`Blog`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub article: String,
    #[serde(rename = "publishDate", default = "Utc::now")]
    pub publish_date: DateTime<Utc>,
    #[serde(default)]
    pub comment: Vec<Comment>,
}

/// A comment embedded in an [`Entry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub comment: String,
    #[serde(rename = "commentDate", default = "Utc::now")]
    pub comment_date: DateTime<Utc>,
    /// Id of the commenting [`User`], if any.
    #[serde(rename = "commentBy", default, skip_serializing_if = "Option::is_none")]
    pub comment_by: Option<String>,
}

/// A [`Blog`] with its user references joined into full documents, as
/// returned by the read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedBlog {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "URL")]
    pub url: String,
    /// The full owning user. `None` when the reference dangles.
    pub author: Option<User>,
    #[serde(rename = "blogEntry", default)]
    pub blog_entry: Vec<ResolvedEntry>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// An [`Entry`] whose comment authors are joined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedEntry {
    pub article: String,
    #[serde(rename = "publishDate", default = "Utc::now")]
    pub publish_date: DateTime<Utc>,
    #[serde(default)]
    pub comment: Vec<ResolvedComment>,
}

/// A [`Comment`] whose author is joined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedComment {
    pub comment: String,
    #[serde(rename = "commentDate", default = "Utc::now")]
    pub comment_date: DateTime<Utc>,
    #[serde(rename = "commentBy", default, skip_serializing_if = "Option::is_none")]
    pub comment_by: Option<User>,
}

impl Blog {
    /// Join user references using an id lookup. Dangling references resolve
    /// to `None` rather than failing the whole read.
    pub fn resolve(self, lookup: &dyn Fn(&str) -> Option<User>) -> ResolvedBlog {
        ResolvedBlog {
            id: self.id,
            name: self.name,
            url: self.url,
            author: lookup(&self.author),
            blog_entry: self
                .blog_entry
                .into_iter()
                .map(|entry| ResolvedEntry {
                    article: entry.article,
                    publish_date: entry.publish_date,
                    comment: entry
                        .comment
                        .into_iter()
                        .map(|c| ResolvedComment {
                            comment: c.comment,
                            comment_date: c.comment_date,
                            comment_by: c.comment_by.as_deref().and_then(lookup),
                        })
                        .collect(),
                })
                .collect(),
            tags: self.tags,
        }
    }
}
