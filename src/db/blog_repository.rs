use async_trait::async_trait;

use crate::db::models::{Blog, Comment, ResolvedBlog};
use crate::error::AppError;

/// Repository trait for blog operations.
///
/// This trait allows mocking the database layer in tests.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// List blogs, optionally restricted to one author id, with user
    /// references joined into full documents.
    async fn list(&self, author: Option<&str>) -> Result<Vec<ResolvedBlog>, AppError>;

    /// Insert a new blog and return it with its generated id. References are
    /// returned raw, not joined.
    async fn create(&self, blog: Blog) -> Result<Blog, AppError>;

    /// Full-document replace by id. Fails with a not-found error when no
    /// blog matches.
    async fn replace(&self, id: &str, blog: Blog) -> Result<Blog, AppError>;

    /// Delete by id. Idempotent: deleting a missing id is a success.
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Append a comment to the first entry of the blog and return the
    /// post-update document.
    ///
    /// Fails with a not-found error when the blog does not exist, and with a
    /// validation error when the blog has no entries.
    async fn append_comment(&self, id: &str, comment: Comment) -> Result<Blog, AppError>;

    /// List blogs whose `tags` contains `tag` (exact, case-sensitive), with
    /// user references joined.
    async fn list_by_tag(&self, tag: &str) -> Result<Vec<ResolvedBlog>, AppError>;
}

/// MongoDB implementation of the BlogRepository.
///
/// Holds both the `blogs` collection and the `users` collection: read
/// endpoints join user references into full documents server-side.
#[cfg(feature = "ssr")]
pub struct MongoBlogRepository {
    blogs: mongodb::Collection<Blog>,
    users: mongodb::Collection<crate::db::models::User>,
}

#[cfg(feature = "ssr")]
impl MongoBlogRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            blogs: db.collection("blogs"),
            users: db.collection("users"),
        }
    }

    async fn find_blogs(
        &self,
        filter: mongodb::bson::Document,
    ) -> Result<Vec<Blog>, AppError> {
        use futures::TryStreamExt;

        let mut cursor = self
            .blogs
            .find(filter)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let mut blogs = Vec::new();
        while let Some(blog) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            blogs.push(blog);
        }

        Ok(blogs)
    }

    /// Join author and comment-author references for a batch of blogs with a
    /// single `$in` query against the users collection.
    async fn resolve(&self, blogs: Vec<Blog>) -> Result<Vec<ResolvedBlog>, AppError> {
        use futures::TryStreamExt;
        use mongodb::bson::doc;
        use std::collections::HashMap;

        let mut ids: Vec<&str> = blogs.iter().map(|b| b.author.as_str()).collect();
        for blog in &blogs {
            for entry in &blog.blog_entry {
                for comment in &entry.comment {
                    if let Some(by) = comment.comment_by.as_deref() {
                        ids.push(by);
                    }
                }
            }
        }
        ids.sort_unstable();
        ids.dedup();

        let mut users = HashMap::new();
        if !ids.is_empty() {
            let mut cursor = self
                .users
                .find(doc! { "_id": { "$in": &ids } })
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            while let Some(user) = cursor
                .try_next()
                .await
                .map_err(|e| AppError::Database(e.to_string()))?
            {
                if let Some(id) = user.id.clone() {
                    users.insert(id, user);
                }
            }
        }

        Ok(blogs
            .into_iter()
            .map(|blog| blog.resolve(&|id| users.get(id).cloned()))
            .collect())
    }
}

#[cfg(feature = "ssr")]
#[async_trait]
impl BlogRepository for MongoBlogRepository {
    async fn list(&self, author: Option<&str>) -> Result<Vec<ResolvedBlog>, AppError> {
        use mongodb::bson::doc;

        let filter = match author {
            Some(author) => doc! { "author": author },
            None => doc! {},
        };

        let blogs = self.find_blogs(filter).await?;
        self.resolve(blogs).await
    }

    async fn create(&self, mut blog: Blog) -> Result<Blog, AppError> {
        blog.id = Some(uuid::Uuid::new_v4().to_string());

        self.blogs
            .insert_one(&blog)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(blog)
    }

    async fn replace(&self, id: &str, mut blog: Blog) -> Result<Blog, AppError> {
        use mongodb::bson::doc;
        use mongodb::options::{FindOneAndReplaceOptions, ReturnDocument};

        // The replacement keeps the path id regardless of what the body carried.
        blog.id = Some(id.to_string());

        let options = FindOneAndReplaceOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .blogs
            .find_one_and_replace(doc! { "_id": id }, &blog)
            .with_options(options)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        updated.ok_or_else(|| AppError::NotFound(format!("Blog '{}' not found", id)))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        use mongodb::bson::doc;

        // delete-if-exists: a missing id deletes nothing and is not an error
        self.blogs
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    async fn append_comment(&self, id: &str, comment: Comment) -> Result<Blog, AppError> {
        use mongodb::bson::doc;
        use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

        let blog = self
            .blogs
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .ok_or_else(|| AppError::NotFound(format!("Blog '{}' not found", id)))?;

        if blog.blog_entry.is_empty() {
            return Err(AppError::Validation(
                "Blog has no entries to comment on".to_string(),
            ));
        }

        let comment_bson = mongodb::bson::to_bson(&comment)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .blogs
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$push": { "blogEntry.0.comment": comment_bson } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        // The blog can vanish between the check and the push.
        updated.ok_or_else(|| AppError::NotFound(format!("Blog '{}' not found", id)))
    }

    async fn list_by_tag(&self, tag: &str) -> Result<Vec<ResolvedBlog>, AppError> {
        use mongodb::bson::doc;

        let blogs = self.find_blogs(doc! { "tags": tag }).await?;
        self.resolve(blogs).await
    }
}
