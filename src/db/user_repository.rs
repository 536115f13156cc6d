use async_trait::async_trait;

use crate::db::models::User;
use crate::error::AppError;

/// Repository trait for user operations.
///
/// This trait allows mocking the database layer in tests.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user, unfiltered and unprojected.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Insert a new user and return it with its generated id.
    ///
    /// Fails with a validation error when `email_address` is already taken.
    async fn create(&self, user: User) -> Result<User, AppError>;
}

/// MongoDB implementation of the UserRepository.
///
/// This is only available when the `ssr` feature is enabled (i.e., server-side).
#[cfg(feature = "ssr")]
pub struct MongoUserRepository {
    collection: mongodb::Collection<User>,
}

#[cfg(feature = "ssr")]
impl MongoUserRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }

    /// Create the unique index on `emailAddress`. Idempotent; called once at
    /// startup.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        use mongodb::bson::doc;
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        let index = IndexModel::builder()
            .keys(doc! { "emailAddress": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection
            .create_index(index)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}

#[cfg(feature = "ssr")]
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == 11000
    )
}

#[cfg(feature = "ssr")]
#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        use futures::TryStreamExt;
        use mongodb::bson::doc;

        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let mut users = Vec::new();
        while let Some(user) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            users.push(user);
        }

        Ok(users)
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        use mongodb::bson::doc;

        // Friendly pre-check; the unique index still backstops races.
        let existing = self
            .collection
            .find_one(doc! { "emailAddress": &user.email_address })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        if existing.is_some() {
            return Err(AppError::Validation(format!(
                "emailAddress '{}' is already in use",
                user.email_address
            )));
        }

        user.id = Some(uuid::Uuid::new_v4().to_string());

        self.collection.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::Validation(format!(
                    "emailAddress '{}' is already in use",
                    user.email_address
                ))
            } else {
                AppError::Database(e.to_string())
            }
        })?;

        Ok(user)
    }
}
