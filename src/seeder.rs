use std::collections::HashMap;

use chrono::Utc;

use crate::db::blog_repository::BlogRepository;
use crate::db::models::{AuthorProfile, Blog, Comment, Entry, User};
use crate::db::user_repository::UserRepository;

/// Seed the demo data set. Idempotent: users are matched by email, blogs by
/// name, and existing records are left untouched.
pub async fn seed_demo_data(users: &dyn UserRepository, blogs: &dyn BlogRepository) {
    tracing::info!("Starting demo data seeding...");

    let demo_users = [
        ("John Doe", "john@example.com", "Tech enthusiast and blogger"),
        ("Jane Smith", "jane@example.com", "Professional writer and editor"),
        ("Bob Wilson", "bob@example.com", "Travel blogger and photographer"),
    ];

    let existing = match users.list().await {
        Ok(list) => list,
        Err(e) => {
            tracing::error!("Failed to list users, skipping seeding: {}", e);
            return;
        }
    };

    let mut ids: HashMap<&str, String> = HashMap::new();
    for (name, email, bio) in demo_users {
        if let Some(user) = existing.iter().find(|u| u.email_address == email) {
            tracing::info!("User '{}' already exists, skipping.", email);
            if let Some(id) = user.id.clone() {
                ids.insert(email, id);
            }
            continue;
        }

        let user = User {
            id: None,
            name: name.to_string(),
            email_address: email.to_string(),
            author: Some(AuthorProfile {
                bio: Some(bio.to_string()),
            }),
        };
        match users.create(user).await {
            Ok(created) => {
                tracing::info!("Seeded user '{}'.", email);
                if let Some(id) = created.id {
                    ids.insert(email, id);
                }
            }
            Err(e) => tracing::error!("Failed to seed user '{}': {}", email, e),
        }
    }

    let existing_blogs = match blogs.list(None).await {
        Ok(list) => list,
        Err(e) => {
            tracing::error!("Failed to list blogs, skipping blog seeding: {}", e);
            return;
        }
    };

    let mut demo_blogs = Vec::new();
    if let Some(author) = ids.get("john@example.com") {
        demo_blogs.push(Blog {
            id: None,
            name: "Tech Trends 2024".to_string(),
            url: "https://blog.example.com/tech-trends".to_string(),
            author: author.clone(),
            blog_entry: vec![Entry {
                article: "Latest trends in technology...".to_string(),
                publish_date: Utc::now(),
                comment: vec![Comment {
                    comment: "Great insights!".to_string(),
                    comment_date: Utc::now(),
                    comment_by: ids.get("jane@example.com").cloned(),
                }],
            }],
            tags: vec!["technology".to_string(), "trends".to_string()],
        });
    }
    if let Some(author) = ids.get("bob@example.com") {
        demo_blogs.push(Blog {
            id: None,
            name: "Travel Adventures".to_string(),
            url: "https://blog.example.com/travel".to_string(),
            author: author.clone(),
            blog_entry: vec![Entry {
                article: "My journey through Europe...".to_string(),
                publish_date: Utc::now(),
                comment: vec![Comment {
                    comment: "Awesome travel tips!".to_string(),
                    comment_date: Utc::now(),
                    comment_by: ids.get("john@example.com").cloned(),
                }],
            }],
            tags: vec!["travel".to_string(), "adventure".to_string()],
        });
    }

    for blog in demo_blogs {
        if existing_blogs.iter().any(|b| b.name == blog.name) {
            tracing::info!("Blog '{}' already exists, skipping.", blog.name);
            continue;
        }
        match blogs.create(blog).await {
            Ok(created) => tracing::info!("Seeded blog '{}'.", created.name),
            Err(e) => tracing::error!("Failed to seed blog: {}", e),
        }
    }

    tracing::info!("Demo data seeding completed.");
}
