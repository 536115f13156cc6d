use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::client;
use crate::components::notification::Notice;
use crate::db::models::{Blog, Entry, ResolvedBlog};

fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Modal form for creating a blog or editing an existing one.
///
/// Submission sends a full Blog document: a PUT replaces the stored document
/// wholesale (fresh entry, empty comments), matching the server's
/// full-replace semantics.
#[component]
pub fn BlogForm(
    open: RwSignal<bool>,
    /// The blog being edited; `None` means the form creates a new one.
    #[prop(into)] editing: Signal<Option<ResolvedBlog>>,
    #[prop(into)] author: Signal<Option<String>>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] notify: Callback<Notice>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let article = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());

    // Prefill from the blog being edited, or reset for a fresh create.
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        match editing.get() {
            Some(blog) => {
                name.set(blog.name);
                url.set(blog.url);
                article.set(
                    blog.blog_entry
                        .first()
                        .map(|e| e.article.clone())
                        .unwrap_or_default(),
                );
                tags.set(blog.tags.join(", "));
            }
            None => {
                name.set(String::new());
                url.set(String::new());
                article.set(String::new());
                tags.set(String::new());
            }
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(author_id) = author.get_untracked() else {
            notify.run(Notice::error("Choose an author before saving"));
            return;
        };
        let blog = Blog {
            id: None,
            name: name.get_untracked(),
            url: url.get_untracked(),
            author: author_id,
            blog_entry: vec![Entry {
                article: article.get_untracked(),
                publish_date: Utc::now(),
                comment: vec![],
            }],
            tags: parse_tags(&tags.get_untracked()),
        };
        let editing_id = editing.get_untracked().and_then(|b| b.id);
        spawn_local(async move {
            let result = match editing_id.as_deref() {
                Some(id) => client::update_blog(id, &blog).await.map(|_| ()),
                None => client::create_blog(&blog).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    open.set(false);
                    notify.run(Notice::success("Blog saved successfully"));
                    on_saved.run(());
                }
                Err(e) => notify.run(Notice::error(format!("Failed to save blog: {e}"))),
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div
                class="modal-backdrop"
                on:click=move |ev| {
                    // only a click on the backdrop itself closes the modal
                    if ev.target() == ev.current_target() {
                        open.set(false);
                    }
                }
            >
                <div class="modal">
                    <h2>{move || if editing.get().is_some() { "Edit Blog" } else { "New Blog" }}</h2>
                    <form on:submit=submit>
                        <label>
                            "Name"
                            <input
                                type="text"
                                prop:value=name
                                on:input=move |ev| name.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "URL"
                            <input
                                type="text"
                                prop:value=url
                                on:input=move |ev| url.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "Article"
                            <textarea
                                prop:value=article
                                on:input=move |ev| article.set(event_target_value(&ev))
                                required
                            ></textarea>
                        </label>
                        <label>
                            "Tags (comma separated)"
                            <input
                                type="text"
                                prop:value=tags
                                on:input=move |ev| tags.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="modal-actions">
                            <button type="button" class="btn secondary" on:click=move |_| open.set(false)>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn primary">"Save"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
