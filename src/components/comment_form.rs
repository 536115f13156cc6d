use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::client;
use crate::components::notification::Notice;
use crate::db::models::{Comment, ResolvedBlog};

/// Modal form for appending a comment to the target blog's first entry.
///
/// The comment is attributed to the currently selected author, if any.
#[component]
pub fn CommentForm(
    open: RwSignal<bool>,
    /// The blog being commented on.
    #[prop(into)] blog: Signal<Option<ResolvedBlog>>,
    #[prop(into)] author: Signal<Option<String>>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] notify: Callback<Notice>,
) -> impl IntoView {
    let text = RwSignal::new(String::new());

    Effect::new(move |_| {
        if open.get() {
            text.set(String::new());
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(blog_id) = blog.get_untracked().and_then(|b| b.id) else {
            notify.run(Notice::error("No blog selected"));
            return;
        };
        let comment = Comment {
            comment: text.get_untracked(),
            comment_date: Utc::now(),
            comment_by: author.get_untracked(),
        };
        spawn_local(async move {
            match client::add_comment(&blog_id, &comment).await {
                Ok(_) => {
                    open.set(false);
                    notify.run(Notice::success("Comment added successfully"));
                    on_saved.run(());
                }
                Err(e) => notify.run(Notice::error(format!("Failed to add comment: {e}"))),
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div
                class="modal-backdrop"
                on:click=move |ev| {
                    if ev.target() == ev.current_target() {
                        open.set(false);
                    }
                }
            >
                <div class="modal">
                    <h2>"Add Comment"</h2>
                    <form on:submit=submit>
                        <label>
                            "Comment"
                            <textarea
                                prop:value=text
                                on:input=move |ev| text.set(event_target_value(&ev))
                                required
                            ></textarea>
                        </label>
                        <div class="modal-actions">
                            <button type="button" class="btn secondary" on:click=move |_| open.set(false)>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn primary">"Post"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
