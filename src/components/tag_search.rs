use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::client;
use crate::components::notification::Notice;
use crate::db::models::ResolvedBlog;

/// Tag filter box. Results replace the rendered blog list regardless of the
/// currently selected author.
#[component]
pub fn TagSearch(
    #[prop(into)] on_results: Callback<Vec<ResolvedBlog>>,
    #[prop(into)] notify: Callback<Notice>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());

    let search = move |_| {
        let tag = query.get_untracked().trim().to_string();
        if tag.is_empty() {
            return;
        }
        spawn_local(async move {
            match client::fetch_blogs_by_tag(&tag).await {
                Ok(blogs) => {
                    notify.run(Notice::success(format!(
                        "Found {} blogs with tag \"{}\"",
                        blogs.len(),
                        tag
                    )));
                    on_results.run(blogs);
                }
                Err(e) => notify.run(Notice::error(format!("Failed to search blogs by tag: {e}"))),
            }
        });
    };

    view! {
        <div class="tag-search">
            <input
                type="text"
                placeholder="Search by tag..."
                prop:value=query
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button class="btn secondary" on:click=search>"Search"</button>
        </div>
    }
}
