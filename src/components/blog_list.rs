use leptos::prelude::*;

use crate::db::models::ResolvedBlog;

/// The list of blog cards for the current selection.
#[component]
pub fn BlogList(
    #[prop(into)] blogs: Signal<Vec<ResolvedBlog>>,
    #[prop(into)] on_edit: Callback<ResolvedBlog>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_comment: Callback<ResolvedBlog>,
) -> impl IntoView {
    view! {
        <div class="blog-list">
            <For
                each=move || blogs.get()
                key=|blog| blog.id.clone().unwrap_or_default()
                children=move |blog| view! {
                    <BlogCard blog=blog on_edit=on_edit on_delete=on_delete on_comment=on_comment/>
                }
            />
        </div>
    }
}

/// One blog card: title, link, the first entry's article, tags, comments,
/// and the edit/delete/comment actions. Actions hand the blog (or its id)
/// back to the parent through callbacks.
#[component]
pub fn BlogCard(
    blog: ResolvedBlog,
    #[prop(into)] on_edit: Callback<ResolvedBlog>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_comment: Callback<ResolvedBlog>,
) -> impl IntoView {
    let id = blog.id.clone().unwrap_or_default();
    let article = blog
        .blog_entry
        .first()
        .map(|e| e.article.clone())
        .unwrap_or_else(|| "No content available".to_string());
    let comments = blog
        .blog_entry
        .first()
        .map(|e| e.comment.clone())
        .unwrap_or_default();

    let edit_blog = blog.clone();
    let comment_blog = blog.clone();

    view! {
        <div class="blog-card">
            <div class="blog-header">
                <h3>{blog.name.clone()}</h3>
                <div class="blog-actions">
                    <button class="btn secondary" on:click=move |_| on_edit.run(edit_blog.clone())>
                        "Edit"
                    </button>
                    <button
                        class="btn secondary"
                        on:click={
                            let id = id.clone();
                            move |_| on_delete.run(id.clone())
                        }
                    >
                        "Delete"
                    </button>
                </div>
            </div>
            <a href=blog.url.clone() target="_blank">{blog.url.clone()}</a>
            <div class="blog-content">{article}</div>
            <div class="blog-tags">
                {blog.tags.iter().map(|tag| view! {
                    <span class="tag">{tag.clone()}</span>
                }).collect_view()}
            </div>
            <div class="comments-section">
                <h4>"Comments"</h4>
                {if comments.is_empty() {
                    view! { <p>"No comments yet"</p> }.into_any()
                } else {
                    comments.into_iter().map(|c| {
                        let byline = match &c.comment_by {
                            Some(user) => format!(
                                "{}, {}",
                                user.name,
                                c.comment_date.format("%Y-%m-%d %H:%M")
                            ),
                            None => c.comment_date.format("%Y-%m-%d %H:%M").to_string(),
                        };
                        view! {
                            <div class="comment">
                                <p>{c.comment.clone()}</p>
                                <small>{byline}</small>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
                <button class="btn primary" on:click=move |_| on_comment.run(comment_blog.clone())>
                    "Add Comment"
                </button>
            </div>
        </div>
    }
}
