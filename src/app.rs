use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::components::*;
use leptos_router::path;

use crate::client;
use crate::components::author_picker::AuthorPicker;
use crate::components::blog_form::BlogForm;
use crate::components::blog_list::BlogList;
use crate::components::comment_form::CommentForm;
use crate::components::notification::{Notice, Notification};
use crate::components::tag_search::TagSearch;
use crate::db::models::ResolvedBlog;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/penna.css"/>
        <Title text="Penna - Blogging Platform"/>

        // Single-route shell: the client performs no navigation.
        <Router>
            <main>
                <Routes fallback=|| view! { "Page not found." }.into_view()>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

fn confirm_delete() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this blog?")
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

#[component]
fn HomePage() -> impl IntoView {
    // The client's two pieces of transient state: the selected author, and
    // the blog currently targeted by the edit/comment modals.
    let current_author = RwSignal::new(None::<String>);
    let current_blog = RwSignal::new(None::<ResolvedBlog>);

    let blogs = RwSignal::new(Vec::<ResolvedBlog>::new());
    let notice = RwSignal::new(None::<Notice>);
    let blog_modal = RwSignal::new(false);
    let comment_modal = RwSignal::new(false);

    let notify = Callback::new(move |n: Notice| notice.set(Some(n)));

    let reload = move || {
        if let Some(author) = current_author.get_untracked() {
            spawn_local(async move {
                match client::fetch_blogs(&author).await {
                    Ok(list) => blogs.set(list),
                    Err(e) => notice.set(Some(Notice::error(format!("Failed to load blogs: {e}")))),
                }
            });
        } else {
            blogs.set(Vec::new());
        }
    };

    let on_select = Callback::new(move |author: Option<String>| {
        current_author.set(author);
        reload();
    });

    let on_new = move |_| {
        if current_author.get_untracked().is_none() {
            notice.set(Some(Notice::error("Choose an author first")));
            return;
        }
        current_blog.set(None);
        blog_modal.set(true);
    };

    let on_edit = Callback::new(move |blog: ResolvedBlog| {
        current_blog.set(Some(blog));
        blog_modal.set(true);
    });

    let on_comment = Callback::new(move |blog: ResolvedBlog| {
        current_blog.set(Some(blog));
        comment_modal.set(true);
    });

    let on_delete = Callback::new(move |id: String| {
        if !confirm_delete() {
            return;
        }
        spawn_local(async move {
            match client::delete_blog(&id).await {
                Ok(response) => {
                    notice.set(Some(Notice::success(response.message)));
                    reload();
                }
                Err(e) => notice.set(Some(Notice::error(format!("Failed to delete blog: {e}")))),
            }
        });
    });

    let on_saved = Callback::new(move |_: ()| reload());
    let on_results = Callback::new(move |list: Vec<ResolvedBlog>| blogs.set(list));

    let editing = Signal::derive(move || current_blog.get());
    let author = Signal::derive(move || current_author.get());

    view! {
        <div class="container">
            <header class="top-bar">
                <h1>"Penna"</h1>
                <TagSearch on_results=on_results notify=notify/>
            </header>
            <section class="controls">
                <AuthorPicker on_select=on_select/>
                <button class="btn primary" on:click=on_new>"New Blog"</button>
            </section>
            <BlogList blogs=blogs on_edit=on_edit on_delete=on_delete on_comment=on_comment/>
            <BlogForm open=blog_modal editing=editing author=author on_saved=on_saved notify=notify/>
            <CommentForm open=comment_modal blog=editing author=author on_saved=on_saved notify=notify/>
            <Notification notice=notice/>
        </div>
    }
}
