use leptos::prelude::*;

use crate::client;

/// Dropdown of all registered authors, loaded from `GET /api/users`.
///
/// Emits `Some(user_id)` on selection and `None` when the placeholder is
/// chosen again.
#[component]
pub fn AuthorPicker(#[prop(into)] on_select: Callback<Option<String>>) -> impl IntoView {
    let authors = LocalResource::new(move || async move { client::fetch_users().await });

    view! {
        <div class="author-picker">
            <label for="author-select">"Author: "</label>
            <Suspense fallback=|| view! { <span>"Loading authors..."</span> }>
                {move || authors.get().map(|res| {
                    match &res {
                        Ok(users) => {
                            let users = users.clone();
                            view! {
                                <select
                                    id="author-select"
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        on_select.run((!value.is_empty()).then_some(value));
                                    }
                                >
                                    <option value="">"Choose an author..."</option>
                                    {users.into_iter().map(|user| view! {
                                        <option value=user.id.unwrap_or_default()>{user.name}</option>
                                    }).collect_view()}
                                </select>
                            }.into_any()
                        }
                        Err(e) => {
                            let e = e.clone();
                            view! { <span class="error">"Failed to load authors: " {e}</span> }.into_any()
                        }
                    }
                })}
            </Suspense>
        </div>
    }
}
