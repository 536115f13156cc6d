#![recursion_limit = "256"]

pub mod app;
pub mod client;
pub mod error;
pub mod components {
    pub mod author_picker;
    pub mod blog_form;
    pub mod blog_list;
    pub mod comment_form;
    pub mod notification;
    pub mod tag_search;
}
pub mod api {
    pub mod blogs;
    pub mod errors;
    pub mod users;
}
pub mod db {
    pub mod blog_repository;
    pub mod models;
    pub mod user_repository;
}
#[cfg(feature = "ssr")]
pub mod seeder;
#[cfg(feature = "ssr")]
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
