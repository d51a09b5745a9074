//! Archfolio web frontend: marketing pages and the article editor.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
#[cfg(feature = "mock")]
mod models;
mod pages;
mod router;
mod storage;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
