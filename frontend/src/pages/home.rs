use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::home as t, router::Route};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <main class={classes!("mx-auto", "max-w-3xl", "px-4", "py-20", "space-y-6")}>
            <h1 class={classes!("text-4xl", "font-bold", "leading-tight")}>{ t::HEADLINE }</h1>
            <p class={classes!("text-lg", "text-[var(--muted)]")}>{ t::SUBHEAD }</p>
            <Link<Route> to={Route::NewArticle} classes={classes!("btn-fluent-primary", "inline-flex")}>
                { t::START_WRITING }
            </Link<Route>>
        </main>
    }
}
