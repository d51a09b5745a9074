use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    config::asset_path,
    i18n::current::{common as common_text, header as t},
    router::Route,
};

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();
    let is_writing = matches!(route, Some(Route::NewArticle | Route::EditArticle { .. }));

    let nav_link_classes = |active: bool| {
        classes!(
            "px-3",
            "py-2",
            "rounded-lg",
            "text-sm",
            "transition-colors",
            "duration-100",
            "hover:bg-[var(--surface-alt)]",
            if active { "text-[var(--primary)] font-semibold" } else { "text-[var(--text)]" }
        )
    };

    html! {
        <header
            class={classes!(
                "sticky",
                "top-0",
                "z-50",
                "border-b",
                "border-[var(--border)]",
                "bg-[var(--surface)]",
                "[backdrop-filter:blur(20px)]"
            )}
        >
            <div class={classes!("mx-auto", "flex", "max-w-5xl", "items-center", "gap-4", "px-4", "py-3")}>
                <Link<Route> to={Route::Home} classes={classes!("flex", "items-center", "gap-2", "font-bold")}>
                    <img src={asset_path("static/logo.svg")} alt={t::LOGO_ALT} class="h-8 w-8" />
                    <span>{ common_text::SITE_NAME }</span>
                </Link<Route>>
                <nav class="ml-auto flex items-center gap-1" aria-label={t::NAV_ARIA}>
                    <Link<Route> to={Route::Home} classes={nav_link_classes(route == Some(Route::Home))}>
                        { common_text::HOME }
                    </Link<Route>>
                    <Link<Route> to={Route::NewArticle} classes={nav_link_classes(is_writing)}>
                        { common_text::WRITE }
                    </Link<Route>>
                </nav>
            </div>
        </header>
    }
}
