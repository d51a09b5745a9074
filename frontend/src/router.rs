use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "mock"))]
    #[at("/")]
    Home,
    #[cfg(feature = "mock")]
    #[at("/archfolio/")]
    Home,

    #[cfg(not(feature = "mock"))]
    #[at("/write")]
    NewArticle,
    #[cfg(feature = "mock")]
    #[at("/archfolio/write")]
    NewArticle,

    #[cfg(not(feature = "mock"))]
    #[at("/write/:id")]
    EditArticle { id: String },
    #[cfg(feature = "mock")]
    #[at("/archfolio/write/:id")]
    EditArticle { id: String },

    #[not_found]
    #[cfg(not(feature = "mock"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "mock")]
    #[at("/archfolio/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::NewArticle => html! { <pages::editor::EditorPage /> },
        Route::EditArticle {
            id,
        } => {
            html! { <pages::editor::EditorPage key={id.clone()} id={Some(id.clone())} /> }
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <div class="flex-1 pt-[var(--space-sm)]">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
