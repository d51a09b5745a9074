use yew::prelude::*;

use crate::i18n::current::not_found as t;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="mx-auto max-w-3xl px-4 py-16 text-center">
            <h2 class="text-2xl font-bold">{ t::TITLE }</h2>
            <p class="mt-2 text-[var(--muted)]">{ t::BODY }</p>
        </main>
    }
}
