use yew::prelude::*;

use crate::i18n::current::{common as common_text, footer as t};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class={classes!("border-t", "border-[var(--border)]", "py-6", "text-center", "text-sm", "text-[var(--muted)]")}>
            <p>{ format!("{} · {}", common_text::SITE_NAME, t::TAGLINE) }</p>
        </footer>
    }
}
