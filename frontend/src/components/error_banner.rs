use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::error_banner as t;

const AUTO_DISMISS_MS: u32 = 6000;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    pub on_close: Callback<()>,
}

/// Inline error for failed uploads and saves. Closes itself after a few
/// seconds; a new message restarts the countdown.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let timeout = {
        let on_close = props.on_close.clone();
        use_timeout(move || on_close.emit(()), AUTO_DISMISS_MS)
    };

    {
        let timeout = timeout.clone();
        use_effect_with(props.message.clone(), move |_| {
            timeout.reset();
        });
    }

    let on_dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class={classes!(
                "error-banner",
                "flex",
                "items-start",
                "gap-3",
                "rounded-2xl",
                "border",
                "border-red-500/40",
                "bg-red-500/10",
                "px-5",
                "py-4",
                "text-sm"
            )}
            role="alert"
            aria-live="assertive"
        >
            <div class="flex-1 space-y-1">
                <p class="font-semibold">{ t::TITLE }</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class="h-8 w-8 rounded-full hover:bg-black/10 dark:hover:bg-white/15"
                aria-label={t::CLOSE_ARIA}
                onclick={on_dismiss}
            >
                {"×"}
            </button>
        </div>
    }
}
