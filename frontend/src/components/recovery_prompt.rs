use yew::prelude::*;

use crate::i18n::current::recovery_prompt as t;

#[derive(Properties, PartialEq)]
pub struct RecoveryPromptProps {
    pub message: String,
    pub on_resume: Callback<()>,
    pub on_discard: Callback<()>,
}

/// Shown when the editor mounts and storage holds an interrupted draft.
#[function_component(RecoveryPrompt)]
pub fn recovery_prompt(props: &RecoveryPromptProps) -> Html {
    let on_resume = {
        let cb = props.on_resume.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_discard = {
        let cb = props.on_discard.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div
            class={classes!(
                "recovery-prompt",
                "flex",
                "flex-col",
                "gap-3",
                "rounded-2xl",
                "border",
                "border-[var(--primary)]",
                "bg-[var(--surface-alt)]",
                "px-5",
                "py-4",
                "text-sm",
                "sm:flex-row",
                "sm:items-center"
            )}
            role="alertdialog"
            aria-live="polite"
        >
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{ t::TITLE }</p>
                <p class="text-[var(--muted)]">{ props.message.clone() }</p>
            </div>
            <div class="flex gap-2">
                <button type="button" class="btn-fluent-primary" onclick={on_resume}>
                    { t::RESUME }
                </button>
                <button type="button" class="btn-fluent-secondary" onclick={on_discard}>
                    { t::DISCARD }
                </button>
            </div>
        </div>
    }
}
