use archfolio_shared::tags::{merge_tags, MAX_TAGS};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::i18n::{current::tag_input as t, fill_one};

#[derive(Properties, PartialEq)]
pub struct TagInputProps {
    pub tags: Vec<String>,
    pub on_change: Callback<Vec<String>>,
}

/// Hashtag entry: typed text becomes tags on Enter, comma, or blur.
#[function_component(TagInput)]
pub fn tag_input(props: &TagInputProps) -> Html {
    let pending = use_state(String::new);
    let at_limit = props.tags.len() >= MAX_TAGS;

    let commit = {
        let pending = pending.clone();
        let tags = props.tags.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |raw: String| {
            if raw.trim().is_empty() {
                return;
            }
            let merged = merge_tags(&tags, &raw);
            if merged != tags {
                on_change.emit(merged);
            }
            pending.set(String::new());
        })
    };

    let on_input = {
        let pending = pending.clone();
        let commit = commit.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                let value = target.value();
                if value.ends_with(',') {
                    commit.emit(value);
                } else {
                    pending.set(value);
                }
            }
        })
    };

    let on_keydown = {
        let commit = commit.clone();
        let pending = pending.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                commit.emit((*pending).clone());
            }
        })
    };

    let on_blur = {
        let commit = commit.clone();
        let pending = pending.clone();
        Callback::from(move |_: FocusEvent| commit.emit((*pending).clone()))
    };

    let chips = props.tags.iter().enumerate().map(|(index, tag)| {
        let on_remove = {
            let tags = props.tags.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = tags.clone();
                next.remove(index);
                on_change.emit(next);
            })
        };
        html! {
            <span
                key={tag.clone()}
                class={classes!(
                    "inline-flex",
                    "items-center",
                    "gap-1",
                    "rounded-full",
                    "bg-[var(--surface-alt)]",
                    "px-3",
                    "py-1",
                    "text-xs"
                )}
            >
                { format!("#{tag}") }
                <button
                    type="button"
                    class="text-[var(--muted)] hover:text-[var(--text)]"
                    aria-label={fill_one(t::REMOVE_ARIA_TEMPLATE, tag)}
                    onclick={on_remove}
                >
                    {"×"}
                </button>
            </span>
        }
    });

    html! {
        <div class={classes!("flex", "flex-wrap", "items-center", "gap-2")}>
            { for chips }
            if at_limit {
                <span class="text-xs text-[var(--muted)]">{ t::LIMIT_REACHED }</span>
            } else {
                <input
                    type="text"
                    class={classes!("flex-1", "min-w-[12rem]", "rounded-lg", "border", "border-[var(--border)]", "px-3", "py-2")}
                    placeholder={t::PLACEHOLDER}
                    value={(*pending).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    onblur={on_blur}
                />
            }
        </div>
    }
}
