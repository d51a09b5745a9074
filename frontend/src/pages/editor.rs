use archfolio_shared::{ArticleCategory, DraftFormData, DraftSessionState, FormEdit, PendingImage};
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::{
    api,
    components::{
        error_banner::ErrorBanner,
        preview::ArticlePreview,
        recovery_prompt::RecoveryPrompt,
        tag_input::TagInput,
    },
    config,
    hooks::{use_draft_autosave, DraftAutosaveHandle},
    i18n::{
        current::{common as common_text, editor as t},
        fill_one,
    },
    router::Route,
    utils::format_clock,
};

#[derive(Properties, PartialEq)]
pub struct EditorPageProps {
    /// Existing unpublished article to edit; `None` starts a new one.
    #[prop_or_default]
    pub id: Option<String>,
}

fn status_text(drafts: &DraftAutosaveHandle) -> String {
    if drafts.is_degraded() {
        return t::STATUS_DEGRADED.to_string();
    }
    match drafts.state() {
        DraftSessionState::Empty | DraftSessionState::Discarded => t::STATUS_EMPTY.to_string(),
        DraftSessionState::Dirty => t::STATUS_DIRTY.to_string(),
        DraftSessionState::Saved => {
            fill_one(t::STATUS_SAVED_TEMPLATE, format_clock(drafts.snapshot().last_saved))
        },
        DraftSessionState::Recovered => t::STATUS_RECOVERED.to_string(),
        DraftSessionState::Published => t::STATUS_PUBLISHED.to_string(),
        DraftSessionState::RecoveryOffered => String::new(),
    }
}

fn field_label_classes() -> Classes {
    classes!("block", "text-sm", "font-semibold", "mb-1")
}

fn field_input_classes() -> Classes {
    classes!("w-full", "rounded-lg", "border", "border-[var(--border)]", "bg-[var(--surface)]", "px-3", "py-2")
}

#[function_component(EditorPage)]
pub fn editor_page(props: &EditorPageProps) -> Html {
    let drafts = use_draft_autosave(config::autosave_config());
    let navigator = use_navigator();
    let image_file = use_state(|| None::<File>);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let loading = use_state(|| props.id.is_some());
    let not_found = use_state(|| false);
    let show_preview = use_state(|| false);

    {
        let drafts = drafts.clone();
        let loading = loading.clone();
        let not_found = not_found.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_article(&id).await {
                        Ok(Some(article)) => {
                            drafts.hydrate(
                                DraftFormData::from_article(&article),
                                Some(article.id),
                                article.featured_image,
                            );
                        },
                        Ok(None) => not_found.set(true),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to fetch article {}: {}", id, e).into(),
                            );
                            error.set(Some(e));
                        },
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let on_title = {
        let drafts = drafts.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                drafts.update(FormEdit::Title(target.value()));
            }
        })
    };

    let on_description = {
        let drafts = drafts.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                drafts.update(FormEdit::Description(target.value()));
            }
        })
    };

    let on_content = {
        let drafts = drafts.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                drafts.update(FormEdit::Content(target.value()));
            }
        })
    };

    let on_category = {
        let drafts = drafts.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(category) = target.value().parse::<ArticleCategory>() {
                    drafts.update(FormEdit::Category(category));
                }
            }
        })
    };

    let on_tags = {
        let drafts = drafts.clone();
        Callback::from(move |tags: Vec<String>| drafts.update(FormEdit::Tags(tags)))
    };

    let on_image = {
        let drafts = drafts.clone();
        let image_file = image_file.clone();
        let error = error.clone();
        Callback::from(move |event: Event| {
            let Some(file) = event
                .target_dyn_into::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };

            drafts.update(FormEdit::PendingImage(Some(PendingImage {
                file_name: file.name(),
                size_bytes: file.size() as u64,
                mime_type: file.type_(),
            })));
            image_file.set(Some(file.clone()));
            drafts.set_upload_state(true, 0, None);

            let drafts = drafts.clone();
            let image_file = image_file.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let on_progress = {
                    let drafts = drafts.clone();
                    Callback::from(move |pct: u8| drafts.set_upload_state(true, pct, None))
                };
                match api::upload_image(&file, on_progress).await {
                    Ok(url) => {
                        drafts.set_upload_state(false, 100, Some(url));
                        drafts.update(FormEdit::PendingImage(None));
                        image_file.set(None);
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Image upload failed: {}", e).into());
                        drafts.set_upload_state(false, 0, None);
                        error.set(Some(e));
                    },
                }
            });
        })
    };

    let save = {
        let drafts = drafts.clone();
        let saving = saving.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        Callback::from(move |publish: bool| {
            let snapshot = drafts.snapshot();
            if snapshot.form_data.title.trim().is_empty() {
                error.set(Some(t::TITLE_REQUIRED.to_string()));
                return;
            }
            if *saving || snapshot.is_uploading {
                return;
            }
            saving.set(true);

            let drafts = drafts.clone();
            let saving = saving.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let input = snapshot.to_article_input(publish);
                match api::save_article(snapshot.id.as_deref(), &input).await {
                    Ok(article) => {
                        drafts.mark_published(Some(article.id.clone()));
                        if publish {
                            if let Some(navigator) = navigator.as_ref() {
                                navigator.push(&Route::Home);
                            }
                        } else if snapshot.id.is_none() {
                            if let Some(navigator) = navigator.as_ref() {
                                navigator.replace(&Route::EditArticle {
                                    id: article.id,
                                });
                            }
                        } else {
                            drafts.hydrate(
                                DraftFormData::from_article(&article),
                                Some(article.id),
                                article.featured_image,
                            );
                        }
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to save article: {}", e).into());
                        error.set(Some(e));
                    },
                }
                saving.set(false);
            });
        })
    };

    let on_save_draft = {
        let save = save.clone();
        Callback::from(move |_: MouseEvent| save.emit(false))
    };
    let on_publish = {
        let save = save.clone();
        Callback::from(move |_: MouseEvent| save.emit(true))
    };
    let on_reset = {
        let drafts = drafts.clone();
        let image_file = image_file.clone();
        Callback::from(move |_: MouseEvent| {
            drafts.reset();
            image_file.set(None);
        })
    };
    let on_resume = {
        let drafts = drafts.clone();
        Callback::from(move |_: ()| {
            drafts.recover();
        })
    };
    let on_discard = {
        let drafts = drafts.clone();
        Callback::from(move |_: ()| drafts.discard())
    };
    let toggle_preview = {
        let show_preview = show_preview.clone();
        Callback::from(move |_: MouseEvent| show_preview.set(!*show_preview))
    };
    let clear_error = {
        let error = error.clone();
        Callback::from(move |_: ()| error.set(None))
    };

    if *loading {
        return html! {
            <main class="mx-auto max-w-3xl px-4 py-16 text-center" role="status" aria-busy="true">
                <p class="text-[var(--muted)]">{ common_text::LOADING }</p>
            </main>
        };
    }
    if *not_found {
        return html! {
            <main class="mx-auto max-w-3xl px-4 py-16 text-center">
                <p>{ t::NOT_FOUND }</p>
            </main>
        };
    }

    let snapshot = drafts.snapshot();
    let form = &snapshot.form_data;
    let recovery = if drafts.state() == DraftSessionState::RecoveryOffered {
        drafts.recovery_message()
    } else {
        None
    };
    let heading = if props.id.is_some() { t::EDIT_TITLE } else { t::NEW_TITLE };
    let busy = *saving || snapshot.is_uploading;

    html! {
        <main class={classes!("mx-auto", "max-w-3xl", "px-4", "py-8", "space-y-6")}>
            <div class="flex items-baseline justify-between gap-4">
                <h1 class="text-3xl font-bold">{ heading }</h1>
                <span class="text-sm text-[var(--muted)]" aria-live="polite">{ status_text(&drafts) }</span>
            </div>

            if let Some(message) = (*error).clone() {
                <ErrorBanner message={message} on_close={clear_error} />
            }

            if let Some(message) = recovery {
                <RecoveryPrompt message={message} on_resume={on_resume} on_discard={on_discard} />
            }

            <label class="block">
                <span class={field_label_classes()}>{ t::FIELD_TITLE }</span>
                <input type="text" class={field_input_classes()} value={form.title.clone()} oninput={on_title} />
            </label>

            <label class="block">
                <span class={field_label_classes()}>{ t::FIELD_DESCRIPTION }</span>
                <textarea rows="2" class={field_input_classes()} value={form.description.clone()} oninput={on_description} />
            </label>

            <div class="grid gap-4 sm:grid-cols-2">
                <label class="block">
                    <span class={field_label_classes()}>{ t::FIELD_CATEGORY }</span>
                    <select class={field_input_classes()} onchange={on_category}>
                        { for ArticleCategory::ALL.iter().map(|category| html! {
                            <option value={category.slug()} selected={*category == form.category}>
                                { category.label() }
                            </option>
                        }) }
                    </select>
                </label>
                <div class="block">
                    <span class={field_label_classes()}>{ t::FIELD_TAGS }</span>
                    <TagInput tags={form.tags.clone()} on_change={on_tags} />
                </div>
            </div>

            <label class="block">
                <span class={field_label_classes()}>{ t::FIELD_IMAGE }</span>
                <input type="file" accept="image/*" onchange={on_image} disabled={snapshot.is_uploading} />
                if snapshot.is_uploading {
                    <div class="mt-2 h-2 w-full rounded-full bg-[var(--surface-alt)]">
                        <div
                            class="h-2 rounded-full bg-[var(--primary)] transition-all"
                            style={format!("width: {}%;", snapshot.upload_progress)}
                        />
                    </div>
                    <p class="mt-1 text-xs text-[var(--muted)]">
                        { fill_one(t::UPLOADING_TEMPLATE, snapshot.upload_progress) }
                    </p>
                } else if let Some(url) = snapshot.uploaded_image_url.clone() {
                    <div class="mt-2 flex items-center gap-3">
                        <img src={url} alt="" class="h-16 w-24 rounded object-cover" />
                        <span class="text-xs text-[var(--muted)]">{ t::UPLOADED }</span>
                    </div>
                } else if let Some(file) = (*image_file).clone() {
                    <p class="mt-1 text-xs text-[var(--muted)]">{ file.name() }</p>
                }
            </label>

            <div class="block">
                <div class="mb-1 flex items-center justify-between">
                    <span class={field_label_classes()}>{ t::FIELD_CONTENT }</span>
                    <button type="button" class="text-xs underline" onclick={toggle_preview}>{ t::PREVIEW }</button>
                </div>
                if *show_preview {
                    <ArticlePreview content={form.content.clone()} />
                } else {
                    <textarea rows="18" class={field_input_classes()} value={form.content.clone()} oninput={on_content} />
                }
            </div>

            <div class="flex flex-wrap gap-3">
                <button type="button" class="btn-fluent-primary" onclick={on_publish} disabled={busy}>
                    { if *saving { t::SAVING } else { t::PUBLISH } }
                </button>
                <button type="button" class="btn-fluent-secondary" onclick={on_save_draft} disabled={busy}>
                    { t::SAVE_DRAFT }
                </button>
                <button type="button" class="btn-fluent-secondary ml-auto" onclick={on_reset} disabled={busy}>
                    { t::RESET }
                </button>
            </div>

            if drafts.debug_overlay() {
                <section class="rounded-lg border border-dashed border-[var(--border)] p-3 text-xs">
                    <h2 class="font-semibold mb-2">{ t::DEBUG_HEADING }</h2>
                    <pre class="whitespace-pre-wrap break-all">
                        { drafts.stored_raw().unwrap_or_else(|| t::DEBUG_EMPTY.to_string()) }
                    </pre>
                </section>
            }
        </main>
    }
}
