use web_sys::Element;
use yew::prelude::*;

use crate::utils::markdown_to_html;

#[derive(Properties, PartialEq)]
pub struct ArticlePreviewProps {
    pub content: AttrValue,
}

/// Read-only rendering of the article body.
///
/// The sanitized HTML is written straight into the host element so Yew
/// never diffs nodes it did not create.
#[function_component(ArticlePreview)]
pub fn article_preview(props: &ArticlePreviewProps) -> Html {
    let host_ref = use_node_ref();
    let rendered = use_memo(props.content.clone(), |content| markdown_to_html(content));

    {
        let host_ref = host_ref.clone();
        use_effect_with(rendered, move |rendered| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(rendered.as_str());
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} class={classes!("prose", "min-h-[20rem]", "rounded-lg", "border", "border-[var(--border)]", "px-4", "py-3")} />
    }
}
