use js_sys::Date;
use pulldown_cmark::{html, Options, Parser};

/// Convert Markdown content into sanitized HTML for the editor preview.
///
/// Content may already be HTML from a rich text paste; pulldown-cmark passes
/// inline HTML through, and ammonia strips anything unsafe from the result.
pub fn markdown_to_html(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    ammonia::clean(&html_output)
}

/// Local wall-clock `HH:MM` for an epoch-millisecond timestamp.
pub fn format_clock(ts_ms: i64) -> String {
    let d = Date::new(&wasm_bindgen::JsValue::from_f64(ts_ms as f64));
    format!("{:02}:{:02}", d.get_hours(), d.get_minutes())
}
