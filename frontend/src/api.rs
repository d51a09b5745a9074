#[cfg(any(test, not(feature = "mock")))]
use std::{cell::RefCell, rc::Rc};

use archfolio_shared::{Article, ArticleInput};
#[cfg(any(test, not(feature = "mock")))]
use futures::channel::oneshot;
#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use js_sys::Date;
use serde::{Deserialize, Serialize};
#[cfg(not(feature = "mock"))]
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::File;
#[cfg(not(feature = "mock"))]
use web_sys::{FormData, ProgressEvent, XmlHttpRequest};
use yew::Callback;

// API base URL - 编译时从环境变量读取，默认本地开发地址
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("ARCHFOLIO_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

#[cfg(not(feature = "mock"))]
const UPLOAD_TIMEOUT_MS: u32 = 120_000;

/// XHR events that end an upload without a response, with the error each
/// one reports.
#[cfg(any(test, not(feature = "mock")))]
const UPLOAD_FAILURE_EVENTS: [(&str, &str); 3] = [
    ("error", "Network error during upload"),
    ("abort", "Upload aborted"),
    ("timeout", "Upload timed out"),
];

#[derive(Debug, Serialize, Deserialize)]
pub struct ImageUploadResponse {
    pub url: String,
}

/// Completion of one upload request, shared by its event handlers. The
/// first event to fire decides the outcome.
#[cfg(any(test, not(feature = "mock")))]
#[derive(Clone)]
struct UploadSettle(Rc<RefCell<Option<oneshot::Sender<Result<(), String>>>>>);

#[cfg(any(test, not(feature = "mock")))]
impl UploadSettle {
    fn channel() -> (Self, oneshot::Receiver<Result<(), String>>) {
        let (tx, rx) = oneshot::channel();
        (Self(Rc::new(RefCell::new(Some(tx)))), rx)
    }

    fn settle(&self, outcome: Result<(), String>) {
        if let Some(tx) = self.0.borrow_mut().take() {
            let _ = tx.send(outcome);
        }
    }
}

/// Fetch an existing article for editing. `Ok(None)` on 404.
pub async fn fetch_article(id: &str) -> Result<Option<Article>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(crate::models::get_mock_article(id));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url =
            format!("{}/articles/{}?_ts={}", API_BASE, urlencoding::encode(id), Date::now() as u64);

        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if response.status() == 404 {
            return Ok(None);
        }

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let article: Article = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;

        Ok(Some(article))
    }
}

/// Create a new article (`id == None`) or update an existing one.
pub async fn save_article(id: Option<&str>, input: &ArticleInput) -> Result<Article, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(crate::models::mock_saved_article(id, input));
    }

    #[cfg(not(feature = "mock"))]
    {
        let request = match id {
            Some(id) => Request::put(&format!("{}/articles/{}", API_BASE, urlencoding::encode(id))),
            None => Request::post(&format!("{}/articles", API_BASE)),
        };
        let response = request
            .header("Content-Type", "application/json")
            .json(input)
            .map_err(|e| format!("Serialize error: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("HTTP error: {} {}", status, body.trim()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))
    }
}

/// Upload an image with progress reporting (0-100) and return its durable
/// URL.
///
/// `fetch` exposes no upload progress, so this goes through
/// `XMLHttpRequest` directly.
pub async fn upload_image(file: &File, on_progress: Callback<u8>) -> Result<String, String> {
    #[cfg(feature = "mock")]
    {
        for pct in [25_u8, 50, 75, 100] {
            gloo_timers::future::TimeoutFuture::new(150).await;
            on_progress.emit(pct);
        }
        return Ok(format!("https://images.example.com/mock/{}", file.name()));
    }

    #[cfg(not(feature = "mock"))]
    {
        let js_err = |e: wasm_bindgen::JsValue| format!("Upload error: {:?}", e);
        let url = format!("{}/images", API_BASE);

        let form = FormData::new().map_err(js_err)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(js_err)?;

        let xhr = XmlHttpRequest::new().map_err(js_err)?;
        xhr.open_with_async("POST", &url, true).map_err(js_err)?;
        xhr.set_timeout(UPLOAD_TIMEOUT_MS);

        let (settle, rx) = UploadSettle::channel();

        let on_upload_progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
            if event.length_computable() && event.total() > 0.0 {
                let pct = (event.loaded() / event.total() * 100.0).clamp(0.0, 100.0);
                on_progress.emit(pct as u8);
            }
        });
        let on_load = {
            let settle = settle.clone();
            Closure::<dyn FnMut()>::new(move || settle.settle(Ok(())))
        };
        let on_failures = UPLOAD_FAILURE_EVENTS
            .into_iter()
            .map(|(event, message)| {
                let settle = settle.clone();
                let handler =
                    Closure::<dyn FnMut()>::new(move || settle.settle(Err(message.to_string())));
                xhr.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
                    .map_err(js_err)?;
                Ok(handler)
            })
            .collect::<Result<Vec<_>, String>>()?;

        xhr.upload()
            .map_err(js_err)?
            .set_onprogress(Some(on_upload_progress.as_ref().unchecked_ref()));
        xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
        xhr.send_with_opt_form_data(Some(&form)).map_err(js_err)?;

        let outcome = rx
            .await
            .map_err(|_| "Upload cancelled".to_string())
            .and_then(|result| result);
        // The closures must outlive the request; drop them only once it settled.
        drop((on_upload_progress, on_load, on_failures));
        outcome?;

        let status = xhr.status().map_err(js_err)?;
        let body = xhr.response_text().map_err(js_err)?.unwrap_or_default();
        if !(200..300).contains(&status) {
            return Err(format!("HTTP error: {} {}", status, body.trim()));
        }

        let parsed: ImageUploadResponse =
            serde_json::from_str(&body).map_err(|e| format!("Parse error: {:?}", e))?;
        Ok(parsed.url)
    }
}
