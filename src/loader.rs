// src/loader.rs

use crate::error::FetchError;
use serde::de::DeserializeOwned;
use std::sync::mpsc::{self, Receiver, TryRecvError};

fn is_http(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

pub fn parse_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Parse {
        url: url.to_string(),
        source,
    })
}

/// Fetches and parses one JSON resource.
///
/// `http(s)://` URLs go over the network; anything else is read from disk
/// relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let body = if is_http(url) {
        fetch_http(url)?
    } else {
        std::fs::read_to_string(url).map_err(|source| FetchError::Io {
            url: url.to_string(),
            source,
        })?
    };
    parse_json(url, &body)
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_http(url: &str) -> Result<String, FetchError> {
    let transport = |err: reqwest::Error| FetchError::Transport {
        url: url.to_string(),
        message: err.to_string(),
    };

    let response = reqwest::blocking::get(url).map_err(transport)?;
    if !response.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }
    response.text().map_err(transport)
}

/// Browser `fetch` of one JSON resource, relative URLs resolve against the page.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let transport = |message: String| FetchError::Transport {
        url: url.to_string(),
        message,
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let window = web_sys::window().ok_or_else(|| transport("no window in this context".into()))?;
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| transport(format!("could not build request: {err:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| transport(format!("{err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| transport("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let promise = response
        .text()
        .map_err(|err| transport(format!("could not read body: {err:?}")))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|err| transport(format!("could not read body: {err:?}")))?
        .as_string()
        .ok_or_else(|| transport("body is not text".into()))?;

    parse_json(url, &text)
}

/// A fetch running off the UI path. Poll it once per frame.
pub struct PendingFetch<T> {
    url: String,
    rx: Receiver<Result<T, FetchError>>,
}

impl<T> PendingFetch<T> {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// `None` while the request is still in flight.
    pub fn poll(&self) -> Option<Result<T, FetchError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(FetchError::Transport {
                url: self.url.clone(),
                message: "fetch task ended without a result".into(),
            })),
        }
    }

    /// Already-resolved fetch, used for embedded content.
    pub fn ready(url: &str, result: Result<T, FetchError>) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(result);
        Self {
            url: url.to_string(),
            rx,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_fetch<T>(url: &str) -> PendingFetch<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let owned = url.to_string();
    std::thread::spawn(move || {
        let _ = tx.send(fetch_json::<T>(&owned));
    });
    PendingFetch {
        url: url.to_string(),
        rx,
    }
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_fetch<T>(url: &str) -> PendingFetch<T>
where
    T: DeserializeOwned + 'static,
{
    let (tx, rx) = mpsc::channel();
    let owned = url.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        let _ = tx.send(fetch_json::<T>(&owned).await);
    });
    PendingFetch {
        url: url.to_string(),
        rx,
    }
}
