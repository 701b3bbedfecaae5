use common::{submission::FileMeta, DeliveryError, DeliveryReceipt};
use wasm_bindgen::{prelude::JsValue, JsCast};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FileList, Request, RequestInit, Response};

fn network(e: JsValue) -> DeliveryError {
    DeliveryError::Network(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// Name and size of every chosen file; the contents are never read.
pub fn file_metadata(files: &FileList) -> Vec<FileMeta> {
    (0..files.length())
        .filter_map(|index| files.get(index))
        .map(|file| FileMeta::new(file.name(), file.size() as u64))
        .collect()
}

/// Posts a JSON body to the email service, once.
pub async fn send_email(endpoint: &str, body: &str) -> Result<DeliveryReceipt, DeliveryError> {
    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.body(Some(&body.into()));

    let request = Request::new_with_str_and_init(endpoint, &opts)
        .map_err(|e| DeliveryError::Request(format!("{:?}", e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| DeliveryError::Request(format!("{:?}", e)))?;

    let window =
        web_sys::window().ok_or_else(|| DeliveryError::Request("no window".to_owned()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    let text = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?
        .as_string()
        .unwrap_or_default();

    if response.ok() {
        Ok(DeliveryReceipt {
            status: response.status(),
            text,
        })
    } else {
        Err(DeliveryError::Rejected {
            status: response.status(),
            text,
        })
    }
}
