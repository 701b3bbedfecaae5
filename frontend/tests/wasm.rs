use common::submission::FieldValue;
use common::{Config, DeliveryError, EmailPayload, FormKind, FormState, Metadata};
use wasm_bindgen_test::*;

use ocyana_frontend::{actions::deliver, js_functions::send_email};

use wasm_bindgen_test::wasm_bindgen_test_configure;
wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn unreachable_service_is_a_network_error() {
    let result = send_email("http://127.0.0.1:9/api/v1.0/email/send", "{}").await;
    assert!(matches!(result, Err(DeliveryError::Network(_))));
}

#[wasm_bindgen_test]
async fn invalid_request_is_never_sent() {
    let mut config = Config::load().unwrap();
    config.template_id = String::new();
    config.endpoint = "http://127.0.0.1:9/".to_owned();

    let result = deliver(&config, EmailPayload::default()).await;
    assert!(matches!(result, Err(DeliveryError::Request(_))));
}

#[wasm_bindgen_test]
fn browser_clock_stamps_payload() {
    let config = Config::load().unwrap();
    let mut form = FormState::new(FormKind::General);
    form.update("name", FieldValue::Text("Kasun Silva".to_owned()));
    form.update("email", FieldValue::Text("kasun@example.com".to_owned()));
    form.update("message", FieldValue::Text("Hello".to_owned()));

    let payload = form.submit(&Metadata::now(config.organization)).unwrap();
    assert!(payload.get("date").map_or(false, |date| date.split('/').count() == 3));
    assert!(payload
        .get("time")
        .map_or(false, |time| time.ends_with("AM") || time.ends_with("PM")));
    assert_eq!(payload.get("to_name"), Some("Ocyana Global Migration"));
}
