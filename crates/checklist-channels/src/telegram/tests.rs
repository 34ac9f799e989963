use super::send::acknowledge;
use super::TelegramCourier;
use checklist_core::{config::TelegramConfig, error::ChecklistError, traits::Courier};

fn courier(parse_mode: &str) -> TelegramCourier {
    TelegramCourier::new(TelegramConfig {
        bot_token: "123:abc".to_string(),
        chat_id: "-1001".to_string(),
        parse_mode: parse_mode.to_string(),
        api_base: "https://relay.example/".to_string(),
        ..Default::default()
    })
}

#[test]
fn test_base_url_trims_trailing_slash() {
    let c = courier("HTML");
    assert_eq!(c.base_url, "https://relay.example/bot123:abc");
    assert_eq!(c.name(), "telegram");
    assert_eq!(c.chat_id(), "-1001");
}

#[test]
fn test_request_body_fields() {
    let body = courier("HTML").request_body("<b>hi</b>");
    assert_eq!(body["chat_id"], "-1001");
    assert_eq!(body["text"], "<b>hi</b>");
    assert_eq!(body["parse_mode"], "HTML");
}

#[test]
fn test_request_body_omits_empty_parse_mode() {
    let body = courier("").request_body("plain");
    assert!(body.get("parse_mode").is_none());
}

#[test]
fn test_acknowledge_ok() {
    let raw = r#"{"ok":true,"result":{"message_id":77,"chat":{"id":-1001}}}"#;
    assert!(acknowledge(200, raw).is_ok());
}

#[test]
fn test_acknowledge_failure_carries_description() {
    let raw = r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#;
    match acknowledge(400, raw) {
        Err(ChecklistError::Delivery(d)) => assert_eq!(d, "Bad Request: chat not found"),
        other => panic!("expected delivery error, got {other:?}"),
    }
}

#[test]
fn test_acknowledge_failure_without_description() {
    let raw = r#"{"ok":false}"#;
    let err = acknowledge(502, raw).unwrap_err();
    assert_eq!(err.to_string(), "telegram returned 502");
}

#[test]
fn test_acknowledge_unreadable_body() {
    let err = acknowledge(502, "<html>Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, ChecklistError::Channel(_)));
    assert!(err.to_string().contains("502"));
}
