//! Integration tests for `WaiterClient` using wiremock HTTP mocks.

use brasa_core::Catalog;
use brasa_storefront::config::GeminiConfig;
use brasa_storefront::services::{ChatMessage, ChatRole, WaiterClient};
use secrecy::SecretString;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> WaiterClient {
    let config = GeminiConfig {
        api_key: SecretString::from("test-key".to_owned()),
        model: "gemini-2.5-flash".to_owned(),
        base_url: base_url.to_owned(),
    };
    WaiterClient::new(&config, &Catalog::standard())
}

#[tokio::test]
async fn reply_text_is_extracted_from_the_first_candidate() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [{"text": "Vai de X-Bacon, campeão de vendas! 🍔"}]
                }
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let reply = client.send(&[], "O que você recomenda?").await;
    assert_eq!(reply, "Vai de X-Bacon, campeão de vendas! 🍔");
}

#[tokio::test]
async fn transcript_and_new_message_are_sent_in_order() {
    let server = MockServer::start().await;

    let expected = serde_json::json!({
        "contents": [
            {"role": "model", "parts": [{"text": "Fala patrão! Bateu a fome?"}]},
            {"role": "user", "parts": [{"text": "Bateu!"}]},
            {"role": "user", "parts": [{"text": "Quero algo com bacon"}]}
        ]
    });

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(body_partial_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "X-Bacon do Beto!"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let history = vec![
        ChatMessage {
            role: ChatRole::Model,
            text: "Fala patrão! Bateu a fome?".to_owned(),
        },
        ChatMessage {
            role: ChatRole::User,
            text: "Bateu!".to_owned(),
        },
    ];

    let client = test_client(&server.uri());
    let reply = client.send(&history, "Quero algo com bacon").await;
    assert_eq!(reply, "X-Bacon do Beto!");
}

#[tokio::test]
async fn api_failure_falls_back_to_a_friendly_line() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let reply = client.send(&[], "Oi").await;
    assert!(
        reply.contains("engasgada"),
        "transport failure uses the error fallback, got: {reply}"
    );
}

#[tokio::test]
async fn empty_candidate_list_falls_back_to_the_repeat_line() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let reply = client.send(&[], "Oi").await;
    assert!(
        reply.contains("Pode repetir"),
        "empty reply uses the repeat fallback, got: {reply}"
    );
}
