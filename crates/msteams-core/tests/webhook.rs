use std::net::TcpListener;
use std::time::Duration;

use msteams_core::msteams_card::{HttpPostAction, MessageCard, OpenUriAction};
use msteams_core::{MsTeamsConfig, WebhookClient, WebhookError};
use pretty_assertions::assert_eq;
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOOK_PATH: &str = "/webhookb2/tenant/IncomingWebhook/token";

async fn client_for(server: &MockServer) -> WebhookClient {
    WebhookClient::new(&format!("{}{HOOK_PATH}", server.uri())).unwrap()
}

#[tokio::test]
async fn test_send_message_succeeds_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    let card = client.new_message_card("Hi", "Testing OpenURI", "this is my summary");
    card.set_theme_color("2DC72D");
    card.add_section("foo", "bar", true);

    client.send_message().await.unwrap();
}

#[tokio::test]
async fn test_posted_body_is_the_encoded_card() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    let card = client.new_message_card("", "", "summary only");
    card.add_potential_action(OpenUriAction::link("Open", "https://example.com"));
    card.add_potential_action(HttpPostAction::new("Approve", "https://x").with_body("{}"));
    client.send_message().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let posted: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(posted, serde_json::to_value(client.card()).unwrap());
    assert_eq!(posted["@type"], "MessageCard");
    assert_eq!(posted["@context"], "http://schema.org/extensions");
    assert!(posted.get("title").is_none());
    assert_eq!(posted["potentialAction"][1]["body"], "{}");
    assert!(posted["potentialAction"][1].get("bodyContentType").is_none());
}

#[tokio::test]
async fn test_non_200_is_delivery_error_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("bad request"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.send_message().await.unwrap_err();

    match &err {
        WebhookError::Delivery { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "bad request");
        }
        other => panic!("expected delivery error, got {other:?}"),
    }
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_other_success_statuses_are_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.send_message().await.unwrap_err();
    assert_eq!(err.status(), Some(202));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}{HOOK_PATH}", listener.local_addr().unwrap());
    drop(listener);

    let client = WebhookClient::new(&url).unwrap();
    let err = client.send_message().await.unwrap_err();

    assert!(matches!(err, WebhookError::Transport(_)), "got {err:?}");
    assert!(!err.to_string().contains("token"));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = WebhookClient::with_timeout(
        &format!("{}{HOOK_PATH}", server.uri()),
        Duration::from_millis(100),
    )
    .unwrap();

    let err = client.send_message().await.unwrap_err();
    assert!(matches!(err, WebhookError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_post_card_sends_caller_owned_card() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let mut card = MessageCard::new("Reusable", "", "reuse");
    client.post_card(&card).await.unwrap();

    card.set_text("second send");
    client.post_card(&card).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let second: Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert_eq!(second["text"], "second send");
}

#[tokio::test]
async fn test_client_from_config() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = MsTeamsConfig {
        webhook_url: Some(format!("{}{HOOK_PATH}", server.uri())),
        timeout_secs: Some(5),
        ..Default::default()
    };

    let mut client = WebhookClient::from_config(&config).unwrap();
    client.card_mut().set_summary("configured");
    client.send_message().await.unwrap();
}
