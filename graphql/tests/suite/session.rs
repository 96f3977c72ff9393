use govern_graphql::ClientConfig;
use govern_graphql::GraphqlClient;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::body_string_contains;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;

/// A sign-in that sets a session cookie authenticates every later call made
/// by the same client and by its clones, but not by an unrelated client.
#[tokio::test]
async fn session_cookie_is_shared_by_clones() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/connect/v1/graphql"))
        .and(body_string_contains("SignIn"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "SSID=sess_42; Path=/; HttpOnly")
                .set_body_json(json!({"data": {"signIn": {"identity": {"id": "usr_1"}}}})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/console/v1/graphql"))
        .and(header("cookie", "SSID=sess_42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"viewer": {"id": "usr_1"}}})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/console/v1/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "authentication required", "extensions": {"code": "UNAUTHENTICATED"}}]
        })))
        .mount(&server)
        .await;

    let config = ClientConfig::for_base_url(server.uri());
    let client = GraphqlClient::new(&config).expect("client");
    client
        .execute_connect(
            "mutation SignIn($input: SignInInput!) { signIn(input: $input) { identity { id } } }",
            json!({"input": {"email": "a@example.com", "password": "pw"}}),
        )
        .await
        .expect("sign in");

    let clone = client.clone();
    let data = clone
        .execute("query Viewer { viewer { id } }", json!({}))
        .await
        .expect("authenticated clone");
    assert_eq!(data["viewer"]["id"], json!("usr_1"));

    let stranger = GraphqlClient::new(&config).expect("client");
    let err = stranger
        .execute("query Viewer { viewer { id } }", json!({}))
        .await
        .unwrap_err();
    assert!(err.is_forbidden());
}
