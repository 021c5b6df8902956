/// Integration tests for the signed Twitter client
///
/// Every HTTP path runs against a mockito server:
/// - Request-token and access-token exchanges
/// - Cursor pagination across several pages
/// - Failure part-way through a traversal
/// - Maintenance sentinel, expired tokens and provider error envelopes
use deskscout::domain::models::{AuthorizeVariant, Credentials, Cursor, Session};
use deskscout::infrastructure::twitter::{
    TwitterClient, TwitterClientConfig, MAINTENANCE_SENTINEL,
};
use deskscout::TwitterApiError;
use mockito::{Matcher, Server, ServerGuard};

fn client_for(server: &ServerGuard, max_pages: u32) -> TwitterClient {
    let mut config = TwitterClientConfig::new(Credentials::new("CK", "CS", "https://x/cb"));
    config.oauth_base_url = format!("{}/oauth", server.url());
    config.api_base_url = format!("{}/1.1", server.url());
    config.authorize_base_url = format!("{}/oauth", server.url());
    config.max_pages = max_pages;
    TwitterClient::new(config).unwrap()
}

fn session() -> Session {
    Session {
        oauth_token: "42-usertoken".to_string(),
        oauth_token_secret: "user-secret".to_string(),
        user_id: "42".to_string(),
        screen_name: "someone".to_string(),
    }
}

fn friends_page(users: &[(&str, &str)], next_cursor: &str) -> String {
    let users: Vec<_> = users
        .iter()
        .map(|(screen_name, name)| serde_json::json!({ "screen_name": screen_name, "name": name }))
        .collect();
    serde_json::json!({
        "users": users,
        "next_cursor_str": next_cursor,
        "previous_cursor_str": "0"
    })
    .to_string()
}

#[tokio::test]
async fn test_request_token_end_to_end() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/oauth/request_token")
        .match_header(
            "authorization",
            Matcher::Regex(r#"^OAuth oauth_callback="https%3A%2F%2Fx%2Fcb", oauth_consumer_key="CK", oauth_nonce="[A-Za-z0-9]{32}", oauth_signature="[^"]+", oauth_signature_method="HMAC-SHA1", oauth_timestamp="\d+", oauth_version="1\.0"$"#.to_string()),
        )
        .with_status(200)
        .with_header("content-type", "application/x-www-form-urlencoded")
        .with_body("oauth_token=ABC123&oauth_token_secret=tmp&oauth_callback_confirmed=true")
        .create_async()
        .await;

    let client = client_for(&server, 10);
    let token = client.get_request_token().await.unwrap();

    assert_eq!(token.oauth_token, "ABC123");
    assert_eq!(
        client.authorize_url(&token, AuthorizeVariant::Authenticate),
        format!("{}/oauth/authenticate?oauth_token=ABC123", server.url())
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_token_missing_field_is_protocol_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/oauth/request_token")
        .with_status(200)
        .with_body("oauth_callback_confirmed=true")
        .create_async()
        .await;

    let err = client_for(&server, 10).get_request_token().await.unwrap_err();
    assert!(matches!(err, TwitterApiError::Protocol(_)));
}

#[tokio::test]
async fn test_request_token_rejected_credentials() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/oauth/request_token")
        .with_status(401)
        .with_body(r#"{"errors":[{"code":32,"message":"Could not authenticate you."}]}"#)
        .create_async()
        .await;

    match client_for(&server, 10).get_request_token().await.unwrap_err() {
        TwitterApiError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, Some(401));
            assert_eq!(code, Some(32));
            assert_eq!(message, "Could not authenticate you.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_access_token_exchange() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/oauth/access_token")
        .match_header(
            "authorization",
            Matcher::AllOf(vec![
                Matcher::Regex(r#"oauth_token="REQ123""#.to_string()),
                Matcher::Regex(r#"oauth_verifier="VER456""#.to_string()),
            ]),
        )
        .with_status(200)
        .with_body(
            "oauth_token=42-usertoken&oauth_token_secret=user-secret&user_id=42&screen_name=someone",
        )
        .create_async()
        .await;

    let session = client_for(&server, 10)
        .get_access_token("REQ123", "VER456")
        .await
        .unwrap();

    assert_eq!(session.oauth_token, "42-usertoken");
    assert_eq!(session.oauth_token_secret, "user-secret");
    assert_eq!(session.user_id, "42");
    assert_eq!(session.screen_name, "someone");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_access_token_incomplete_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/oauth/access_token")
        .with_status(200)
        .with_body("oauth_token=t&oauth_token_secret=s")
        .create_async()
        .await;

    let err = client_for(&server, 10)
        .get_access_token("REQ123", "VER456")
        .await
        .unwrap_err();
    assert!(matches!(err, TwitterApiError::Protocol(_)));
}

#[tokio::test]
async fn test_single_page_request_shape() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/1.1/friends/list.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("cursor".to_string(), "-1".to_string()),
            Matcher::UrlEncoded("count".to_string(), "150".to_string()),
            Matcher::UrlEncoded("skip_status".to_string(), "true".to_string()),
            Matcher::UrlEncoded("include_user_entities".to_string(), "false".to_string()),
            Matcher::UrlEncoded("user_id".to_string(), "42".to_string()),
        ]))
        .match_header(
            "authorization",
            Matcher::AllOf(vec![
                Matcher::Regex(r#"oauth_token="42-usertoken""#.to_string()),
                Matcher::Regex(r#"oauth_signature="[^"]+""#.to_string()),
            ]),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(friends_page(&[("alice", "Alice 西あ-01a")], "0"))
        .create_async()
        .await;

    let page = client_for(&server, 10)
        .list_connections_page(&session(), &Cursor::first(), 150)
        .await
        .unwrap();

    assert_eq!(page.records.len(), 1);
    assert_eq!(page.records[0].screen_name, "alice");
    assert!(page.next_cursor.is_end());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_pagination_walks_three_pages() {
    let mut server = Server::new_async().await;
    let page1 = server
        .mock("GET", "/1.1/friends/list.json")
        .match_query(Matcher::UrlEncoded("cursor".to_string(), "-1".to_string()))
        .with_status(200)
        .with_body(friends_page(&[("a", "A"), ("b", "B")], "1001"))
        .expect(1)
        .create_async()
        .await;
    let page2 = server
        .mock("GET", "/1.1/friends/list.json")
        .match_query(Matcher::UrlEncoded("cursor".to_string(), "1001".to_string()))
        .with_status(200)
        .with_body(friends_page(&[("c", "C")], "1002"))
        .expect(1)
        .create_async()
        .await;
    let page3 = server
        .mock("GET", "/1.1/friends/list.json")
        .match_query(Matcher::UrlEncoded("cursor".to_string(), "1002".to_string()))
        .with_status(200)
        .with_body(friends_page(&[("d", "D")], "0"))
        .expect(1)
        .create_async()
        .await;

    let connections = client_for(&server, 10)
        .list_all_connections(&session(), 200)
        .await
        .unwrap();

    assert_eq!(
        connections.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["a", "b", "c", "d"]
    );
    assert_eq!(connections["c"], "C");
    page1.assert_async().await;
    page2.assert_async().await;
    page3.assert_async().await;
}

#[tokio::test]
async fn test_pagination_failure_discards_everything() {
    let mut server = Server::new_async().await;
    let _page1 = server
        .mock("GET", "/1.1/friends/list.json")
        .match_query(Matcher::UrlEncoded("cursor".to_string(), "-1".to_string()))
        .with_status(200)
        .with_body(friends_page(&[("a", "A")], "1001"))
        .create_async()
        .await;
    let _page2 = server
        .mock("GET", "/1.1/friends/list.json")
        .match_query(Matcher::UrlEncoded("cursor".to_string(), "1001".to_string()))
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;
    let page3 = server
        .mock("GET", "/1.1/friends/list.json")
        .match_query(Matcher::UrlEncoded("cursor".to_string(), "1002".to_string()))
        .with_status(200)
        .with_body(friends_page(&[("c", "C")], "0"))
        .expect(0)
        .create_async()
        .await;

    let err = client_for(&server, 10)
        .list_all_connections(&session(), 200)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TwitterApiError::Api {
            status: Some(503),
            ..
        }
    ));
    page3.assert_async().await;
}

#[tokio::test]
async fn test_pagination_limit() {
    let mut server = Server::new_async().await;
    let _endless = server
        .mock("GET", "/1.1/friends/list.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(friends_page(&[("a", "A")], "999"))
        .expect(3)
        .create_async()
        .await;

    let err = client_for(&server, 3)
        .list_all_connections(&session(), 200)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TwitterApiError::PaginationLimitExceeded { max_pages: 3 }
    ));
}

#[tokio::test]
async fn test_maintenance_sentinel_is_rate_limited() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/1.1/friends/list.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(MAINTENANCE_SENTINEL)
        .create_async()
        .await;

    let err = client_for(&server, 10)
        .list_all_connections(&session(), 200)
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    assert_eq!(err.kind(), "rate_limited");
}

#[tokio::test]
async fn test_expired_token() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/1.1/friends/list.json")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"errors":[{"code":89,"message":"Invalid or expired token."}]}"#)
        .create_async()
        .await;

    let err = client_for(&server, 10)
        .list_connections_page(&session(), &Cursor::first(), 200)
        .await
        .unwrap_err();

    assert!(err.is_auth_expired());
}

#[tokio::test]
async fn test_page_does_not_exist() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/1.1/friends/list.json")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"errors":[{"code":34,"message":"Sorry, that page does not exist."}]}"#)
        .create_async()
        .await;

    let err = client_for(&server, 10)
        .list_connections_page(&session(), &Cursor::first(), 200)
        .await
        .unwrap_err();

    assert!(matches!(err, TwitterApiError::Api { code: Some(34), .. }));
}

#[tokio::test]
async fn test_malformed_page_is_protocol_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/1.1/friends/list.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"users": []}"#)
        .create_async()
        .await;

    let err = client_for(&server, 10)
        .list_connections_page(&session(), &Cursor::first(), 200)
        .await
        .unwrap_err();

    assert!(matches!(err, TwitterApiError::Protocol(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let mut config = TwitterClientConfig::new(Credentials::new("CK", "CS", "https://x/cb"));
    config.oauth_base_url = "http://127.0.0.1:1/oauth".to_string();
    let client = TwitterClient::new(config).unwrap();

    let err = client.get_request_token().await.unwrap_err();
    assert!(matches!(err, TwitterApiError::Transport(_)));
    assert_eq!(err.kind(), "transport_error");
}
