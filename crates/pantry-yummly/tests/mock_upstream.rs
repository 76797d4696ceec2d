//! Client behavior against a local `tiny_http` stand-in for RapidAPI.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use pantry_config::YummlyConfig;
use pantry_yummly::{UPSTREAM_FAILURE, YummlyClient, YummlyError};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone)]
struct Recorded {
    url: String,
    api_key: Option<String>,
    api_host: Option<String>,
}

struct MockUpstream {
    base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockUpstream {
    /// Serve every request with `status` and `body`, after `delay`.
    fn start(status: u16, body: &'static str, delay: Duration) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for request in server.incoming_requests() {
                let header = |name: &'static str| {
                    request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv(name))
                        .map(|h| h.value.as_str().to_string())
                };
                seen.lock().unwrap().push(Recorded {
                    url: request.url().to_string(),
                    api_key: header("X-RapidAPI-Key"),
                    api_host: header("X-RapidAPI-Host"),
                });
                thread::sleep(delay);
                let response = tiny_http::Response::from_string(body).with_status_code(status);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            requests,
        }
    }

    fn client(&self) -> YummlyClient {
        self.client_with_timeout(10)
    }

    fn client_with_timeout(&self, timeout_secs: u64) -> YummlyClient {
        YummlyClient::new(&YummlyConfig {
            api_key: "test-key".into(),
            api_host: "yummly2.p.rapidapi.com".into(),
            base_url: self.base_url.clone(),
            timeout_secs,
        })
        .unwrap()
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

#[tokio::test]
async fn ok_body_is_returned_unchanged() {
    let upstream = MockUpstream::start(
        200,
        r#"{"feed":[{"display":{"displayName":"Tacos"}}]}"#,
        Duration::ZERO,
    );
    let value = upstream.client().autocomplete("tac").await.unwrap();
    assert_eq!(
        value,
        serde_json::json!({"feed": [{"display": {"displayName": "Tacos"}}]})
    );
}

#[tokio::test]
async fn server_error_is_reported_after_one_attempt() {
    let upstream = MockUpstream::start(500, "", Duration::ZERO);
    let err = upstream.client().search("soup", 0, 3).await.unwrap_err();

    match err {
        YummlyError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, UPSTREAM_FAILURE);
        }
        other => panic!("expected Api error, got {other}"),
    }
    assert_eq!(upstream.requests().len(), 1);
}

#[tokio::test]
async fn credential_headers_are_sent() {
    let upstream = MockUpstream::start(200, "{}", Duration::ZERO);
    upstream.client().categories_list().await.unwrap();

    let recorded = upstream.requests();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].url, "/categories/list");
    assert_eq!(recorded[0].api_key.as_deref(), Some("test-key"));
    assert_eq!(recorded[0].api_host.as_deref(), Some("yummly2.p.rapidapi.com"));
}

#[tokio::test]
async fn search_sends_query_parameters() {
    let upstream = MockUpstream::start(200, "{}", Duration::ZERO);
    upstream.client().search("chicken", 10, 5).await.unwrap();

    let recorded = upstream.requests();
    assert_eq!(recorded[0].url, "/feeds/search?q=chicken&start=10&maxResult=5");
}

#[tokio::test]
async fn feeds_list_sends_tag() {
    let upstream = MockUpstream::start(200, "{}", Duration::ZERO);
    upstream
        .client()
        .feeds_list(0, 5, "list.recipe.search_based:fq:attribute_s_mv:course^course-Lunch")
        .await
        .unwrap();

    let url = upstream.requests()[0].url.clone();
    assert!(url.starts_with("/feeds/list?start=0&limit=5&tag="), "{url}");
    assert!(url.contains("course-Lunch"), "{url}");
}

#[tokio::test]
async fn similarities_forwards_arbitrary_params() {
    let upstream = MockUpstream::start(200, "[]", Duration::ZERO);
    let params = vec![
        ("id".to_string(), "15-Minute-Baked-Salmon".to_string()),
        ("limit".to_string(), "18".to_string()),
    ];
    let value = upstream.client().list_similarities(&params).await.unwrap();
    assert_eq!(value, serde_json::json!([]));
    assert_eq!(
        upstream.requests()[0].url,
        "/feeds/list-similarities?id=15-Minute-Baked-Salmon&limit=18"
    );
}

#[tokio::test]
async fn upstream_status_is_preserved() {
    let upstream = MockUpstream::start(429, r#"{"message":"Too many requests"}"#, Duration::ZERO);
    let err = upstream.client().categories_list().await.unwrap_err();
    assert_eq!(err.status(), 429);
    assert_eq!(upstream.requests().len(), 1);
}

#[tokio::test]
async fn hung_upstream_hits_timeout() {
    let upstream = MockUpstream::start(200, "{}", Duration::from_secs(3));
    let err = upstream
        .client_with_timeout(1)
        .autocomplete("slow")
        .await
        .unwrap_err();
    assert!(matches!(err, YummlyError::Http(_)), "{err}");
}

#[tokio::test]
#[ignore] // requires network and PANTRY_YUMMLY__API_KEY
async fn live_categories_list() {
    let api_key = std::env::var("PANTRY_YUMMLY__API_KEY").unwrap();
    let client = YummlyClient::new(&YummlyConfig {
        api_key,
        ..Default::default()
    })
    .unwrap();
    let value = client.categories_list().await.unwrap();
    assert!(value.is_object());
}
