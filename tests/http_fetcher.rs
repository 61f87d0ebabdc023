use std::time::Duration;

use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use iconhound::app::IconhoundError;
use iconhound::config::ResolveOptions;
use iconhound::domain::{IconSource, Step};
use iconhound::fetcher::http_fetcher::{HttpFetcher, DEFAULT_USER_AGENT};
use iconhound::fetcher::{Fetcher, RequestOptions};

fn url(server: &MockServer, path: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), path)).unwrap()
}

#[tokio::test]
async fn test_sends_browser_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>ok</title>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new().unwrap();
    let fetched = fetcher
        .fetch(&url(&server, "/"), &RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.text(), "<title>ok</title>");

    let requests = server.received_requests().await.unwrap();
    let headers = &requests[0].headers;
    assert_eq!(headers["user-agent"], DEFAULT_USER_AGENT);
    assert_eq!(headers["accept-language"], "en-US,en;q=0.9");
    assert_eq!(headers["accept-encoding"], "gzip, deflate, br");
    assert_eq!(headers["upgrade-insecure-requests"], "1");
    assert_eq!(headers["sec-fetch-dest"], "document");
    assert_eq!(headers["sec-fetch-mode"], "navigate");
    assert_eq!(headers["sec-fetch-site"], "none");
    assert_eq!(headers["cache-control"], "max-age=0");
    assert!(headers["accept"].to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn test_user_agent_override() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "probe/1.0"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::from(&ResolveOptions::default().with_user_agent("probe/1.0"));
    let fetched = HttpFetcher::new()
        .unwrap()
        .fetch(&url(&server, "/"), &options)
        .await
        .unwrap();
    assert_eq!(fetched.status, 200);
}

#[tokio::test]
async fn test_reports_final_url_after_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/new/", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
        .mount(&server)
        .await;

    let fetched = HttpFetcher::new()
        .unwrap()
        .fetch(&url(&server, "/old"), &RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(fetched.url, url(&server, "/new/"));
    assert_eq!(fetched.body, b"moved");
}

#[tokio::test]
async fn test_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = HttpFetcher::new()
        .unwrap()
        .fetch(&url(&server, "/missing"), &RequestOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, IconhoundError::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let options = RequestOptions {
        timeout: Duration::from_millis(50),
        user_agent: None,
    };
    let err = HttpFetcher::new()
        .unwrap()
        .fetch(&url(&server, "/"), &options)
        .await
        .unwrap_err();

    assert!(matches!(err, IconhoundError::Timeout { .. }));
}

#[tokio::test]
async fn test_resolve_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<title>Served</title>
               <link rel="shortcut icon" href="/static/fav.ico">
               <link rel="manifest" href="/app.webmanifest">"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/app.webmanifest"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = iconhound::resolve(&server.uri(), &ResolveOptions::default())
        .await
        .unwrap();

    assert_eq!(result.title, "Served");
    assert_eq!(result.icons.len(), 1);
    assert_eq!(result.icons[0].source(), IconSource::Html);
    assert_eq!(result.icons[0].url, url(&server, "/static/fav.ico"));

    let errors = result.errors.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].step, Step::FetchManifest);
}
