//! End-to-end crawl behavior, run against an in-process mock server
//! (grounded on `contextbuilder_crawler::engine`'s wiremock-based crawl
//! tests).

use linkschkr::{check, CheckOptions};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn opts() -> CheckOptions {
    CheckOptions::new().with_interval_ms(1).with_timeout_ms(500)
}

#[tokio::test]
async fn head_ok_non_html_skips_get() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/x.bin"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "application/octet-stream"))
        .expect(1)
        .mount(&server)
        .await;
    // No GET mock mounted: if the probe issued one, wiremock's default
    // 404 would flip this result to "down" and fail the assertion below.

    let seed = format!("{}/x.bin", server.uri());
    let report = check(&[seed.clone()], opts()).await.unwrap();

    assert!(report.failures.is_empty());
    assert_eq!(report.successes.len(), 1);
    assert_eq!(report.successes[0].url, seed);
    assert_eq!(report.successes[0].response_code, 200);
}

#[tokio::test]
async fn seed_404_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let seed = server.uri();
    let report = check(&[seed.clone()], opts()).await.unwrap();

    assert!(report.successes.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].response_code, 404);
}

#[tokio::test]
async fn one_hop_recursion_finds_two_pages() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "text/html"))
        .mount(&server)
        .await;
    let body = r#"<html><body><a href="/docs">docs</a></body></html>"#;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/docs"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "text/html"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let seed = server.uri();
    let report = check(&[seed], opts()).await.unwrap();

    assert!(report.failures.is_empty());
    assert_eq!(report.successes.len(), 2);
}

#[tokio::test]
async fn broken_outbound_link_is_one_failure() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "text/html"))
        .mount(&server)
        .await;
    let body = r#"<a href="http://127.0.0.1:9/">dead</a>"#;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let seed = server.uri();
    let report = check(&[seed], opts()).await.unwrap();

    assert_eq!(report.successes.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].url, "http://127.0.0.1:9/");
    assert_eq!(report.failures[0].state, linkschkr::State::Unknown);
}

#[tokio::test]
async fn non_recursive_mode_probes_only_the_seed() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "text/html"))
        .mount(&server)
        .await;
    let body = r#"<a href="/x">1</a><a href="/x">2</a><a href="/x">3</a>"#;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let seed = server.uri();
    let report = check(&[seed], opts().with_no_recursion(true)).await.unwrap();

    assert_eq!(report.successes.len() + report.failures.len(), 1);
}

#[tokio::test]
async fn duplicate_links_on_a_page_are_probed_once() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "text/html"))
        .mount(&server)
        .await;
    let body = r#"<a href="/p">1</a><a href="/p">2</a><a href="/p">3</a><a href="/p">4</a><a href="/p">5</a>"#;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/p"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "text/html"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/p"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    let seed = server.uri();
    let report = check(&[seed], opts()).await.unwrap();

    assert!(report.failures.is_empty());
    assert_eq!(report.successes.len(), 2);
}

#[tokio::test]
async fn forbidden_and_method_not_allowed_are_not_failures_on_non_html() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(403).insert_header("content-type", "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(405).insert_header("content-type", "application/json"))
        .mount(&server)
        .await;

    let a = format!("{}/a", server.uri());
    let b = format!("{}/b", server.uri());
    let report = check(&[a, b], opts()).await.unwrap();

    assert!(report.failures.is_empty());
    assert_eq!(report.successes.len(), 2);
}
