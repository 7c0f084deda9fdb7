use clinician_scope::{
    config::Settings,
    data::pubmed::{PubmedClient, NO_TITLE},
    error::LookupError,
};
use mockito::{Matcher, Server};
use serde_json::json;

fn test_settings(base: &str) -> Settings {
    Settings {
        pubmed_email: "tests@example.com".to_string(),
        pubmed_tool: "clinician_scope_tests".to_string(),
        max_results: 5,
        eutils_base: base.to_string(),
        openai_api_key: None,
        openai_model: "gpt-4o-mini".to_string(),
        openai_base: base.to_string(),
        summary_max_tokens: 100,
        http_timeout_secs: 5,
        http_retries: 0,
    }
}

#[tokio::test]
async fn search_returns_ids_in_provider_order() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/esearch.fcgi")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("db".to_string(), "pubmed".to_string()),
            Matcher::UrlEncoded("term".to_string(), "Jane Doe".to_string()),
            Matcher::UrlEncoded("retmax".to_string(), "5".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"esearchresult": {"idlist": ["111", "222", "333"]}}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = PubmedClient::new(&test_settings(&server.url())).expect("client builds");
    let ids = client.search("Jane Doe", 5).await.expect("search succeeds");
    assert_eq!(ids, vec!["111", "222", "333"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn zero_matches_is_ok_and_empty() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/esearch.fcgi")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"esearchresult": {"idlist": []}}).to_string())
        .create_async()
        .await;

    let client = PubmedClient::new(&test_settings(&server.url())).expect("client builds");
    let ids = client.search("Nobody Here", 5).await.expect("search succeeds");
    assert!(ids.is_empty());
}

#[tokio::test]
async fn server_error_is_an_error_not_an_empty_result() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/esearch.fcgi")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let client = PubmedClient::new(&test_settings(&server.url())).expect("client builds");
    let err = client.search("Jane Doe", 5).await.expect_err("must fail");
    assert!(matches!(err, LookupError::Status { .. }));
}

#[tokio::test]
async fn repeated_search_is_idempotent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/esearch.fcgi")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"esearchresult": {"idlist": ["42", "7"]}}).to_string())
        .expect(2)
        .create_async()
        .await;

    let client = PubmedClient::new(&test_settings(&server.url())).expect("client builds");
    let first = client.search("Jane Doe", 5).await.expect("first search");
    let second = client.search("Jane Doe", 5).await.expect("second search");
    assert_eq!(first, second);
    mock.assert_async().await;
}

#[tokio::test]
async fn server_errors_are_retried_up_to_the_bound() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/esearch.fcgi")
        .match_query(Matcher::Any)
        .with_status(503)
        .expect(2)
        .create_async()
        .await;

    let mut settings = test_settings(&server.url());
    settings.http_retries = 1;
    let client = PubmedClient::new(&settings).expect("client builds");
    let err = client
        .search("Jane Doe", 5)
        .await
        .expect_err("still fails after the retry");
    assert!(matches!(err, LookupError::Status { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/esearch.fcgi")
        .match_query(Matcher::Any)
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let mut settings = test_settings(&server.url());
    settings.http_retries = 1;
    let client = PubmedClient::new(&settings).expect("client builds");
    let err = client.search("Jane Doe", 5).await.expect_err("must fail");
    assert!(matches!(err, LookupError::Status { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_term_short_circuits_without_a_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/esearch.fcgi")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = PubmedClient::new(&test_settings(&server.url())).expect("client builds");
    let ids = client.search("   ", 5).await.expect("search succeeds");
    assert!(ids.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn resolve_title_reads_the_summary_document() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/esummary.fcgi")
        .match_query(Matcher::UrlEncoded("id".to_string(), "111".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "result": {
                    "uids": ["111"],
                    "111": {"uid": "111", "title": "Robotic Surgery Outcomes"}
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = PubmedClient::new(&test_settings(&server.url())).expect("client builds");
    let title = client.resolve_title("111").await.expect("resolution succeeds");
    assert_eq!(title, "Robotic Surgery Outcomes");
}

#[tokio::test]
async fn missing_title_yields_the_sentinel() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/esummary.fcgi")
        .match_query(Matcher::UrlEncoded("id".to_string(), "111".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"result": {"uids": ["111"], "111": {"uid": "111"}}}).to_string())
        .create_async()
        .await;

    let client = PubmedClient::new(&test_settings(&server.url())).expect("client builds");
    let title = client.resolve_title("111").await.expect("resolution succeeds");
    assert_eq!(title, NO_TITLE);
}

#[tokio::test]
async fn failed_resolution_surfaces_as_an_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/esummary.fcgi")
        .match_query(Matcher::Any)
        .with_status(502)
        .create_async()
        .await;

    let client = PubmedClient::new(&test_settings(&server.url())).expect("client builds");
    let err = client.resolve_title("111").await.expect_err("must fail");
    assert!(matches!(err, LookupError::Status { .. }));
}
