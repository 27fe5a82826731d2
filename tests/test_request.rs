use lantern::http::request::{split_target, Method, Request, RequestBuilder};
use std::collections::HashMap;

fn request_with_headers(headers: HashMap<String, String>) -> Request {
    Request {
        method: Method::GET,
        target: "/".to_string(),
        resource: "/".to_string(),
        params: HashMap::new(),
        headers,
        body: None,
    }
}

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("Host".to_string(), "example.com".to_string());
    headers.insert("Accept".to_string(), "text/html".to_string());

    let req = request_with_headers(headers);

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Accept"), Some("text/html"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_header_falls_back_to_case_insensitive() {
    let mut headers = HashMap::new();
    headers.insert("accept".to_string(), "image/png".to_string());

    let req = request_with_headers(headers);

    assert_eq!(req.header("Accept"), Some("image/png"));
}

#[test]
fn test_request_empty_body_counts_as_absent() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .target("/form.html")
        .body("")
        .build()
        .unwrap();

    assert_eq!(req.body(), None);
}

#[test]
fn test_request_builder_splits_target() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .target("/page.html?name=Ana%20Maria&x")
        .header("Accept", "*/*")
        .build()
        .unwrap();

    assert_eq!(req.resource, "/page.html");
    assert_eq!(req.param("name"), Some("Ana Maria"));
    assert_eq!(req.param("x"), Some(""));
    assert_eq!(req.header("Accept"), Some("*/*"));
}

#[test]
fn test_request_builder_requires_method_and_target() {
    assert!(RequestBuilder::new().target("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_split_target_adds_leading_slash() {
    let (resource, params) = split_target("index.html");
    assert_eq!(resource, "/index.html");
    assert!(params.is_empty());
}

#[test]
fn test_split_target_last_duplicate_wins() {
    let (resource, params) = split_target("/?a=1&a=2");
    assert_eq!(resource, "/");
    assert_eq!(params.get("a").unwrap(), "2");
}

#[test]
fn test_method_tokens() {
    assert_eq!(Method::parse("GET").as_str(), "GET");
    assert_eq!(Method::parse("HEAD").as_str(), "HEAD");
    assert_eq!(Method::parse("POST").as_str(), "POST");
    assert_eq!(Method::parse("TRACE").as_str(), "TRACE");
    assert_eq!(Method::parse("TRACE").to_string(), "TRACE");
}
