use lantern::http::response::{Response, ResponseBuilder, StatusCode, SERVER_NAME};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::NotAcceptable.as_u16(), 406);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_lines() {
    assert_eq!(StatusCode::Ok.status_line(), "200 OK");
    assert_eq!(StatusCode::NotFound.status_line(), "404 NOT FOUND");
    assert_eq!(StatusCode::NotAcceptable.status_line(), "406 NOT ACCEPTABLE");
    assert_eq!(StatusCode::NotImplemented.status_line(), "501 NOT IMPLEMENTED");
}

#[test]
fn test_response_builder_standard_headers() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert!(response.header("Date").is_some());
    assert_eq!(response.header("Server"), Some(SERVER_NAME));
    assert_eq!(response.header("Content-Length"), Some("0"));
    assert_eq!(response.header("Connection"), Some("close"));
    assert_eq!(response.body, None);
}

#[test]
fn test_response_builder_date_format() {
    let at = UNIX_EPOCH + Duration::from_secs(784_111_777);
    let response = ResponseBuilder::at(StatusCode::Ok, at).build();

    assert_eq!(response.header("Date"), Some("Sun, 06 Nov 1994 08:49:37 GMT"));
}

#[test]
fn test_response_builder_overrides_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.header("Content-Length"), Some("4"));
}

#[test]
fn test_response_builder_header_order() {
    let response = ResponseBuilder::at(StatusCode::Ok, SystemTime::now())
        .header("Content-Type", "text/plain")
        .body(b"x".to_vec())
        .build();

    let names: Vec<&str> = response.headers.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        ["Date", "Server", "Content-Type", "Content-Length", "Connection"]
    );
}

#[test]
fn test_response_ok_with_body() {
    let response = Response::ok("text/html", Some(b"<h1>hi</h1>".to_vec()));

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.header("Content-Type"), Some("text/html"));
    assert_eq!(response.header("Content-Length"), Some("11"));
    assert_eq!(response.body.as_deref(), Some(&b"<h1>hi</h1>"[..]));
}

#[test]
fn test_response_ok_without_body_keeps_content_type() {
    let response = Response::ok("image/png", None);

    assert_eq!(response.header("Content-Type"), Some("image/png"));
    assert_eq!(response.header("Content-Length"), Some("0"));
    assert_eq!(response.content_length(), 0);
    assert!(response.body.is_none());
}

#[test]
fn test_status_page_constructors() {
    let cases = [
        (Response::not_found(b"nf".to_vec()), StatusCode::NotFound),
        (Response::not_acceptable(b"na".to_vec()), StatusCode::NotAcceptable),
        (Response::not_implemented(b"ni".to_vec()), StatusCode::NotImplemented),
    ];

    for (response, status) in cases {
        assert_eq!(response.status, status);
        assert_eq!(response.header("Content-Type"), Some("text/html"));
        assert_eq!(response.header("Content-Length"), Some("2"));
        assert_eq!(response.body.as_ref().map(Vec::len), Some(2));
    }
}

#[test]
fn test_content_length_matches_body() {
    for body in [Vec::new(), b"a".to_vec(), vec![0u8; 4096], "ñandú".as_bytes().to_vec()] {
        let expected = body.len().to_string();
        let response = Response::ok("application/octet-stream", Some(body));
        assert_eq!(response.header("Content-Length"), Some(expected.as_str()));
    }
}
