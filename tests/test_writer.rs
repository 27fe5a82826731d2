use lantern::http::response::{Response, ResponseBuilder, StatusCode};
use lantern::http::writer::{serialize_response, ResponseWriter};
use std::time::{Duration, UNIX_EPOCH};

#[test]
fn test_serialize_exact_framing() {
    let at = UNIX_EPOCH + Duration::from_secs(784_111_777);
    let response = ResponseBuilder::at(StatusCode::Ok, at)
        .header("Content-Type", "text/plain")
        .body(b"hello".to_vec())
        .build();

    let bytes = serialize_response(&response);
    let expected = format!(
        "HTTP/1.1 200 OK\r\n\
         Date: Sun, 06 Nov 1994 08:49:37 GMT\r\n\
         Server: {}\r\n\
         Content-Type: text/plain\r\n\
         Content-Length: 5\r\n\
         Connection: close\r\n\
         \r\n\
         hello",
        lantern::http::response::SERVER_NAME
    );

    assert_eq!(String::from_utf8(bytes).unwrap(), expected);
}

#[test]
fn test_serialize_without_body_ends_at_blank_line() {
    let response = Response::ok("text/html", None);
    let bytes = serialize_response(&response);

    assert!(bytes.ends_with(b"Connection: close\r\n\r\n"));
}

#[test]
fn test_serialize_binary_body_verbatim() {
    let body = vec![0u8, 159, 146, 150, 13, 10, 13, 10];
    let response = Response::ok("application/octet-stream", Some(body.clone()));
    let bytes = serialize_response(&response);

    assert!(bytes.ends_with(&body));
    let head_end = bytes.windows(4).position(|w| w == b"\r\n\r\n").unwrap();
    assert_eq!(bytes.len() - head_end - 4, body.len());
}

#[test]
fn test_serialize_status_pages() {
    let bytes = serialize_response(&Response::not_implemented(b"x".to_vec()));
    assert!(bytes.starts_with(b"HTTP/1.1 501 NOT IMPLEMENTED\r\n"));

    let bytes = serialize_response(&Response::not_acceptable(b"x".to_vec()));
    assert!(bytes.starts_with(b"HTTP/1.1 406 NOT ACCEPTABLE\r\n"));
}

#[tokio::test]
async fn test_writer_writes_full_buffer() {
    let response = Response::not_found(b"<h1>404</h1>".to_vec());
    let expected = serialize_response(&response);

    let mut writer = ResponseWriter::new(&response);
    let mut out: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(writer.len(), expected.len());
    assert_eq!(out, expected);
}
