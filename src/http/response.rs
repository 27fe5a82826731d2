use indexmap::IndexMap;
use std::time::SystemTime;

/// Value of the `Server` header.
pub const SERVER_NAME: &str = concat!("lantern/", env!("CARGO_PKG_VERSION"));

/// Status outcomes the server can produce.
///
/// - `Ok` (200): Resource served
/// - `NotFound` (404): No such file under the served root
/// - `NotAcceptable` (406): File type not in the client's `Accept` list
/// - `NotImplemented` (501): Method other than GET, HEAD or POST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 NOT FOUND
    NotFound,
    /// 406 NOT ACCEPTABLE
    NotAcceptable,
    /// 501 NOT IMPLEMENTED
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use lantern::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotAcceptable.as_u16(), 406);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::NotAcceptable => 406,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the fixed status line text, e.g. `404 NOT FOUND`.
    pub fn status_line(&self) -> &'static str {
        match self {
            StatusCode::Ok => "200 OK",
            StatusCode::NotFound => "404 NOT FOUND",
            StatusCode::NotAcceptable => "406 NOT ACCEPTABLE",
            StatusCode::NotImplemented => "501 NOT IMPLEMENTED",
        }
    }
}

/// A complete response ready to be serialized.
#[derive(Debug)]
pub struct Response {
    /// The status outcome
    pub status: StatusCode,
    /// Headers in the order they are written on the wire
    pub headers: IndexMap<String, String>,
    /// Response body, absent for HEAD
    pub body: Option<Vec<u8>>,
}

/// Builder for responses.
///
/// `Date` and `Server` are set up front; `Content-Length` is always derived
/// from the body in [`ResponseBuilder::build`].
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .body(b"hi".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: IndexMap<String, String>,
    body: Option<Vec<u8>>,
}

impl ResponseBuilder {
    /// Creates a builder stamped with the current time.
    pub fn new(status: StatusCode) -> Self {
        Self::at(status, SystemTime::now())
    }

    /// Creates a builder whose `Date` header reflects `now`.
    pub fn at(status: StatusCode, now: SystemTime) -> Self {
        let mut headers = IndexMap::new();
        headers.insert("Date".to_string(), httpdate::fmt_http_date(now));
        headers.insert("Server".to_string(), SERVER_NAME.to_string());

        Self {
            status,
            headers,
            body: None,
        }
    }

    /// Adds or replaces a header. A replaced header keeps its position.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the final Response.
    ///
    /// Any caller-supplied `Content-Length` is overwritten with the real body length.
    pub fn build(mut self) -> Response {
        let length = self.body.as_ref().map_or(0, Vec::len);
        self.headers
            .insert("Content-Length".to_string(), length.to_string());
        self.headers
            .insert("Connection".to_string(), "close".to_string());

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a 200 response for a served file.
    ///
    /// `body` is `None` for HEAD; `Content-Type` is still reported.
    pub fn ok(content_type: &str, body: Option<Vec<u8>>) -> Self {
        let builder = ResponseBuilder::new(StatusCode::Ok).header("Content-Type", content_type);
        match body {
            Some(body) => builder.body(body).build(),
            None => builder.build(),
        }
    }

    /// Creates a 404 response carrying the `404.html` page.
    pub fn not_found(page: Vec<u8>) -> Self {
        Self::status_page(StatusCode::NotFound, page)
    }

    /// Creates a 406 response carrying the `406.html` page.
    pub fn not_acceptable(page: Vec<u8>) -> Self {
        Self::status_page(StatusCode::NotAcceptable, page)
    }

    /// Creates a 501 response carrying the `501.html` page.
    pub fn not_implemented(page: Vec<u8>) -> Self {
        Self::status_page(StatusCode::NotImplemented, page)
    }

    fn status_page(status: StatusCode, page: Vec<u8>) -> Self {
        ResponseBuilder::new(status)
            .header("Content-Type", "text/html")
            .body(page)
            .build()
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Length of the body in bytes, 0 when absent.
    pub fn content_length(&self) -> usize {
        self.body.as_ref().map_or(0, Vec::len)
    }
}
