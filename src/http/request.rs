use std::collections::HashMap;

/// Request methods understood by the server.
///
/// GET, HEAD and POST are served. Every other token lands in `OTHER`, which
/// keeps the token as received so it can still be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Submit a form body, rendered into HTML resources
    POST,
    /// Any method the server does not implement
    OTHER(String),
}

/// Represents a parsed request from a client.
///
/// Built once per connection by the parser and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Request {
    /// The request method
    pub method: Method,
    /// The raw request target as received (e.g. "/index.html?lang=es")
    pub target: String,
    /// The path part of the target, always starting with '/'
    pub resource: String,
    /// Query-string parameters
    pub params: HashMap<String, String>,
    /// Request headers, names kept as received
    pub headers: HashMap<String, String>,
    /// Single body line following the blank separator line, if any
    pub body: Option<String>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    headers: HashMap<String, String>,
    body: Option<String>,
}

impl Method {
    /// Maps a request-line token to a method.
    ///
    /// Matching is case-sensitive, so `get` becomes `OTHER("get")`.
    ///
    /// # Example
    ///
    /// ```
    /// # use lantern::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("PUT"), Method::OTHER("PUT".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            other => Method::OTHER(other.to_string()),
        }
    }

    /// Returns the wire token for this method.
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::OTHER(token) => token,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits a request target into its resource and decoded query parameters.
///
/// Everything before the first '?' is the resource, given a leading '/' when
/// it lacks one. The remainder is decoded as
/// `application/x-www-form-urlencoded`; repeated keys keep the last value.
pub fn split_target(target: &str) -> (String, HashMap<String, String>) {
    let (path, params) = match target.split_once('?') {
        Some((path, query)) => {
            let params = url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect();
            (path, params)
        }
        None => (target, HashMap::new()),
    };

    let resource = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    (resource, params)
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        let method = self.method.ok_or("method missing")?;
        let target = self.target.ok_or("target missing")?;
        let (resource, params) = split_target(&target);

        Ok(Request {
            method,
            target,
            resource,
            params,
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Retrieves a header value by name.
    ///
    /// An exact match wins; otherwise the first case-insensitive match is used.
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the header value if present, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(key)
            .or_else(|| {
                self.headers
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(key))
                    .map(|(_, v)| v)
            })
            .map(|v| v.as_str())
    }

    /// Retrieves a query parameter by name.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(|v| v.as_str())
    }

    /// Returns the body line, treating an empty line as no body.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.is_empty())
    }
}
