use crate::http::request::{split_target, Method, Request};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace was received
    Empty,
    /// The request line has no method token
    MissingMethod,
    /// The request line has a method but no target
    MissingTarget,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty request"),
            ParseError::MissingMethod => f.write_str("request line has no method"),
            ParseError::MissingTarget => f.write_str("request line has no target"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a complete request text into a [`Request`].
///
/// Lines end in `\n` with an optional `\r`. Header lines without a ':' are
/// skipped. Only the first line after the blank separator is kept as the body;
/// anything after it is dropped.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = String::from_utf8_lossy(buf);
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    // Request line; the version token is ignored
    let request_line = lines.next().ok_or(ParseError::Empty)?;
    let mut parts = request_line.split_whitespace();

    let method = parts.next().ok_or(ParseError::MissingMethod)?;
    let target = parts.next().ok_or(ParseError::MissingTarget)?;

    let (resource, params) = split_target(target);

    // Headers
    let mut headers = HashMap::new();

    for line in lines.by_ref() {
        if line.is_empty() {
            break;
        }

        if let Some((key, value)) = line.split_once(':') {
            let value = value.strip_prefix(' ').unwrap_or(value);
            headers.insert(key.to_string(), value.to_string());
        }
    }

    // Body
    let body = lines
        .next()
        .filter(|line| !line.is_empty())
        .map(str::to_string);

    Ok(Request {
        method: Method::parse(method),
        target: target.to_string(),
        resource,
        params,
        headers,
        body,
    })
}

/// Returns the length of the first complete request in `buf`, if there is one.
///
/// A request is complete once the header block terminator has arrived and at
/// least `Content-Length` bytes follow it. Without a usable `Content-Length`
/// the whole buffer is the request, so a body line already received is kept.
/// A length that overflows `usize` never completes.
pub fn request_len(buf: &[u8]) -> Option<usize> {
    let (headers_end, separator_len) = find_headers_end(buf)?;

    let Some(length) = content_length(&buf[..headers_end]) else {
        return Some(buf.len());
    };

    let total = (headers_end + separator_len).checked_add(length)?;
    (buf.len() >= total).then_some(total)
}

fn find_headers_end(buf: &[u8]) -> Option<(usize, usize)> {
    let crlf = buf.windows(4).position(|w| w == b"\r\n\r\n");
    let lf = buf.windows(2).position(|w| w == b"\n\n");

    match (crlf, lf) {
        (Some(c), Some(l)) if l < c => Some((l, 2)),
        (Some(c), _) => Some((c, 4)),
        (None, Some(l)) => Some((l, 2)),
        (None, None) => None,
    }
}

fn content_length(head: &[u8]) -> Option<usize> {
    String::from_utf8_lossy(head)
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("Content-Length"))
        .and_then(|(_, value)| value.trim().parse().ok())
}
