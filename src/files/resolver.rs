//! Maps a parsed request onto the served root and produces its response.

use std::collections::HashSet;
use std::fmt;
use std::io;

use tracing::{debug, info};

use crate::files::root::FileSource;
use crate::files::template::{parse_form_urlencoded, render};
use crate::http::mime::{classify, is_accepted, parse_accept_list, MimeType};
use crate::http::request::{Method, Request};
use crate::http::response::Response;

/// File served for the `/` resource.
pub const INDEX_FILE: &str = "index.html";

pub const NOT_FOUND_PAGE: &str = "404.html";
pub const NOT_ACCEPTABLE_PAGE: &str = "406.html";
pub const NOT_IMPLEMENTED_PAGE: &str = "501.html";

const STATUS_PAGES: [&str; 3] = [NOT_FOUND_PAGE, NOT_ACCEPTABLE_PAGE, NOT_IMPLEMENTED_PAGE];

/// Faults that end the connection without a response.
#[derive(Debug)]
pub enum ResolveError {
    /// A fixed status page is missing or unreadable
    MissingStatusPage {
        page: &'static str,
        source: io::Error,
    },
    /// An existing, accepted file could not be read
    Read { file: String, source: io::Error },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::MissingStatusPage { page, .. } => {
                write!(f, "status page {page} is missing from the served root")
            }
            ResolveError::Read { file, .. } => write!(f, "failed to read {file}"),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::MissingStatusPage { source, .. } | ResolveError::Read { source, .. } => {
                Some(source)
            }
        }
    }
}

enum Negotiation {
    Accepted(MimeType),
    Rejected(Response),
}

/// Resolves requests against a [`FileSource`].
#[derive(Debug, Clone)]
pub struct Resolver<F> {
    files: F,
}

/// Maps a resource to a file name under the served root.
///
/// `/` maps to `index.html`; anything else loses its leading '/'.
pub fn target_file_name(resource: &str) -> String {
    if resource == "/" {
        INDEX_FILE.to_string()
    } else {
        resource.strip_prefix('/').unwrap_or(resource).to_string()
    }
}

impl<F: FileSource> Resolver<F> {
    pub fn new(files: F) -> Self {
        Self { files }
    }

    /// Checks that every status page is present.
    ///
    /// Meant to run once at boot; a missing page is a deployment defect.
    pub async fn verify_status_pages(&self) -> Result<(), ResolveError> {
        for page in STATUS_PAGES {
            if !self.files.exists(page).await {
                return Err(ResolveError::MissingStatusPage {
                    page,
                    source: io::Error::new(io::ErrorKind::NotFound, page),
                });
            }
        }

        Ok(())
    }

    /// Produces the response for `request`.
    ///
    /// Not found, not acceptable and unsupported methods become status pages.
    /// Only a missing status page or a failed file read is an error.
    pub async fn resolve(&self, request: &Request) -> Result<Response, ResolveError> {
        let file = target_file_name(&request.resource);

        let response = match &request.method {
            Method::GET | Method::POST => match self.negotiate(request, &file).await? {
                Negotiation::Accepted(mime) => self.serve(request, &file, &mime).await?,
                Negotiation::Rejected(response) => response,
            },
            Method::HEAD => match self.negotiate(request, &file).await? {
                Negotiation::Accepted(mime) => Response::ok(&mime.to_string(), None),
                Negotiation::Rejected(response) => response,
            },
            Method::OTHER(token) => {
                debug!(method = %token, "Method not implemented");
                self.status_response(NOT_IMPLEMENTED_PAGE, Response::not_implemented)
                    .await?
            }
        };

        info!(
            method = %request.method,
            resource = %request.resource,
            status = response.status.as_u16(),
            "Request resolved"
        );

        Ok(response)
    }

    async fn negotiate(&self, request: &Request, file: &str) -> Result<Negotiation, ResolveError> {
        if !self.files.exists(file).await {
            debug!(file, "File not found");
            let response = self.status_response(NOT_FOUND_PAGE, Response::not_found).await?;
            return Ok(Negotiation::Rejected(response));
        }

        let mime = classify(file);
        let accepted = request
            .header("Accept")
            .map(parse_accept_list)
            .filter(|set| !set.is_empty())
            .unwrap_or_else(|| HashSet::from([MimeType::any()]));

        if !is_accepted(&mime, &accepted) {
            debug!(file, mime = %mime, "Type not accepted");
            let response = self
                .status_response(NOT_ACCEPTABLE_PAGE, Response::not_acceptable)
                .await?;
            return Ok(Negotiation::Rejected(response));
        }

        Ok(Negotiation::Accepted(mime))
    }

    async fn serve(
        &self,
        request: &Request,
        file: &str,
        mime: &MimeType,
    ) -> Result<Response, ResolveError> {
        let contents = self
            .files
            .read_all(file)
            .await
            .map_err(|source| ResolveError::Read {
                file: file.to_string(),
                source,
            })?;

        let body = match request.body() {
            Some(form) if *mime == MimeType::new("text", "html") => {
                let params = parse_form_urlencoded(form);
                debug!(file, fields = params.len(), "Rendering template");
                render(&contents, &params)
            }
            _ => contents,
        };

        Ok(Response::ok(&mime.to_string(), Some(body)))
    }

    async fn status_response(
        &self,
        page: &'static str,
        build: fn(Vec<u8>) -> Response,
    ) -> Result<Response, ResolveError> {
        let contents = self
            .files
            .read_all(page)
            .await
            .map_err(|source| ResolveError::MissingStatusPage { page, source })?;

        Ok(build(contents))
    }
}
