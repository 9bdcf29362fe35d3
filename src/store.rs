use std::fmt;

use gloo::net::http::Request;

use jakpum_core::project::{ParseError, ProjectCollection};

/// Relative so the site works under a sub-path deployment as well as the
/// dev server.
pub(crate) const PROJECTS_URL: &str = "data/projects.json";

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum StoreError {
    /// The document answered with a non-success status.
    NotFound { status: u16 },
    /// The request never produced a response.
    Network { detail: String },
    /// The body is not a well-formed, valid collection document.
    Parse { detail: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { status } => {
                write!(f, "project data request failed with status {status}")
            }
            StoreError::Network { detail } => write!(f, "project data unreachable: {detail}"),
            StoreError::Parse { detail } => write!(f, "{detail}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<ParseError> for StoreError {
    fn from(err: ParseError) -> Self {
        StoreError::Parse {
            detail: err.to_string(),
        }
    }
}

/// One fetch per page session; callers hold the result in memory. No
/// retry here, a retry is a fresh user-triggered call.
pub(crate) async fn load_projects() -> Result<ProjectCollection, StoreError> {
    let response = Request::get(PROJECTS_URL)
        .send()
        .await
        .map_err(|err| StoreError::Network {
            detail: err.to_string(),
        })?;
    if !response.ok() {
        return Err(StoreError::NotFound {
            status: response.status(),
        });
    }
    let body = response.text().await.map_err(|err| StoreError::Network {
        detail: err.to_string(),
    })?;
    Ok(ProjectCollection::parse(&body)?)
}
