// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use painel::CoreError;
use painel_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Filter engine operations never fail; these errors come from turning
/// external input into typed values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A request field could not be interpreted.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// The named facet does not exist.
    #[error("Unknown facet: '{0}'")]
    UnknownFacet(String),

    /// A strict page request pointed past the available pages.
    #[error("Page {page} is out of range (total pages: {total_pages})")]
    PageOutOfRange {
        /// The requested 1-based page.
        page: usize,
        /// The number of available pages.
        total_pages: usize,
    },

    /// A domain rule was violated.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DomainViolation(domain_error) => Self::Domain(domain_error),
        }
    }
}
