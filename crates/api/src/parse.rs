// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text input to typed filter values.
//!
//! Facet values are closed enumerations. Anything outside them is rejected
//! here, before a command is built.

use crate::error::ApiError;
use painel::{Facet, FacetToggle, OnTimeStatus, SELECTABLE_YEARS};
use tracing::warn;

/// Resolves a facet by its filter-state field name (`months`, `regions`,
/// `states`, `modalities`, `serviceTypes`), ignoring case.
///
/// # Errors
///
/// Returns `ApiError::UnknownFacet` if no facet has that field name.
pub fn parse_facet(name: &str) -> Result<Facet, ApiError> {
    let trimmed: &str = name.trim();
    Facet::ALL
        .into_iter()
        .find(|facet| facet.field().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| {
            warn!(facet = name, "Rejected unknown facet");
            ApiError::UnknownFacet(name.to_string())
        })
}

/// Builds a toggle command payload from a facet name and a value label.
///
/// # Arguments
///
/// * `facet` - The facet field name (e.g. `"regions"`)
/// * `value` - The value label (e.g. `"Sul"`)
///
/// # Errors
///
/// Returns `ApiError::UnknownFacet` for an unknown facet and
/// `ApiError::Domain` when the value is not a member of the facet's enumeration.
pub fn parse_facet_toggle(facet: &str, value: &str) -> Result<FacetToggle, ApiError> {
    let facet: Facet = parse_facet(facet)?;
    FacetToggle::parse(facet, value).map_err(|err| {
        warn!(facet = facet.field(), value, error = %err, "Rejected facet value");
        ApiError::from(err)
    })
}

/// Parses the on-time selector (`all`, `noPrazo`, `foraPrazo`), ignoring case.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for any other value.
pub fn parse_on_time_status(value: &str) -> Result<OnTimeStatus, ApiError> {
    let trimmed: &str = value.trim();
    [
        OnTimeStatus::All,
        OnTimeStatus::OnTimeOnly,
        OnTimeStatus::LateOnly,
    ]
    .into_iter()
    .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
    .ok_or_else(|| {
        warn!(value, "Rejected on-time selector");
        ApiError::InvalidInput {
            field: String::from("prazoStatus"),
            message: format!("expected one of all, noPrazo, foraPrazo (got '{value}')"),
        }
    })
}

/// Checks that a year is offered by the year selector.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the year is outside the selectable range.
pub fn validate_year(year: u16) -> Result<u16, ApiError> {
    if SELECTABLE_YEARS.contains(&year) {
        return Ok(year);
    }
    warn!(year, "Rejected year outside the selector range");
    Err(ApiError::InvalidInput {
        field: String::from("year"),
        message: format!(
            "year must be between {} and {} (got {year})",
            SELECTABLE_YEARS.start(),
            SELECTABLE_YEARS.end()
        ),
    })
}
