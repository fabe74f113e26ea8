// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::state::OnTimeStatus;
use painel_domain::{Modality, Month, Region, ServiceType, StateCode};
use std::collections::BTreeSet;
use std::str::FromStr;

/// A command represents a filter change requested by a view, as data only.
///
/// Commands are the only way to request filter state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCommand {
    /// Replace one field of the filter state wholesale.
    UpdateFilter(FilterUpdate),
    /// Add a value to a set facet, or remove it if already selected.
    ToggleArrayFilter(FacetToggle),
    /// Reset every field to its default.
    ClearFilters,
}

impl FilterCommand {
    /// Returns the command name recorded in change records.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UpdateFilter(_) => "UpdateFilter",
            Self::ToggleArrayFilter(_) => "ToggleArrayFilter",
            Self::ClearFilters => "ClearFilters",
        }
    }
}

impl From<FilterUpdate> for FilterCommand {
    fn from(update: FilterUpdate) -> Self {
        Self::UpdateFilter(update)
    }
}

impl From<FacetToggle> for FilterCommand {
    fn from(toggle: FacetToggle) -> Self {
        Self::ToggleArrayFilter(toggle)
    }
}

/// A wholesale replacement of exactly one filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    /// Replace the selected year.
    Year(u16),
    /// Replace the selected months.
    Months(BTreeSet<Month>),
    /// Replace the selected regions.
    Regions(BTreeSet<Region>),
    /// Replace the selected states.
    States(BTreeSet<StateCode>),
    /// Replace the selected modalities.
    Modalities(BTreeSet<Modality>),
    /// Replace the selected service types.
    ServiceTypes(BTreeSet<ServiceType>),
    /// Replace the selected order reference.
    SelectedOrder(Option<String>),
    /// Replace the on-time status selector.
    OnTimeStatus(OnTimeStatus),
}

impl FilterUpdate {
    /// Returns the name of the field this update replaces.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Year(_) => "year",
            Self::Months(_) => "months",
            Self::Regions(_) => "regions",
            Self::States(_) => "states",
            Self::Modalities(_) => "modalities",
            Self::ServiceTypes(_) => "serviceTypes",
            Self::SelectedOrder(_) => "selectedPedido",
            Self::OnTimeStatus(_) => "prazoStatus",
        }
    }
}

/// Names one of the set-valued facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    /// Delivery month.
    Month,
    /// Macro-region.
    Region,
    /// State.
    State,
    /// Transport modality.
    Modality,
    /// Service type.
    ServiceType,
}

impl Facet {
    /// All set facets, in predicate evaluation order.
    pub const ALL: [Self; 5] = [
        Self::Month,
        Self::Region,
        Self::State,
        Self::Modality,
        Self::ServiceType,
    ];

    /// Returns the facet's field name in the filter state.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Month => "months",
            Self::Region => "regions",
            Self::State => "states",
            Self::Modality => "modalities",
            Self::ServiceType => "serviceTypes",
        }
    }
}

/// A single value to toggle in one set facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetToggle {
    /// Toggle a delivery month.
    Month(Month),
    /// Toggle a region.
    Region(Region),
    /// Toggle a state.
    State(StateCode),
    /// Toggle a modality.
    Modality(Modality),
    /// Toggle a service type.
    ServiceType(ServiceType),
}

impl FacetToggle {
    /// Parses a textual facet value into a toggle for the given facet.
    ///
    /// # Arguments
    ///
    /// * `facet` - The facet the value belongs to
    /// * `value` - The value label (e.g. `"Sul"`, `"PR"`, `"AÉREO"`, `"março"`)
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` if the value is not a member of
    /// the facet's closed enumeration.
    pub fn parse(facet: Facet, value: &str) -> Result<Self, CoreError> {
        let toggle: Self = match facet {
            Facet::Month => Self::Month(Month::from_str(value)?),
            Facet::Region => Self::Region(Region::from_str(value)?),
            Facet::State => Self::State(StateCode::from_str(value)?),
            Facet::Modality => Self::Modality(Modality::from_str(value)?),
            Facet::ServiceType => Self::ServiceType(ServiceType::from_str(value)?),
        };
        Ok(toggle)
    }

    /// Returns the facet this toggle applies to.
    #[must_use]
    pub const fn facet(&self) -> Facet {
        match self {
            Self::Month(_) => Facet::Month,
            Self::Region(_) => Facet::Region,
            Self::State(_) => Facet::State,
            Self::Modality(_) => Facet::Modality,
            Self::ServiceType(_) => Facet::ServiceType,
        }
    }

    /// Returns the toggled value's display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Month(m) => m.as_str(),
            Self::Region(r) => r.as_str(),
            Self::State(s) => s.as_str(),
            Self::Modality(m) => m.as_str(),
            Self::ServiceType(t) => t.as_str(),
        }
    }
}
