// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use painel_domain::{Modality, Month, Region, ServiceType, StateCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Year preselected when the dashboard starts.
pub const DEFAULT_YEAR: u16 = 2024;

/// Years offered by the year selector.
pub const SELECTABLE_YEARS: RangeInclusive<u16> = 2020..=2030;

/// On-time status selector.
///
/// Unlike the set facets this is a single choice, not a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OnTimeStatus {
    /// No restriction.
    #[default]
    All,
    /// Only orders delivered on time ("no prazo").
    #[serde(rename = "noPrazo")]
    OnTimeOnly,
    /// Only late orders ("fora do prazo").
    #[serde(rename = "foraPrazo")]
    LateOnly,
}

impl OnTimeStatus {
    /// Returns the string representation used by the filter bar.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::OnTimeOnly => "noPrazo",
            Self::LateOnly => "foraPrazo",
        }
    }

    /// Checks whether an order with the given on-time flag passes this selector.
    #[must_use]
    pub const fn accepts(&self, on_time: bool) -> bool {
        match self {
            Self::All => true,
            Self::OnTimeOnly => on_time,
            Self::LateOnly => !on_time,
        }
    }
}

/// The complete set of active facet selections.
///
/// Every set-valued facet follows the same rule: an empty set places no
/// restriction on that facet. A `FilterState` is never mutated in place by
/// consumers; every change produces a new value through [`crate::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Selected year.
    pub year: u16,
    /// Selected delivery months.
    pub months: BTreeSet<Month>,
    /// Selected regions.
    pub regions: BTreeSet<Region>,
    /// Selected states.
    pub states: BTreeSet<StateCode>,
    /// Selected modalities.
    pub modalities: BTreeSet<Modality>,
    /// Selected service types.
    pub service_types: BTreeSet<ServiceType>,
    /// Identifier of the order picked in the orders table, if any.
    #[serde(rename = "selectedPedido")]
    pub selected_order: Option<String>,
    /// On-time status selector.
    #[serde(rename = "prazoStatus")]
    pub on_time_status: OnTimeStatus,
}

impl FilterState {
    /// Creates the canonical default state: default year, every facet empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            year: DEFAULT_YEAR,
            months: BTreeSet::new(),
            regions: BTreeSet::new(),
            states: BTreeSet::new(),
            modalities: BTreeSet::new(),
            service_types: BTreeSet::new(),
            selected_order: None,
            on_time_status: OnTimeStatus::All,
        }
    }

    /// Returns a one-line summary of the state, used in change records and logs.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "year={},months={},regions={},states={},modalities={},service_types={},selected_order={},prazo={}",
            self.year,
            self.months.len(),
            self.regions.len(),
            self.states.len(),
            self.modalities.len(),
            self.service_types.len(),
            self.selected_order.as_deref().unwrap_or("-"),
            self.on_time_status.as_str()
        )
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Reports whether any set facet is non-empty.
///
/// This drives the "clear filters" button. The year, the selected order and
/// the on-time selector are not counted.
#[must_use]
pub fn has_active_filters(state: &FilterState) -> bool {
    !state.months.is_empty()
        || !state.regions.is_empty()
        || !state.states.is_empty()
        || !state.modalities.is_empty()
        || !state.service_types.is_empty()
}

/// A record of one applied filter command.
///
/// Change records are handed to subscribers alongside the new state and are
/// what the store logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChange {
    /// The command name (e.g. "`ToggleArrayFilter`").
    pub action: &'static str,
    /// Human-readable description of what changed.
    pub details: String,
    /// Summary of the state before the command.
    pub before: String,
    /// Summary of the state after the command.
    pub after: String,
}

/// The result of applying a filter command.
///
/// Transitions are atomic: the previous state is untouched and the new state
/// is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTransition {
    /// The new state after the transition.
    pub new_state: FilterState,
    /// The change record for this transition.
    pub change: FilterChange,
}
