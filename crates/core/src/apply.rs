// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{FacetToggle, FilterCommand, FilterUpdate};
use crate::state::{FilterChange, FilterState, FilterTransition};
use std::collections::BTreeSet;

/// Removes `value` from `set` if present, otherwise inserts it.
///
/// Returns `true` if the value is a member after the toggle.
fn toggle_member<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

/// Applies a command to the current filter state, producing a new state and a change record.
///
/// The input state is never modified. Every command is total: there is no
/// invalid combination of state and command.
///
/// # Arguments
///
/// * `state` - The current filter state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// A `FilterTransition` holding the replacement state and the change record.
#[must_use]
pub fn apply(state: &FilterState, command: FilterCommand) -> FilterTransition {
    let action: &'static str = command.name();
    let mut new_state: FilterState = state.clone();

    let details: String = match command {
        FilterCommand::UpdateFilter(update) => {
            let field: &'static str = update.field();
            match update {
                FilterUpdate::Year(year) => new_state.year = year,
                FilterUpdate::Months(months) => new_state.months = months,
                FilterUpdate::Regions(regions) => new_state.regions = regions,
                FilterUpdate::States(states) => new_state.states = states,
                FilterUpdate::Modalities(modalities) => new_state.modalities = modalities,
                FilterUpdate::ServiceTypes(service_types) => {
                    new_state.service_types = service_types;
                }
                FilterUpdate::SelectedOrder(selected) => new_state.selected_order = selected,
                FilterUpdate::OnTimeStatus(status) => new_state.on_time_status = status,
            }
            format!("Replaced field '{field}'")
        }
        FilterCommand::ToggleArrayFilter(toggle) => {
            let label: &'static str = toggle.label();
            let field: &'static str = toggle.facet().field();
            let selected: bool = match toggle {
                FacetToggle::Month(month) => toggle_member(&mut new_state.months, month),
                FacetToggle::Region(region) => toggle_member(&mut new_state.regions, region),
                FacetToggle::State(uf) => toggle_member(&mut new_state.states, uf),
                FacetToggle::Modality(modality) => {
                    toggle_member(&mut new_state.modalities, modality)
                }
                FacetToggle::ServiceType(service_type) => {
                    toggle_member(&mut new_state.service_types, service_type)
                }
            };
            if selected {
                format!("Added '{label}' to '{field}'")
            } else {
                format!("Removed '{label}' from '{field}'")
            }
        }
        FilterCommand::ClearFilters => {
            new_state = FilterState::default();
            String::from("Reset all filters to defaults")
        }
    };

    let change: FilterChange = FilterChange {
        action,
        details,
        before: state.summary(),
        after: new_state.summary(),
    };

    FilterTransition { new_state, change }
}
