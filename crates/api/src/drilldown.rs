// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Item-row drill-down.
//!
//! Picking a row of the items table narrows the dashboard to the owning
//! order's state, modality, service type and region. Picking the same row
//! again lifts those restrictions.

use crate::dashboard::Dashboard;
use painel::{FacetToggle, FilterChange, FilterState};
use painel_domain::LineItem;
use tracing::debug;

/// Selected row of the items table.
///
/// This is local view state; only the facet toggles it issues reach the
/// filter state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemSelection {
    selected_row: Option<String>,
}

fn row_key(item: &LineItem) -> String {
    format!("{}-{}", item.order_number, item.item_code)
}

fn is_selected(filters: &FilterState, toggle: FacetToggle) -> bool {
    match toggle {
        FacetToggle::Month(month) => filters.months.contains(&month),
        FacetToggle::Region(region) => filters.regions.contains(&region),
        FacetToggle::State(state) => filters.states.contains(&state),
        FacetToggle::Modality(modality) => filters.modalities.contains(&modality),
        FacetToggle::ServiceType(service_type) => filters.service_types.contains(&service_type),
    }
}

impl ItemSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected_row: None }
    }

    /// Returns the key (`{order number}-{item code}`) of the selected row.
    #[must_use]
    pub fn selected_row(&self) -> Option<&str> {
        self.selected_row.as_deref()
    }

    /// Checks whether the given item's row is selected.
    #[must_use]
    pub fn is_row_selected(&self, item: &LineItem) -> bool {
        self.selected_row.as_deref() == Some(row_key(item).as_str())
    }

    /// Handles a click on an items-table row.
    ///
    /// Selecting a row adds each of the owning order's state, modality, service
    /// type and region to its facet when absent. Clicking the selected row
    /// again clears the selection and removes those values when present. Items
    /// whose order is not in the record store are ignored.
    ///
    /// # Returns
    ///
    /// The change records of the toggles that were dispatched, in order.
    pub fn select_item_row(&mut self, dashboard: &mut Dashboard, item: &LineItem) -> Vec<FilterChange> {
        let Some(order) = dashboard.records().find_order(&item.order_number) else {
            debug!(
                order_number = %item.order_number,
                item_code = %item.item_code,
                "Ignoring drill-down on item without a known order"
            );
            return Vec::new();
        };

        let toggles: [FacetToggle; 4] = [
            FacetToggle::State(order.state),
            FacetToggle::Modality(order.modality),
            FacetToggle::ServiceType(order.service_type),
            FacetToggle::Region(order.region),
        ];

        let key: String = row_key(item);
        let selecting: bool = self.selected_row.as_deref() != Some(key.as_str());
        self.selected_row = selecting.then_some(key);

        let mut changes: Vec<FilterChange> = Vec::new();
        for toggle in toggles {
            if is_selected(dashboard.filter_state(), toggle) != selecting {
                changes.push(dashboard.toggle_array_filter(toggle));
            }
        }
        changes
    }
}
