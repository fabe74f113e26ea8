// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The multi-facet predicate.
//!
//! A record passes when every active facet accepts it. An empty facet set is
//! pass-through, never "exclude everything".

use crate::state::FilterState;
use painel_domain::{LineItem, Order};
use std::collections::{BTreeSet, HashSet};

/// Tests membership in a facet set, treating the empty set as "no restriction".
fn facet_accepts<T: Ord>(selected: &BTreeSet<T>, value: &T) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Decides whether a single order passes the filter state.
///
/// Facets are evaluated in a fixed order (month, region, state, modality,
/// service type, on-time status) and the first failing facet short-circuits.
/// The year and the selected order are not predicate facets.
#[must_use]
pub fn matches(order: &Order, state: &FilterState) -> bool {
    facet_accepts(&state.months, &order.delivery_month())
        && facet_accepts(&state.regions, &order.region)
        && facet_accepts(&state.states, &order.state)
        && facet_accepts(&state.modalities, &order.modality)
        && facet_accepts(&state.service_types, &order.service_type)
        && state.on_time_status.accepts(order.on_time)
}

/// Narrows the record store's orders to those passing the filter state.
///
/// The relative order of the input is preserved.
#[must_use]
pub fn filter_orders<'a>(orders: &'a [Order], state: &FilterState) -> Vec<&'a Order> {
    orders.iter().filter(|o| matches(o, state)).collect()
}

/// Selects the line items that belong to an already-filtered order subset.
///
/// This is a join on order number, not a second predicate. Items whose order
/// number matches no order in `filtered_orders` are left out silently.
#[must_use]
pub fn filter_line_items<'a>(items: &'a [LineItem], filtered_orders: &[&Order]) -> Vec<&'a LineItem> {
    let order_numbers: HashSet<&str> = filtered_orders
        .iter()
        .map(|o| o.order_number.as_str())
        .collect();

    items
        .iter()
        .filter(|item| order_numbers.contains(item.order_number.as_str()))
        .collect()
}
