// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_mixed_orders, create_scenario_orders, create_test_item, create_test_order,
};
use crate::{FilterState, OnTimeStatus, filter_line_items, filter_orders, matches};
use painel_domain::{LineItem, Modality, Month, Order, Region, ServiceType, StateCode};
use std::collections::BTreeSet;

#[test]
fn test_default_state_accepts_every_order() {
    let orders: Vec<Order> = create_mixed_orders();
    let state: FilterState = FilterState::default();

    let filtered: Vec<&Order> = filter_orders(&orders, &state);

    assert_eq!(filtered.len(), orders.len());
    assert!(orders.iter().all(|o| matches(o, &state)));
}

#[test]
fn test_single_region_facet() {
    let orders: Vec<Order> = create_scenario_orders();
    let mut state: FilterState = FilterState::default();
    state.regions.insert(Region::Sul);

    let filtered: Vec<&Order> = filter_orders(&orders, &state);

    let states: Vec<StateCode> = filtered.iter().map(|o| o.state).collect();
    assert_eq!(states, vec![StateCode::PR, StateCode::SC]);
}

#[test]
fn test_facets_combine_as_conjunction() {
    let orders: Vec<Order> = create_scenario_orders();
    let mut state: FilterState = FilterState::default();
    state.regions.insert(Region::Sul);
    state.states.insert(StateCode::PR);

    let filtered: Vec<&Order> = filter_orders(&orders, &state);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].state, StateCode::PR);
}

#[test]
fn test_values_within_one_facet_combine_as_union() {
    let orders: Vec<Order> = create_scenario_orders();
    let mut state: FilterState = FilterState::default();
    state.states = BTreeSet::from([StateCode::PR, StateCode::AM]);

    let filtered: Vec<&Order> = filter_orders(&orders, &state);

    assert_eq!(filtered.len(), 2);
}

#[test]
fn test_contradictory_facets_yield_empty_subset() {
    let orders: Vec<Order> = create_scenario_orders();
    let mut state: FilterState = FilterState::default();
    state.regions.insert(Region::Norte);
    state.states.insert(StateCode::PR);

    assert!(filter_orders(&orders, &state).is_empty());
}

#[test]
fn test_month_facet_uses_delivery_date() {
    let orders: Vec<Order> = create_mixed_orders();
    let mut state: FilterState = FilterState::default();
    state.months.insert(Month::Marco);

    let filtered: Vec<&Order> = filter_orders(&orders, &state);

    let numbers: Vec<&str> = filtered.iter().map(|o| o.order_number.as_str()).collect();
    assert_eq!(numbers, vec!["2002", "2003"]);
}

#[test]
fn test_modality_and_service_type_facets() {
    let orders: Vec<Order> = create_mixed_orders();
    let mut state: FilterState = FilterState::default();
    state.modalities.insert(Modality::Aereo);

    assert_eq!(filter_orders(&orders, &state).len(), 3);

    state.service_types.insert(ServiceType::Entrega);
    let filtered: Vec<&Order> = filter_orders(&orders, &state);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].order_number, "2005");
}

#[test]
fn test_on_time_status_selector() {
    let orders: Vec<Order> = create_mixed_orders();
    let mut state: FilterState = FilterState::default();

    state.on_time_status = OnTimeStatus::OnTimeOnly;
    let on_time: Vec<&Order> = filter_orders(&orders, &state);
    assert_eq!(on_time.len(), 4);
    assert!(on_time.iter().all(|o| o.on_time));

    state.on_time_status = OnTimeStatus::LateOnly;
    let late: Vec<&Order> = filter_orders(&orders, &state);
    assert_eq!(late.len(), 2);
    assert!(late.iter().all(|o| !o.on_time));
}

#[test]
fn test_year_and_selected_order_do_not_filter() {
    let orders: Vec<Order> = create_mixed_orders();
    let mut state: FilterState = FilterState::default();
    state.year = 2020;
    state.selected_order = Some(String::from("PED-2001"));

    assert_eq!(filter_orders(&orders, &state).len(), orders.len());
}

#[test]
fn test_filter_orders_preserves_input_order() {
    let orders: Vec<Order> = create_mixed_orders();
    let mut state: FilterState = FilterState::default();
    state.on_time_status = OnTimeStatus::OnTimeOnly;

    let numbers: Vec<&str> = filter_orders(&orders, &state)
        .iter()
        .map(|o| o.order_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["2001", "2003", "2004", "2006"]);
}

#[test]
fn test_line_items_join_on_filtered_orders() {
    let orders: Vec<Order> = create_scenario_orders();
    let items: Vec<LineItem> = vec![
        create_test_item("1001", "ITM-1"),
        create_test_item("1003", "ITM-2"),
        create_test_item("1001", "ITM-3"),
        create_test_item("1002", "ITM-4"),
    ];
    let mut state: FilterState = FilterState::default();
    state.on_time_status = OnTimeStatus::OnTimeOnly;

    let filtered: Vec<&Order> = filter_orders(&orders, &state);
    let joined: Vec<&LineItem> = filter_line_items(&items, &filtered);

    let codes: Vec<&str> = joined.iter().map(|i| i.item_code.as_str()).collect();
    assert_eq!(codes, vec!["ITM-1", "ITM-2", "ITM-3"]);
}

#[test]
fn test_line_items_with_unknown_order_are_excluded() {
    let orders: Vec<Order> = vec![create_test_order("1001", StateCode::PR, true)];
    let items: Vec<LineItem> = vec![
        create_test_item("1001", "ITM-1"),
        create_test_item("9999", "ITM-ORPHAN"),
    ];

    let filtered: Vec<&Order> = filter_orders(&orders, &FilterState::default());
    let joined: Vec<&LineItem> = filter_line_items(&items, &filtered);

    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].item_code, "ITM-1");
}

#[test]
fn test_line_items_empty_when_no_orders_pass() {
    let orders: Vec<Order> = create_scenario_orders();
    let items: Vec<LineItem> = vec![create_test_item("1001", "ITM-1")];
    let mut state: FilterState = FilterState::default();
    state.regions.insert(Region::CentroOeste);

    let filtered: Vec<&Order> = filter_orders(&orders, &state);

    assert!(filter_line_items(&items, &filtered).is_empty());
}
