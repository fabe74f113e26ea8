// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The dashboard facade.
//!
//! A `Dashboard` owns the immutable record store and the filter store. Views
//! request filter changes through it and read recomputed subsets, aggregates
//! and view models back.

use crate::error::ApiError;
use crate::request_response::DashboardSnapshot;
use crate::table::{
    ItemsTableQuery, OrdersTableQuery, TablePage, query_items_table, query_orders_table,
};
use crate::views::{bar_chart, gauge, map_view, metric_cards, region_chart};
use painel::{
    CategoryCount, FacetToggle, FilterChange, FilterCommand, FilterState, FilterStore, FilterSubscriber,
    FilterUpdate, RegionShare, SubscriptionId, SummaryMetrics, filter_line_items, filter_orders,
    has_active_filters, modality_distribution, region_distribution, service_type_distribution,
    state_distribution, status_distribution, summary_metrics,
};
use painel_domain::{LineItem, Modality, Order, ServiceType, StateCode, validate_records};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// The loaded orders and line items.
///
/// Loaded once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordStore {
    orders: Vec<Order>,
    items: Vec<LineItem>,
}

impl RecordStore {
    /// Validates and wraps a record set.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Domain` if an order's state is outside its region,
    /// an order number is duplicated or a line item has non-positive amounts.
    pub fn new(orders: Vec<Order>, items: Vec<LineItem>) -> Result<Self, ApiError> {
        validate_records(&orders, &items)?;
        info!(
            orders = orders.len(),
            items = items.len(),
            "Loaded record store"
        );
        Ok(Self { orders, items })
    }

    /// All orders, in load order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// All line items, in load order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up an order by order number.
    #[must_use]
    pub fn find_order(&self, order_number: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.order_number == order_number)
    }
}

/// The record store plus the filter state authority.
#[derive(Debug)]
pub struct Dashboard {
    records: RecordStore,
    filters: FilterStore,
}

impl Dashboard {
    /// Creates a dashboard with default filters.
    #[must_use]
    pub fn new(records: RecordStore) -> Self {
        Self::with_filters(records, FilterState::default())
    }

    /// Creates a dashboard starting from the given filters.
    #[must_use]
    pub const fn with_filters(records: RecordStore, filters: FilterState) -> Self {
        Self {
            records,
            filters: FilterStore::with_state(filters),
        }
    }

    /// Returns the record store.
    #[must_use]
    pub const fn records(&self) -> &RecordStore {
        &self.records
    }

    /// Returns a snapshot of the current filter state.
    #[must_use]
    pub fn filters(&self) -> FilterState {
        self.filters.snapshot()
    }

    /// Returns the current filter state without copying it.
    #[must_use]
    pub const fn filter_state(&self) -> &FilterState {
        self.filters.state()
    }

    /// Applies a filter command.
    pub fn dispatch(&mut self, command: FilterCommand) -> FilterChange {
        self.filters.dispatch(command)
    }

    /// Replaces one field of the filter state.
    pub fn update_filter(&mut self, update: FilterUpdate) -> FilterChange {
        self.filters.update_filter(update)
    }

    /// Toggles one value of a set facet.
    pub fn toggle_array_filter(&mut self, toggle: FacetToggle) -> FilterChange {
        self.filters.toggle_array_filter(toggle)
    }

    /// Resets every filter to its default.
    pub fn clear_filters(&mut self) -> FilterChange {
        self.filters.clear_filters()
    }

    /// Marks an order as picked in the orders table.
    pub fn select_order(&mut self, order: &Order) -> FilterChange {
        self.update_filter(FilterUpdate::SelectedOrder(Some(order.id.clone())))
    }

    /// Registers a subscriber for filter changes.
    pub fn subscribe<S>(&mut self, subscriber: S) -> SubscriptionId
    where
        S: FilterSubscriber + 'static,
    {
        self.filters.subscribe(subscriber)
    }

    /// Removes a subscriber. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.filters.unsubscribe(id)
    }

    /// Orders passing the current filters, in load order.
    #[must_use]
    pub fn filtered_orders(&self) -> Vec<&Order> {
        filter_orders(self.records.orders(), self.filters.state())
    }

    /// Line items of the filtered orders, in load order.
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&LineItem> {
        let orders: Vec<&Order> = self.filtered_orders();
        filter_line_items(self.records.items(), &orders)
    }

    /// Queries the orders table over the filtered orders.
    #[must_use]
    pub fn orders_table(&self, query: &OrdersTableQuery) -> TablePage<&Order> {
        query_orders_table(&self.filtered_orders(), query)
    }

    /// Queries the items table over the filtered items.
    #[must_use]
    pub fn items_table(&self, query: &ItemsTableQuery) -> TablePage<&LineItem> {
        query_items_table(&self.filtered_items(), query)
    }

    /// Recomputes every aggregate and view model for the current filters.
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        let filters: &FilterState = self.filters.state();
        let orders: Vec<&Order> = self.filtered_orders();
        let item_count: usize = filter_line_items(self.records.items(), &orders).len();

        let metrics: SummaryMetrics = summary_metrics(&orders);
        let regions: Vec<RegionShare> = region_distribution(&orders);
        let modalities: Vec<CategoryCount<Modality>> = modality_distribution(&orders);
        let service_types: Vec<CategoryCount<ServiceType>> = service_type_distribution(&orders);
        let states: BTreeMap<StateCode, usize> = state_distribution(&orders);

        debug!(
            revision = self.filters.revision(),
            orders = metrics.total,
            items = item_count,
            "Recomputed dashboard snapshot"
        );

        DashboardSnapshot {
            filters: filters.clone(),
            has_active_filters: has_active_filters(filters),
            item_count,
            metric_cards: metric_cards(&metrics),
            gauge: gauge(&metrics),
            metrics,
            region_chart: region_chart(&regions, filters),
            regions,
            modality_chart: bar_chart(&modalities, &filters.modalities, |m| m.as_str()),
            modalities,
            service_type_chart: bar_chart(&service_types, &filters.service_types, |t| {
                t.as_str()
            }),
            service_types,
            statuses: status_distribution(&orders),
            map: map_view(&states, filters),
            states,
        }
    }
}
