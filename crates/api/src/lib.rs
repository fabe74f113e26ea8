// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod dashboard;
mod drilldown;
mod error;
mod parse;
mod request_response;
mod table;
mod views;

#[cfg(test)]
mod tests;

pub use dashboard::{Dashboard, RecordStore};
pub use drilldown::ItemSelection;
pub use error::ApiError;
pub use parse::{parse_facet, parse_facet_toggle, parse_on_time_status, validate_year};
pub use request_response::DashboardSnapshot;
pub use table::{
    ITEMS_PAGE_SIZE, ItemSortField, ItemsTableQuery, ORDERS_PAGE_SIZE, OrderSortField,
    OrdersTableQuery, SortDirection, TablePage, TableSort, page_strict, paginate,
    query_items_table, query_orders_table,
};
pub use views::{
    BarChartEntry, CardTone, GaugeView, LATE_ALERT_THRESHOLD, MapView, MetricCard,
    ON_TIME_TARGET, StateShade, bar_chart, gauge, map_view, metric_cards, region_chart,
};
