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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod aggregate;
mod apply;
mod command;
mod error;
mod predicate;
mod state;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use aggregate::{
    CategoryCount, RegionShare, SummaryMetrics, modality_distribution, percentage,
    region_distribution, service_type_distribution, state_distribution, status_distribution,
    summary_metrics,
};
pub use apply::apply;
pub use command::{Facet, FacetToggle, FilterCommand, FilterUpdate};
pub use error::CoreError;
pub use predicate::{filter_line_items, filter_orders, matches};
pub use state::{
    DEFAULT_YEAR, FilterChange, FilterState, FilterTransition, OnTimeStatus, SELECTABLE_YEARS,
    has_active_filters,
};
pub use store::{FilterStore, FilterSubscriber, SubscriptionId};
