// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Response data transfer objects.

use crate::views::{BarChartEntry, GaugeView, MapView, MetricCard};
use painel::{CategoryCount, FilterState, RegionShare, SummaryMetrics};
use painel_domain::{Modality, OrderStatus, ServiceType, StateCode};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything a dashboard renderer needs for one filter state.
///
/// Recomputed in full from the record store and the current filters; never
/// cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// The filter state the snapshot was computed for.
    pub filters: FilterState,
    /// Whether any set facet is restricted.
    pub has_active_filters: bool,
    /// Number of line items joined to the filtered orders.
    pub item_count: usize,
    /// Headline counts.
    pub metrics: SummaryMetrics,
    /// Headline cards: total, on time, late.
    pub metric_cards: Vec<MetricCard>,
    /// On-time performance gauge.
    pub gauge: GaugeView,
    /// Dense region distribution.
    pub regions: Vec<RegionShare>,
    /// Region chart slices with highlight flags.
    pub region_chart: Vec<BarChartEntry>,
    /// Modality counts, most frequent first.
    pub modalities: Vec<CategoryCount<Modality>>,
    /// Modality bar chart.
    pub modality_chart: Vec<BarChartEntry>,
    /// Service type counts, most frequent first.
    pub service_types: Vec<CategoryCount<ServiceType>>,
    /// Service type bar chart.
    pub service_type_chart: Vec<BarChartEntry>,
    /// Status counts, in enumeration order.
    pub statuses: Vec<CategoryCount<OrderStatus>>,
    /// Sparse per-state counts.
    pub states: BTreeMap<StateCode, usize>,
    /// Choropleth map.
    pub map: MapView,
}
