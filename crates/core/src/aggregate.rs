// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregations over a filtered order subset.
//!
//! Every function here is a pure reduction. None of them fail on empty input:
//! counts default to zero and percentages to 0.

use painel_domain::{Modality, Order, OrderStatus, Region, ServiceType, StateCode};
use serde::Serialize;
use std::collections::BTreeMap;

/// Computes `part / total * 100`, or 0 when `total` is 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64) * 100.0
}

/// Headline counts for the metric cards.
///
/// Invariant: `on_time + late == total`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// Number of orders.
    pub total: usize,
    /// Number of orders delivered on time.
    #[serde(rename = "noPrazo")]
    pub on_time: usize,
    /// Number of late orders.
    #[serde(rename = "foraPrazo")]
    pub late: usize,
    /// Share of on-time orders, 0-100.
    #[serde(rename = "percentualNoPrazo")]
    pub on_time_percentage: f64,
    /// Share of late orders, 0-100.
    #[serde(rename = "percentualForaPrazo")]
    pub late_percentage: f64,
}

/// Computes the headline metrics.
#[must_use]
pub fn summary_metrics(orders: &[&Order]) -> SummaryMetrics {
    let total: usize = orders.len();
    let on_time: usize = orders.iter().filter(|o| o.on_time).count();
    let late: usize = total - on_time;

    SummaryMetrics {
        total,
        on_time,
        late,
        on_time_percentage: percentage(on_time, total),
        late_percentage: percentage(late, total),
    }
}

/// One slice of the region chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionShare {
    /// The region.
    #[serde(rename = "name")]
    pub region: Region,
    /// Number of orders in the region.
    #[serde(rename = "value")]
    pub count: usize,
    /// Share of the filtered total, formatted with two decimals.
    pub percentage: String,
}

/// Counts orders per region.
///
/// The result is dense: always five entries, in region display order, zero
/// counts included.
#[must_use]
pub fn region_distribution(orders: &[&Order]) -> Vec<RegionShare> {
    let total: usize = orders.len();
    Region::ALL
        .into_iter()
        .map(|region| {
            let count: usize = orders.iter().filter(|o| o.region == region).count();
            RegionShare {
                region,
                count,
                percentage: format!("{:.2}", percentage(count, total)),
            }
        })
        .collect()
}

/// A labelled count for bar charts and the status card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount<T> {
    /// The category.
    pub name: T,
    /// Number of orders in the category.
    pub value: usize,
}

/// Counts orders for every category of a closed domain, sorted by count descending.
///
/// `sort_by` is stable, so equal counts keep the domain's enumeration order.
fn ranked_counts<T, F>(domain: &[T], orders: &[&Order], key: F) -> Vec<CategoryCount<T>>
where
    T: Copy + PartialEq,
    F: Fn(&Order) -> T,
{
    let mut counts: Vec<CategoryCount<T>> = domain
        .iter()
        .map(|&name| CategoryCount {
            name,
            value: orders.iter().filter(|o| key(**o) == name).count(),
        })
        .collect();
    counts.sort_by(|a, b| b.value.cmp(&a.value));
    counts
}

/// Counts orders per modality, most frequent first.
#[must_use]
pub fn modality_distribution(orders: &[&Order]) -> Vec<CategoryCount<Modality>> {
    ranked_counts(&Modality::ALL, orders, |o| o.modality)
}

/// Counts orders per service type, most frequent first.
#[must_use]
pub fn service_type_distribution(orders: &[&Order]) -> Vec<CategoryCount<ServiceType>> {
    ranked_counts(&ServiceType::ALL, orders, |o| o.service_type)
}

/// Counts orders per status, in enumeration order.
#[must_use]
pub fn status_distribution(orders: &[&Order]) -> Vec<CategoryCount<OrderStatus>> {
    OrderStatus::ALL
        .into_iter()
        .map(|name| CategoryCount {
            name,
            value: orders.iter().filter(|o| o.status == name).count(),
        })
        .collect()
}

/// Counts orders per state.
///
/// The map is sparse: states without orders have no entry.
#[must_use]
pub fn state_distribution(orders: &[&Order]) -> BTreeMap<StateCode, usize> {
    let mut distribution: BTreeMap<StateCode, usize> = BTreeMap::new();
    for order in orders {
        *distribution.entry(order.state).or_insert(0) += 1;
    }
    distribution
}
