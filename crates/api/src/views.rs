// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! View models derived from aggregates and the filter state.
//!
//! These carry the presentation decisions (thresholds, shading, highlight
//! flags) so every renderer draws the same thing.

use painel::{CategoryCount, FilterState, RegionShare, SummaryMetrics};
use painel_domain::StateCode;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// On-time percentage below which the gauge shows a warning.
pub const ON_TIME_TARGET: f64 = 95.0;

/// Late percentage above which the late-orders card turns red.
pub const LATE_ALERT_THRESHOLD: f64 = 5.0;

/// Lightness of the least busy state with orders.
const MAP_MIN_LIGHTNESS: f64 = 25.0;

/// Lightness range spread over the busiest state.
const MAP_LIGHTNESS_SPAN: f64 = 35.0;

/// Color treatment of a metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTone {
    /// Neutral.
    Default,
    /// Good news.
    Success,
    /// Needs attention.
    Danger,
}

/// One headline metric card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    /// Card title.
    pub title: &'static str,
    /// Headline count.
    pub value: usize,
    /// Share of the total, when the card shows one.
    pub percentage: Option<f64>,
    /// Color treatment.
    pub tone: CardTone,
}

/// Builds the three headline cards: total, on time, late.
///
/// The late card uses `CardTone::Danger` when more than
/// [`LATE_ALERT_THRESHOLD`] percent of the orders are late.
#[must_use]
pub fn metric_cards(metrics: &SummaryMetrics) -> Vec<MetricCard> {
    let late_tone: CardTone = if metrics.late_percentage > LATE_ALERT_THRESHOLD {
        CardTone::Danger
    } else {
        CardTone::Default
    };

    vec![
        MetricCard {
            title: "Quantidade de Pedidos",
            value: metrics.total,
            percentage: None,
            tone: CardTone::Default,
        },
        MetricCard {
            title: "Qtde no Prazo",
            value: metrics.on_time,
            percentage: Some(metrics.on_time_percentage),
            tone: CardTone::Success,
        },
        MetricCard {
            title: "Qtde fora do Prazo",
            value: metrics.late,
            percentage: Some(metrics.late_percentage),
            tone: late_tone,
        },
    ]
}

/// The on-time performance gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeView {
    /// On-time percentage, 0-100.
    pub percentage: f64,
    /// Set when the percentage is below [`ON_TIME_TARGET`].
    pub warning: bool,
}

/// Builds the gauge from the headline metrics.
#[must_use]
pub fn gauge(metrics: &SummaryMetrics) -> GaugeView {
    GaugeView {
        percentage: metrics.on_time_percentage,
        warning: metrics.on_time_percentage < ON_TIME_TARGET,
    }
}

/// One bar of a horizontal bar chart, or one slice of the region chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartEntry {
    /// Category label.
    pub name: &'static str,
    /// Number of orders.
    pub value: usize,
    /// Bar width relative to the largest bar, 0-100.
    pub width: f64,
    /// Whether the category is highlighted by the current facet selection.
    pub active: bool,
}

/// Turns ranked counts into bars.
///
/// An entry is active when its facet selection is empty or contains it.
///
/// # Arguments
///
/// * `counts` - Counts, in display order
/// * `selected` - The facet's current selection
/// * `label` - Maps a category to its display label
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bar_chart<T, L>(
    counts: &[CategoryCount<T>],
    selected: &BTreeSet<T>,
    label: L,
) -> Vec<BarChartEntry>
where
    T: Copy + Ord,
    L: Fn(T) -> &'static str,
{
    let max: usize = counts.iter().map(|c| c.value).max().unwrap_or(0);
    counts
        .iter()
        .map(|count| BarChartEntry {
            name: label(count.name),
            value: count.value,
            width: if max == 0 {
                0.0
            } else {
                count.value as f64 / max as f64 * 100.0
            },
            active: selected.is_empty() || selected.contains(&count.name),
        })
        .collect()
}

/// Turns the region distribution into highlighted chart slices.
#[must_use]
pub fn region_chart(shares: &[RegionShare], filters: &FilterState) -> Vec<BarChartEntry> {
    let counts: Vec<CategoryCount<_>> = shares
        .iter()
        .map(|share| CategoryCount {
            name: share.region,
            value: share.count,
        })
        .collect();
    bar_chart(&counts, &filters.regions, |region| region.as_str())
}

/// One state on the choropleth map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateShade {
    /// State code.
    pub state: StateCode,
    /// Full state name.
    pub name: &'static str,
    /// Number of orders.
    pub value: usize,
    /// Count relative to the busiest state, 0-1.
    pub intensity: f64,
    /// Fill lightness in percent, or `None` for the muted shade of an empty state.
    pub lightness: Option<f64>,
    /// Whether the state is highlighted by the state facet.
    pub active: bool,
    /// Whether the state is explicitly selected.
    pub selected: bool,
}

/// The choropleth map: every state, in code order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// Largest per-state count, never less than 1.
    pub max: usize,
    /// One entry per state.
    pub states: Vec<StateShade>,
}

/// Shades every state by its order count.
///
/// Intensity is `count / max(max count, 1)`; lightness runs from 25% to 60%.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn map_view(distribution: &BTreeMap<StateCode, usize>, filters: &FilterState) -> MapView {
    let max: usize = distribution.values().copied().max().unwrap_or(0).max(1);

    let states: Vec<StateShade> = StateCode::ALL
        .into_iter()
        .map(|state| {
            let value: usize = distribution.get(&state).copied().unwrap_or(0);
            let intensity: f64 = value as f64 / max as f64;
            StateShade {
                state,
                name: state.name(),
                value,
                intensity,
                lightness: (value > 0).then(|| intensity.mul_add(MAP_LIGHTNESS_SPAN, MAP_MIN_LIGHTNESS)),
                active: filters.states.is_empty() || filters.states.contains(&state),
                selected: filters.states.contains(&state),
            }
        })
        .collect();

    MapView { max, states }
}
