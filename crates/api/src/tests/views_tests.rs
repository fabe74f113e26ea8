// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_orders;
use crate::{
    BarChartEntry, CardTone, GaugeView, MapView, MetricCard, StateShade, bar_chart, gauge,
    map_view, metric_cards, region_chart,
};
use painel::{
    CategoryCount, FacetToggle, FilterState, SummaryMetrics, apply, region_distribution,
    summary_metrics,
};
use painel_domain::{Modality, Order, Region, StateCode};
use std::collections::{BTreeMap, BTreeSet};

fn metrics_with(on_time_percentage: f64) -> SummaryMetrics {
    SummaryMetrics {
        total: 100,
        on_time: 0,
        late: 0,
        on_time_percentage,
        late_percentage: 100.0 - on_time_percentage,
    }
}

fn shade(map: &MapView, state: StateCode) -> &StateShade {
    map.states.iter().find(|s| s.state == state).unwrap()
}

#[test]
fn test_metric_cards_for_test_orders() {
    let orders: Vec<Order> = create_test_orders();
    let refs: Vec<&Order> = orders.iter().collect();

    let cards: Vec<MetricCard> = metric_cards(&summary_metrics(&refs));

    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].title, "Quantidade de Pedidos");
    assert_eq!(cards[0].value, 4);
    assert_eq!(cards[0].percentage, None);
    assert_eq!(cards[1].tone, CardTone::Success);
    assert_eq!(cards[1].value, 3);
    assert_eq!(cards[2].value, 1);
    assert_eq!(cards[2].percentage, Some(25.0));
    assert_eq!(cards[2].tone, CardTone::Danger);
}

#[test]
fn test_late_card_threshold_is_exclusive() {
    let at_threshold: Vec<MetricCard> = metric_cards(&metrics_with(95.0));
    assert_eq!(at_threshold[2].tone, CardTone::Default);

    let above: Vec<MetricCard> = metric_cards(&metrics_with(94.0));
    assert_eq!(above[2].tone, CardTone::Danger);

    let empty: Vec<MetricCard> = metric_cards(&summary_metrics(&[]));
    assert_eq!(empty[2].tone, CardTone::Default);
}

#[test]
fn test_gauge_warns_below_target() {
    let on_target: GaugeView = gauge(&metrics_with(95.0));
    assert!(!on_target.warning);

    let below: GaugeView = gauge(&metrics_with(94.5));
    assert!(below.warning);
    assert!((below.percentage - 94.5).abs() < f64::EPSILON);
}

#[test]
fn test_bar_chart_widths_relative_to_largest() {
    let counts: Vec<CategoryCount<Modality>> = vec![
        CategoryCount {
            name: Modality::Aereo,
            value: 4,
        },
        CategoryCount {
            name: Modality::Exclusivo,
            value: 2,
        },
        CategoryCount {
            name: Modality::Rodoviario,
            value: 0,
        },
    ];

    let bars: Vec<BarChartEntry> = bar_chart(&counts, &BTreeSet::new(), |m| m.as_str());

    let widths: Vec<f64> = bars.iter().map(|b| b.width).collect();
    assert_eq!(widths, vec![100.0, 50.0, 0.0]);
    assert_eq!(bars[0].name, "AÉREO");
    assert!(bars.iter().all(|b| b.active));
}

#[test]
fn test_bar_chart_highlights_selection() {
    let counts: Vec<CategoryCount<Modality>> = vec![
        CategoryCount {
            name: Modality::Aereo,
            value: 4,
        },
        CategoryCount {
            name: Modality::Exclusivo,
            value: 2,
        },
    ];
    let selected: BTreeSet<Modality> = BTreeSet::from([Modality::Exclusivo]);

    let bars: Vec<BarChartEntry> = bar_chart(&counts, &selected, |m| m.as_str());

    assert!(!bars[0].active);
    assert!(bars[1].active);
}

#[test]
fn test_bar_chart_all_zero_has_zero_widths() {
    let counts: Vec<CategoryCount<Modality>> = vec![CategoryCount {
        name: Modality::Aereo,
        value: 0,
    }];

    let bars: Vec<BarChartEntry> = bar_chart(&counts, &BTreeSet::new(), |m| m.as_str());

    assert!(bars[0].width.abs() < f64::EPSILON);
}

#[test]
fn test_region_chart_follows_region_facet() {
    let orders: Vec<Order> = create_test_orders();
    let refs: Vec<&Order> = orders.iter().collect();
    let filters: FilterState =
        apply(&FilterState::default(), FacetToggle::Region(Region::Sul).into()).new_state;

    let slices: Vec<BarChartEntry> = region_chart(&region_distribution(&refs), &filters);

    assert_eq!(slices.len(), 5);
    let sul: &BarChartEntry = slices.iter().find(|s| s.name == "Sul").unwrap();
    assert_eq!(sul.value, 2);
    assert!(sul.active);
    assert!(slices.iter().filter(|s| s.active).count() == 1);
}

#[test]
fn test_map_view_shades_by_intensity() {
    let distribution: BTreeMap<StateCode, usize> =
        BTreeMap::from([(StateCode::SP, 4), (StateCode::PR, 2)]);

    let map: MapView = map_view(&distribution, &FilterState::default());

    assert_eq!(map.max, 4);
    assert_eq!(map.states.len(), 27);
    assert_eq!(shade(&map, StateCode::SP).lightness, Some(60.0));
    assert_eq!(shade(&map, StateCode::PR).lightness, Some(42.5));
    assert_eq!(shade(&map, StateCode::PR).name, "Paraná");
    assert_eq!(shade(&map, StateCode::AC).lightness, None);
    assert_eq!(shade(&map, StateCode::AC).value, 0);
    assert!(map.states.iter().all(|s| s.active && !s.selected));
}

#[test]
fn test_map_view_with_no_orders() {
    let map: MapView = map_view(&BTreeMap::new(), &FilterState::default());

    assert_eq!(map.max, 1);
    assert!(map.states.iter().all(|s| s.lightness.is_none()));
}

#[test]
fn test_map_view_highlights_selected_states() {
    let distribution: BTreeMap<StateCode, usize> = BTreeMap::from([(StateCode::SP, 4)]);
    let filters: FilterState =
        apply(&FilterState::default(), FacetToggle::State(StateCode::PR).into()).new_state;

    let map: MapView = map_view(&distribution, &filters);

    assert!(shade(&map, StateCode::PR).active);
    assert!(shade(&map, StateCode::PR).selected);
    assert!(!shade(&map, StateCode::SP).active);
}
