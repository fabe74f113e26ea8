// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deterministic sample records.
//!
//! The same seed always yields the same orders and items, so dashboard output
//! can be compared between runs.

use painel_domain::{
    LineItem, Modality, Order, OrderStatus, Region, ServiceType, StateCode, Subgroup,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use time::error::ComponentRange;
use time::{Date, Month};

/// Number of orders generated when none is requested.
pub const DEFAULT_ORDER_COUNT: usize = 134;

/// Calendar year of every generated delivery date.
pub const SAMPLE_YEAR: i32 = 2024;

const FIRST_ORDER_ID: usize = 100_000;
const FIRST_MOVEMENT_NUMBER: usize = 116_418;
const FIRST_ORDER_NUMBER: usize = 84_249;

/// Chance that an order is late.
const LATE_PROBABILITY: f64 = 0.0075;

const CAMPAIGNS: [&str; 4] = [
    "99TEC_1856_CAPACETES BHZ X SP",
    "99TEC_1831_S_ENTREGAS VIA FORTALEZ",
    "99TEC_1885_COBRANÇA EXTRA PPC",
    "99TEC_1819_4_ENTREGAS VIA FORTALEZ",
];

const ORIGIN_CITIES: [&str; 10] = [
    "São Paulo",
    "Rio de Janeiro",
    "Belo Horizonte",
    "Curitiba",
    "Porto Alegre",
    "Salvador",
    "Recife",
    "Fortaleza",
    "Brasília",
    "Manaus",
];

const ITEM_DESCRIPTIONS: [&str; 6] = [
    "CAPACETE MODELO X",
    "JAQUETA TÉRMICA",
    "LUVAS DE PROTEÇÃO",
    "ÓCULOS DE SEGURANÇA",
    "BOTAS IMPERMEÁVEIS",
    "COLETE REFLETIVO",
];

/// Generated orders and their line items.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleData {
    /// Generated orders.
    pub orders: Vec<Order>,
    /// Line items, one to three per order.
    pub items: Vec<LineItem>,
}

fn pick<'a, T>(rng: &mut StdRng, list: &'a [T]) -> &'a T {
    &list[rng.gen_range(0..list.len())]
}

fn delivery_date(rng: &mut StdRng) -> Result<Date, ComponentRange> {
    let month: Month = Month::January.nth_next(rng.gen_range(0..12));
    Date::from_calendar_date(SAMPLE_YEAR, month, rng.gen_range(1..=28))
}

fn sample_order(rng: &mut StdRng, index: usize) -> Result<Order, ComponentRange> {
    let region: Region = *pick(rng, &Region::ALL);
    let state: StateCode = *pick(rng, region.states());
    let on_time: bool = !rng.gen_bool(LATE_PROBABILITY);

    Ok(Order::new(
        format!("PED-{}", FIRST_ORDER_ID + index),
        (FIRST_MOVEMENT_NUMBER + index).to_string(),
        (FIRST_ORDER_NUMBER + index).to_string(),
        *pick(rng, &ServiceType::ALL),
        *pick(rng, &Modality::ALL),
        (*pick(rng, &ORIGIN_CITIES)).to_string(),
        state,
        region,
        (*pick(rng, &CAMPAIGNS)).to_string(),
        OrderStatus::Finalizado,
        on_time,
        delivery_date(rng)?,
    ))
}

fn sample_item(rng: &mut StdRng, order_number: &str) -> LineItem {
    LineItem::new(
        order_number.to_string(),
        format!("ITM-{}", rng.gen_range(0..10_000_u32)),
        (*pick(rng, &ITEM_DESCRIPTIONS)).to_string(),
        *pick(rng, &Subgroup::ALL),
        rng.gen_range(1..=50),
        f64::from(rng.gen_range(10..110_u32)),
        f64::from(rng.gen_range(100..5_100_u32)),
    )
}

/// Generates `order_count` orders with one to three items each.
///
/// Every order's state is drawn from its region, so the result always passes
/// record validation.
///
/// # Errors
///
/// Returns `ComponentRange` if a delivery date cannot be built.
pub fn generate(seed: u64, order_count: usize) -> Result<SampleData, ComponentRange> {
    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    let mut orders: Vec<Order> = Vec::with_capacity(order_count);
    let mut items: Vec<LineItem> = Vec::new();

    for index in 0..order_count {
        let order: Order = sample_order(&mut rng, index)?;
        let item_count: usize = rng.gen_range(1..=3);
        for _ in 0..item_count {
            items.push(sample_item(&mut rng, &order.order_number));
        }
        orders.push(order);
    }

    Ok(SampleData { orders, items })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use painel_domain::{validate_order, validate_records};
    use std::collections::HashMap;

    #[test]
    fn test_same_seed_same_records() {
        let first: SampleData = generate(7, DEFAULT_ORDER_COUNT).unwrap();
        let second: SampleData = generate(7, DEFAULT_ORDER_COUNT).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first: SampleData = generate(1, DEFAULT_ORDER_COUNT).unwrap();
        let second: SampleData = generate(2, DEFAULT_ORDER_COUNT).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_identifiers_are_sequential() {
        let sample: SampleData = generate(42, DEFAULT_ORDER_COUNT).unwrap();

        assert_eq!(sample.orders.len(), 134);
        assert_eq!(sample.orders[0].id, "PED-100000");
        assert_eq!(sample.orders[0].movement_number, "116418");
        assert_eq!(sample.orders[0].order_number, "84249");
        assert_eq!(sample.orders[133].id, "PED-100133");
        assert_eq!(sample.orders[133].order_number, "84382");
    }

    #[test]
    fn test_orders_are_consistent() {
        let sample: SampleData = generate(42, DEFAULT_ORDER_COUNT).unwrap();

        for order in &sample.orders {
            assert!(validate_order(order).is_ok(), "{order:?}");
            assert_eq!(order.delivery_date.year(), SAMPLE_YEAR);
            assert!(order.delivery_date.day() <= 28);
        }
        assert!(validate_records(&sample.orders, &sample.items).is_ok());
    }

    #[test]
    fn test_one_to_three_items_per_order() {
        let sample: SampleData = generate(42, DEFAULT_ORDER_COUNT).unwrap();
        let mut per_order: HashMap<&str, usize> = HashMap::new();
        for item in &sample.items {
            *per_order.entry(item.order_number.as_str()).or_insert(0) += 1;
        }

        assert_eq!(per_order.len(), sample.orders.len());
        assert!(per_order.values().all(|count| (1..=3).contains(count)));
    }

    #[test]
    fn test_item_amounts_in_range() {
        let sample: SampleData = generate(42, DEFAULT_ORDER_COUNT).unwrap();

        for item in &sample.items {
            assert!((1..=50).contains(&item.quantity));
            assert!((10.0..110.0).contains(&item.total_volume));
            assert!((100.0..5100.0).contains(&item.total_value));
            assert!(item.item_code.starts_with("ITM-"));
        }
    }

    #[test]
    fn test_zero_orders() {
        let sample: SampleData = generate(42, 0).unwrap();

        assert!(sample.orders.is_empty());
        assert!(sample.items.is_empty());
    }
}
