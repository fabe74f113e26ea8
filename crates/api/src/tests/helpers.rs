// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{Dashboard, RecordStore};
use painel_domain::{
    LineItem, Modality, Order, OrderStatus, ServiceType, StateCode, Subgroup,
};
use time::macros::date;

pub fn create_test_order(
    movement_number: &str,
    order_number: &str,
    state: StateCode,
    on_time: bool,
    service_type: ServiceType,
    modality: Modality,
    origin_city: &str,
) -> Order {
    Order::new(
        format!("PED-{order_number}"),
        String::from(movement_number),
        String::from(order_number),
        service_type,
        modality,
        String::from(origin_city),
        state,
        state.region(),
        String::from("99TEC_1885_COBRANÇA EXTRA PPC"),
        OrderStatus::Finalizado,
        on_time,
        date!(2024 - 06 - 12),
    )
}

pub fn create_test_item(
    order_number: &str,
    item_code: &str,
    description: &str,
    quantity: u32,
    total_volume: f64,
) -> LineItem {
    LineItem::new(
        String::from(order_number),
        String::from(item_code),
        String::from(description),
        Subgroup::Protecao,
        quantity,
        total_volume,
        2500.0,
    )
}

/// Four orders: PR on time, SC late, AM on time, SP on time.
pub fn create_test_orders() -> Vec<Order> {
    vec![
        create_test_order(
            "116418",
            "84249",
            StateCode::PR,
            true,
            ServiceType::Entrega,
            Modality::Rodoviario,
            "Curitiba",
        ),
        create_test_order(
            "116419",
            "84250",
            StateCode::SC,
            false,
            ServiceType::Coleta,
            Modality::Aereo,
            "Porto Alegre",
        ),
        create_test_order(
            "116420",
            "84251",
            StateCode::AM,
            true,
            ServiceType::Difal,
            Modality::Exclusivo,
            "Manaus",
        ),
        create_test_order(
            "116421",
            "84252",
            StateCode::SP,
            true,
            ServiceType::Entrega,
            Modality::Aereo,
            "São Paulo",
        ),
    ]
}

/// Five items; the last one points at an order that does not exist.
pub fn create_test_items() -> Vec<LineItem> {
    vec![
        create_test_item("84249", "ITM-0003", "CAPACETE MODELO X", 10, 50.0),
        create_test_item("84249", "ITM-0001", "LUVAS DE PROTEÇÃO", 2, 12.5),
        create_test_item("84250", "ITM-0002", "JAQUETA TÉRMICA", 30, 100.0),
        create_test_item("84251", "ITM-0004", "BOTAS IMPERMEÁVEIS", 7, 75.0),
        create_test_item("99999", "ITM-0005", "COLETE REFLETIVO", 1, 10.0),
    ]
}

pub fn create_test_dashboard() -> Dashboard {
    let records: RecordStore = RecordStore::new(create_test_orders(), create_test_items())
        .expect("test records should be valid");
    Dashboard::new(records)
}
