// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use painel_domain::{LineItem, Modality, Order, OrderStatus, ServiceType, StateCode, Subgroup};
use time::Date;
use time::macros::date;

pub fn create_test_order(order_number: &str, state: StateCode, on_time: bool) -> Order {
    create_test_order_full(
        order_number,
        state,
        on_time,
        ServiceType::Entrega,
        Modality::Rodoviario,
        date!(2024 - 05 - 10),
    )
}

pub fn create_test_order_full(
    order_number: &str,
    state: StateCode,
    on_time: bool,
    service_type: ServiceType,
    modality: Modality,
    delivery_date: Date,
) -> Order {
    Order::new(
        format!("PED-{order_number}"),
        format!("MOV-{order_number}"),
        String::from(order_number),
        service_type,
        modality,
        String::from("São Paulo"),
        state,
        state.region(),
        String::from("99TEC_1856_CAPACETES BHZ X SP"),
        OrderStatus::Finalizado,
        on_time,
        delivery_date,
    )
}

pub fn create_test_item(order_number: &str, item_code: &str) -> LineItem {
    LineItem::new(
        String::from(order_number),
        String::from(item_code),
        String::from("CAPACETE MODELO X"),
        Subgroup::Equipamentos,
        5,
        20.0,
        1500.0,
    )
}

/// Three orders: Sul/PR on time, Sul/SC late, Norte/AM on time.
pub fn create_scenario_orders() -> Vec<Order> {
    vec![
        create_test_order("1001", StateCode::PR, true),
        create_test_order("1002", StateCode::SC, false),
        create_test_order("1003", StateCode::AM, true),
    ]
}

/// A varied store covering every modality, service type and several months.
pub fn create_mixed_orders() -> Vec<Order> {
    vec![
        create_test_order_full(
            "2001",
            StateCode::SP,
            true,
            ServiceType::Entrega,
            Modality::Rodoviario,
            date!(2024 - 01 - 15),
        ),
        create_test_order_full(
            "2002",
            StateCode::RJ,
            false,
            ServiceType::Coleta,
            Modality::Aereo,
            date!(2024 - 03 - 02),
        ),
        create_test_order_full(
            "2003",
            StateCode::BA,
            true,
            ServiceType::Difal,
            Modality::Exclusivo,
            date!(2024 - 03 - 20),
        ),
        create_test_order_full(
            "2004",
            StateCode::RS,
            true,
            ServiceType::Reversa,
            Modality::Aereo,
            date!(2024 - 07 - 07),
        ),
        create_test_order_full(
            "2005",
            StateCode::GO,
            false,
            ServiceType::Entrega,
            Modality::Aereo,
            date!(2024 - 12 - 28),
        ),
        create_test_order_full(
            "2006",
            StateCode::SP,
            true,
            ServiceType::Entrega,
            Modality::Exclusivo,
            date!(2024 - 07 - 01),
        ),
    ]
}

pub fn refs(orders: &[Order]) -> Vec<&Order> {
    orders.iter().collect()
}
