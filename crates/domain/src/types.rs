// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::month::Month;
use crate::region::{Region, StateCode};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Uppercases and strips the Portuguese diacritics that appear in the fixed labels,
/// so that `"aereo"` and `"AÉREO"` compare equal.
pub fn fold_label(s: &str) -> String {
    s.trim()
        .to_uppercase()
        .chars()
        .map(|c| match c {
            'Á' | 'À' | 'Â' | 'Ã' => 'A',
            'É' | 'Ê' => 'E',
            'Í' => 'I',
            'Ó' | 'Ô' | 'Õ' => 'O',
            'Ú' => 'U',
            'Ç' => 'C',
            other => other,
        })
        .collect()
}

/// Transport modality of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modality {
    /// Road freight.
    #[serde(rename = "RODOVIÁRIO")]
    Rodoviario,
    /// Dedicated vehicle.
    #[serde(rename = "EXCLUSIVO")]
    Exclusivo,
    /// Air freight.
    #[serde(rename = "AÉREO")]
    Aereo,
}

impl Modality {
    /// All modalities in enumeration order.
    pub const ALL: [Self; 3] = [Self::Rodoviario, Self::Exclusivo, Self::Aereo];

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rodoviario => "RODOVIÁRIO",
            Self::Exclusivo => "EXCLUSIVO",
            Self::Aereo => "AÉREO",
        }
    }
}

impl FromStr for Modality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = fold_label(s);
        Self::ALL
            .into_iter()
            .find(|m| fold_label(m.as_str()) == wanted)
            .ok_or_else(|| DomainError::UnknownModality(s.to_string()))
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of logistics service an order represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceType {
    /// Delivery to the customer.
    Entrega,
    /// Pickup from the customer.
    Coleta,
    /// Tax-rate differential adjustment.
    Difal,
    /// Reverse logistics.
    Reversa,
}

impl ServiceType {
    /// All service types in enumeration order.
    pub const ALL: [Self; 4] = [Self::Entrega, Self::Coleta, Self::Difal, Self::Reversa];

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entrega => "ENTREGA",
            Self::Coleta => "COLETA",
            Self::Difal => "DIFAL",
            Self::Reversa => "REVERSA",
        }
    }
}

impl FromStr for ServiceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = fold_label(s);
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownServiceType(s.to_string()))
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Delivered.
    Finalizado,
    /// Shipped, not yet delivered.
    EmTransito,
    /// Not yet shipped.
    Pendente,
}

impl OrderStatus {
    /// All statuses in enumeration order.
    pub const ALL: [Self; 3] = [Self::Finalizado, Self::EmTransito, Self::Pendente];

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Finalizado => "FINALIZADO",
            Self::EmTransito => "EM_TRANSITO",
            Self::Pendente => "PENDENTE",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = fold_label(s).replace(' ', "_");
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownOrderStatus(s.to_string()))
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Product category of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subgroup {
    #[serde(rename = "EQUIPAMENTOS")]
    Equipamentos,
    #[serde(rename = "VESTUÁRIO")]
    Vestuario,
    #[serde(rename = "ACESSÓRIOS")]
    Acessorios,
    #[serde(rename = "PROTEÇÃO")]
    Protecao,
}

impl Subgroup {
    /// All subgroups in enumeration order.
    pub const ALL: [Self; 4] = [
        Self::Equipamentos,
        Self::Vestuario,
        Self::Acessorios,
        Self::Protecao,
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equipamentos => "EQUIPAMENTOS",
            Self::Vestuario => "VESTUÁRIO",
            Self::Acessorios => "ACESSÓRIOS",
            Self::Protecao => "PROTEÇÃO",
        }
    }
}

impl FromStr for Subgroup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = fold_label(s);
        Self::ALL
            .into_iter()
            .find(|g| fold_label(g.as_str()) == wanted)
            .ok_or_else(|| DomainError::UnknownSubgroup(s.to_string()))
    }
}

impl std::fmt::Display for Subgroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One logistics order ("pedido").
///
/// Orders are immutable once loaded into the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Internal identifier (e.g. `PED-100000`).
    pub id: String,
    /// Movement number ("nº mov.").
    #[serde(rename = "nMov")]
    pub movement_number: String,
    /// Order number; line items reference orders by this value.
    #[serde(rename = "pedido")]
    pub order_number: String,
    /// The service performed.
    #[serde(rename = "tipoServico")]
    pub service_type: ServiceType,
    /// The transport modality.
    #[serde(rename = "modalidade")]
    pub modality: Modality,
    /// City the shipment left from.
    #[serde(rename = "cidadeOrigem")]
    pub origin_city: String,
    /// Destination state.
    #[serde(rename = "estado")]
    pub state: StateCode,
    /// Destination macro-region.
    #[serde(rename = "regiao")]
    pub region: Region,
    /// Campaign label.
    #[serde(rename = "campanha")]
    pub campaign: String,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Whether the order was delivered within its committed window.
    #[serde(rename = "noPrazo")]
    pub on_time: bool,
    /// Delivery date (no time component).
    #[serde(rename = "dataEntrega", with = "crate::validation::iso_date")]
    pub delivery_date: Date,
}

impl Order {
    /// Creates a new `Order`.
    ///
    /// The region is stored as given; use [`crate::validate_order`] to check it
    /// against the state's owning region.
    ///
    /// # Arguments
    ///
    /// * `id` - The internal identifier
    /// * `movement_number` - The movement number
    /// * `order_number` - The order number used as the line-item join key
    /// * `service_type` - The service performed
    /// * `modality` - The transport modality
    /// * `origin_city` - The origin city
    /// * `state` - The destination state
    /// * `region` - The destination region
    /// * `campaign` - The campaign label
    /// * `status` - The lifecycle status
    /// * `on_time` - Whether the order was delivered on time
    /// * `delivery_date` - The delivery date
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        id: String,
        movement_number: String,
        order_number: String,
        service_type: ServiceType,
        modality: Modality,
        origin_city: String,
        state: StateCode,
        region: Region,
        campaign: String,
        status: OrderStatus,
        on_time: bool,
        delivery_date: Date,
    ) -> Self {
        Self {
            id,
            movement_number,
            order_number,
            service_type,
            modality,
            origin_city,
            state,
            region,
            campaign,
            status,
            on_time,
            delivery_date,
        }
    }

    /// Returns the month name the order was delivered in.
    #[must_use]
    pub const fn delivery_month(&self) -> Month {
        Month::of_date(self.delivery_date)
    }
}

/// One item of an order's shipment.
///
/// Items point at their order through `order_number`; the relation is not
/// checked at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Order number of the owning order.
    #[serde(rename = "pedido")]
    pub order_number: String,
    /// Item code.
    #[serde(rename = "codItem")]
    pub item_code: String,
    /// Item description.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Product category.
    #[serde(rename = "subgrupo")]
    pub subgroup: Subgroup,
    /// Quantity shipped.
    #[serde(rename = "qtde")]
    pub quantity: u32,
    /// Total volume in cubic meters.
    #[serde(rename = "volumeTotal")]
    pub total_volume: f64,
    /// Total value.
    #[serde(rename = "valorTotal")]
    pub total_value: f64,
}

impl LineItem {
    /// Creates a new `LineItem`.
    #[must_use]
    pub const fn new(
        order_number: String,
        item_code: String,
        description: String,
        subgroup: Subgroup,
        quantity: u32,
        total_volume: f64,
        total_value: f64,
    ) -> Self {
        Self {
            order_number,
            item_code,
            description,
            subgroup,
            quantity,
            total_volume,
            total_value,
        }
    }
}
