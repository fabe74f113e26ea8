// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::region::{Region, StateCode};

/// Errors that can occur during domain parsing and record validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The value is not one of the five macro-regions.
    UnknownRegion(String),
    /// The value is not a Brazilian state code.
    UnknownState(String),
    /// The value is not a known transport modality.
    UnknownModality(String),
    /// The value is not a known service type.
    UnknownServiceType(String),
    /// The value is not a pt-BR month name.
    UnknownMonth(String),
    /// The value is not a known item subgroup.
    UnknownSubgroup(String),
    /// The value is not a known order status.
    UnknownOrderStatus(String),
    /// An order's region does not own its state.
    RegionStateMismatch {
        /// The order identifier.
        order_id: String,
        /// The state recorded on the order.
        state: StateCode,
        /// The region recorded on the order.
        region: Region,
    },
    /// Two orders share the same order number.
    DuplicateOrderNumber(String),
    /// A line item has a non-positive quantity, volume or value.
    InvalidLineItem {
        /// The order number the item points at.
        order_number: String,
        /// The item code.
        item_code: String,
        /// Description of the violated constraint.
        reason: String,
    },
    /// Failed to parse a delivery date.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRegion(value) => write!(f, "Unknown region: '{value}'"),
            Self::UnknownState(value) => write!(f, "Unknown state code: '{value}'"),
            Self::UnknownModality(value) => write!(f, "Unknown modality: '{value}'"),
            Self::UnknownServiceType(value) => write!(f, "Unknown service type: '{value}'"),
            Self::UnknownMonth(value) => write!(f, "Unknown month: '{value}'"),
            Self::UnknownSubgroup(value) => write!(f, "Unknown subgroup: '{value}'"),
            Self::UnknownOrderStatus(value) => write!(f, "Unknown order status: '{value}'"),
            Self::RegionStateMismatch {
                order_id,
                state,
                region,
            } => {
                write!(
                    f,
                    "Order {order_id} has state {state} which does not belong to region {region}"
                )
            }
            Self::DuplicateOrderNumber(order_number) => {
                write!(f, "Order number {order_number} is used by more than one order")
            }
            Self::InvalidLineItem {
                order_number,
                item_code,
                reason,
            } => {
                write!(
                    f,
                    "Invalid line item {item_code} of order {order_number}: {reason}"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
