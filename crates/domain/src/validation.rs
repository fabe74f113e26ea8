// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{LineItem, Order};
use std::collections::HashSet;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Calendar date layout used for delivery dates, in text and in JSON.
const DELIVERY_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Validates that an order's region owns its state.
///
/// # Arguments
///
/// * `order` - The order to validate
///
/// # Errors
///
/// Returns `DomainError::RegionStateMismatch` if the recorded region does not
/// own the recorded state.
pub fn validate_order(order: &Order) -> Result<(), DomainError> {
    if !order.region.contains(order.state) {
        return Err(DomainError::RegionStateMismatch {
            order_id: order.id.clone(),
            state: order.state,
            region: order.region,
        });
    }
    Ok(())
}

/// Validates a line item's numeric fields.
///
/// # Errors
///
/// Returns `DomainError::InvalidLineItem` if the quantity is zero or the
/// volume or value is not a positive finite number.
pub fn validate_line_item(item: &LineItem) -> Result<(), DomainError> {
    let reason: Option<&str> = if item.quantity == 0 {
        Some("quantity must be positive")
    } else if !(item.total_volume.is_finite() && item.total_volume > 0.0) {
        Some("total volume must be positive")
    } else if !(item.total_value.is_finite() && item.total_value > 0.0) {
        Some("total value must be positive")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DomainError::InvalidLineItem {
            order_number: item.order_number.clone(),
            item_code: item.item_code.clone(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Validates a whole record store.
///
/// Checks every order with [`validate_order`], that order numbers are unique,
/// and every line item with [`validate_line_item`]. Line items pointing at an
/// unknown order number are not an error: joins simply skip them.
///
/// # Errors
///
/// Returns the first violation found, orders before items.
pub fn validate_records(orders: &[Order], items: &[LineItem]) -> Result<(), DomainError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(orders.len());
    for order in orders {
        validate_order(order)?;
        if !seen.insert(order.order_number.as_str()) {
            return Err(DomainError::DuplicateOrderNumber(order.order_number.clone()));
        }
    }

    for item in items {
        validate_line_item(item)?;
    }

    Ok(())
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_delivery_date(date_str: &str) -> Result<Date, DomainError> {
    Date::parse(date_str, DELIVERY_DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: date_str.to_string(),
        error: e.to_string(),
    })
}

/// Serde adapter that writes delivery dates as `YYYY-MM-DD` strings.
pub mod iso_date {
    use super::{DELIVERY_DATE_FORMAT, parse_delivery_date};
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use time::Date;

    /// # Errors
    ///
    /// Fails if the date cannot be formatted or the serializer rejects the string.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted: String = date.format(DELIVERY_DATE_FORMAT).map_err(ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    /// # Errors
    ///
    /// Fails on anything other than a valid `YYYY-MM-DD` string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        parse_delivery_date(&raw).map_err(de::Error::custom)
    }
}
