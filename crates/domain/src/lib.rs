// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod month;
mod region;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use month::Month;
pub use region::{Region, StateCode};
pub use types::{LineItem, Modality, Order, OrderStatus, ServiceType, Subgroup};
pub use validation::{
    parse_delivery_date, validate_line_item, validate_order, validate_records,
};
