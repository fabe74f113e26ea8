// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Search, sort and pagination for the orders and items tables.
//!
//! Tables operate on the already-filtered subsets. Their search text, sort
//! and page are local view state, not part of the filter state.

use crate::error::ApiError;
use painel_domain::{LineItem, Order};
use serde::Serialize;
use std::cmp::Ordering;

/// Rows per page of the orders table.
pub const ORDERS_PAGE_SIZE: usize = 10;

/// Rows per page of the items table.
pub const ITEMS_PAGE_SIZE: usize = 8;

/// Sort direction of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    #[default]
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    const fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Sortable columns of the orders table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrderSortField {
    /// Movement number.
    #[serde(rename = "nMov")]
    MovementNumber,
    /// Order number.
    #[serde(rename = "pedido")]
    OrderNumber,
    /// Service type.
    #[serde(rename = "tipoServico")]
    ServiceType,
    /// Modality.
    #[serde(rename = "modalidade")]
    Modality,
    /// Origin city.
    #[serde(rename = "cidadeOrigem")]
    OriginCity,
    /// State code.
    #[serde(rename = "estado")]
    State,
}

impl OrderSortField {
    fn compare(self, a: &Order, b: &Order) -> Ordering {
        match self {
            Self::MovementNumber => a.movement_number.cmp(&b.movement_number),
            Self::OrderNumber => a.order_number.cmp(&b.order_number),
            Self::ServiceType => a.service_type.as_str().cmp(b.service_type.as_str()),
            Self::Modality => a.modality.as_str().cmp(b.modality.as_str()),
            Self::OriginCity => a.origin_city.cmp(&b.origin_city),
            Self::State => a.state.as_str().cmp(b.state.as_str()),
        }
    }
}

/// Sortable columns of the items table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemSortField {
    /// Owning order number.
    #[serde(rename = "pedido")]
    OrderNumber,
    /// Item code.
    #[serde(rename = "codItem")]
    ItemCode,
    /// Description.
    #[serde(rename = "descricao")]
    Description,
    /// Subgroup.
    #[serde(rename = "subgrupo")]
    Subgroup,
    /// Quantity, compared numerically.
    #[serde(rename = "qtde")]
    Quantity,
    /// Total volume, compared numerically.
    #[serde(rename = "volumeTotal")]
    TotalVolume,
}

impl ItemSortField {
    fn compare(self, a: &LineItem, b: &LineItem) -> Ordering {
        match self {
            Self::OrderNumber => a.order_number.cmp(&b.order_number),
            Self::ItemCode => a.item_code.cmp(&b.item_code),
            Self::Description => a.description.cmp(&b.description),
            Self::Subgroup => a.subgroup.as_str().cmp(b.subgroup.as_str()),
            Self::Quantity => a.quantity.cmp(&b.quantity),
            Self::TotalVolume => a.total_volume.total_cmp(&b.total_volume),
        }
    }
}

/// The active sort column and direction of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSort<F> {
    /// Sorted column.
    pub field: F,
    /// Sort direction.
    pub direction: SortDirection,
}

impl<F: Copy + PartialEq> TableSort<F> {
    /// Creates a sort on the given column.
    #[must_use]
    pub const fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Returns the sort after a click on a column header.
    ///
    /// Clicking the sorted column flips its direction; clicking another column
    /// sorts by it ascending.
    #[must_use]
    pub fn toggled(self, field: F) -> Self {
        if self.field == field {
            Self::new(field, self.direction.reversed())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }
}

impl Default for TableSort<OrderSortField> {
    fn default() -> Self {
        Self::new(OrderSortField::MovementNumber, SortDirection::Desc)
    }
}

impl Default for TableSort<ItemSortField> {
    fn default() -> Self {
        Self::new(ItemSortField::OrderNumber, SortDirection::Desc)
    }
}

/// View state of the orders table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrdersTableQuery {
    /// Case-insensitive search text. Empty matches everything.
    pub search: String,
    /// Active sort.
    pub sort: TableSort<OrderSortField>,
    /// Requested 1-based page.
    pub page: usize,
}

/// View state of the items table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemsTableQuery {
    /// Case-insensitive search text. Empty matches everything.
    pub search: String,
    /// Active sort.
    pub sort: TableSort<ItemSortField>,
    /// Requested 1-based page.
    pub page: usize,
}

/// One page of table rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePage<T> {
    /// Rows on this page.
    pub rows: Vec<T>,
    /// Number of rows matching the search, across all pages.
    pub total: usize,
    /// The 1-based page actually shown.
    pub page: usize,
    /// Number of pages; 0 when nothing matches.
    pub total_pages: usize,
}

const fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

fn take_page<T>(rows: Vec<T>, page: usize, page_size: usize, total_pages: usize) -> TablePage<T> {
    let total: usize = rows.len();
    let rows: Vec<T> = rows
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();
    TablePage {
        rows,
        total,
        page,
        total_pages,
    }
}

/// Cuts one page out of a row list, clamping the request into range.
///
/// Page 0 is treated as page 1 and pages past the end show the last page.
#[must_use]
pub fn paginate<T>(rows: Vec<T>, page: usize, page_size: usize) -> TablePage<T> {
    let pages: usize = total_pages(rows.len(), page_size);
    let page: usize = page.clamp(1, pages.max(1));
    take_page(rows, page, page_size, pages)
}

/// Cuts one page out of a row list, refusing out-of-range requests.
///
/// An empty list has a single, empty first page.
///
/// # Errors
///
/// Returns `ApiError::PageOutOfRange` if `page` is 0 or past the last page.
pub fn page_strict<T>(rows: Vec<T>, page: usize, page_size: usize) -> Result<TablePage<T>, ApiError> {
    let pages: usize = total_pages(rows.len(), page_size);
    if page == 0 || page > pages.max(1) {
        return Err(ApiError::PageOutOfRange {
            page,
            total_pages: pages,
        });
    }
    Ok(take_page(rows, page, page_size, pages))
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Searches, sorts and paginates the orders table.
///
/// The search matches movement number, order number, service type, modality
/// and origin city.
#[must_use]
pub fn query_orders_table<'a>(orders: &[&'a Order], query: &OrdersTableQuery) -> TablePage<&'a Order> {
    let needle: String = query.search.to_lowercase();
    let mut rows: Vec<&'a Order> = orders
        .iter()
        .copied()
        .filter(|order| {
            needle.is_empty()
                || contains_folded(&order.movement_number, &needle)
                || contains_folded(&order.order_number, &needle)
                || contains_folded(order.service_type.as_str(), &needle)
                || contains_folded(order.modality.as_str(), &needle)
                || contains_folded(&order.origin_city, &needle)
        })
        .collect();

    let sort: TableSort<OrderSortField> = query.sort;
    rows.sort_by(|a, b| sort.direction.orient(sort.field.compare(a, b)));

    paginate(rows, query.page, ORDERS_PAGE_SIZE)
}

/// Searches, sorts and paginates the items table.
///
/// The search matches order number, item code and description.
#[must_use]
pub fn query_items_table<'a>(items: &[&'a LineItem], query: &ItemsTableQuery) -> TablePage<&'a LineItem> {
    let needle: String = query.search.to_lowercase();
    let mut rows: Vec<&'a LineItem> = items
        .iter()
        .copied()
        .filter(|item| {
            needle.is_empty()
                || contains_folded(&item.order_number, &needle)
                || contains_folded(&item.item_code, &needle)
                || contains_folded(&item.description, &needle)
        })
        .collect();

    let sort: TableSort<ItemSortField> = query.sort;
    rows.sort_by(|a, b| sort.direction.orient(sort.field.compare(a, b)));

    paginate(rows, query.page, ITEMS_PAGE_SIZE)
}
