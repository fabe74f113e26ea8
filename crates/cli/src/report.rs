// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of a dashboard snapshot.

use painel_api::{BarChartEntry, DashboardSnapshot, TablePage};
use painel_domain::Order;
use std::fmt::Write;

/// Widest bar drawn, in characters.
const BAR_WIDTH: f64 = 30.0;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar(width: f64) -> String {
    "#".repeat((width / 100.0 * BAR_WIDTH).round() as usize)
}

fn write_chart(out: &mut String, title: &str, entries: &[BarChartEntry]) -> std::fmt::Result {
    writeln!(out, "\n{title}")?;
    for entry in entries {
        let marker: char = if entry.active { ' ' } else { '-' };
        writeln!(
            out,
            " {marker}{:<14} {:>5}  {}",
            entry.name,
            entry.value,
            bar(entry.width)
        )?;
    }
    Ok(())
}

/// Renders the snapshot and one page of the orders table.
///
/// # Errors
///
/// Returns `std::fmt::Error` if writing to the buffer fails.
pub fn render_text(snapshot: &DashboardSnapshot, orders: &TablePage<&Order>) -> Result<String, std::fmt::Error> {
    let mut out: String = String::new();

    writeln!(out, "Filtros: {}", snapshot.filters.summary())?;
    for card in &snapshot.metric_cards {
        match card.percentage {
            Some(percentage) => writeln!(out, "{}: {} ({percentage:.2}%)", card.title, card.value)?,
            None => writeln!(out, "{}: {}", card.title, card.value)?,
        }
    }
    writeln!(
        out,
        "Desempenho: {:.2}%{}",
        snapshot.gauge.percentage,
        if snapshot.gauge.warning { " (abaixo da meta)" } else { "" }
    )?;

    writeln!(out, "\nRegiões")?;
    for share in &snapshot.regions {
        writeln!(out, "  {:<14} {:>5}  {:>6}%", share.region.as_str(), share.count, share.percentage)?;
    }

    write_chart(&mut out, "Pedidos | Modalidade", &snapshot.modality_chart)?;
    write_chart(&mut out, "Pedidos | Tipo de Serviço", &snapshot.service_type_chart)?;

    writeln!(out, "\nStatus")?;
    for status in &snapshot.statuses {
        writeln!(out, "  {:<14} {:>5}", status.name.as_str(), status.value)?;
    }

    writeln!(out, "\nEstados")?;
    for (state, count) in &snapshot.states {
        writeln!(out, "  {state}  {count:>5}")?;
    }

    writeln!(
        out,
        "\nPedidos Consolidados (página {}/{}, {} registros)",
        orders.page,
        orders.total_pages.max(1),
        orders.total
    )?;
    writeln!(
        out,
        "  {:<8} {:<8} {:<10} {:<11} {:<16} {:<3} {}",
        "Nº Mov", "Pedido", "Serviço", "Modalidade", "Origem", "UF", "Prazo"
    )?;
    for order in &orders.rows {
        writeln!(
            out,
            "  {:<8} {:<8} {:<10} {:<11} {:<16} {:<3} {}",
            order.movement_number,
            order.order_number,
            order.service_type.as_str(),
            order.modality.as_str(),
            order.origin_city,
            order.state.as_str(),
            if order.on_time { "no prazo" } else { "fora do prazo" }
        )?;
    }

    Ok(out)
}
