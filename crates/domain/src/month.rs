// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::fold_label;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// A calendar month, labelled with its fixed pt-BR name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    Janeiro,
    Fevereiro,
    #[serde(rename = "março")]
    Marco,
    Abril,
    Maio,
    Junho,
    Julho,
    Agosto,
    Setembro,
    Outubro,
    Novembro,
    Dezembro,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Janeiro,
        Self::Fevereiro,
        Self::Marco,
        Self::Abril,
        Self::Maio,
        Self::Junho,
        Self::Julho,
        Self::Agosto,
        Self::Setembro,
        Self::Outubro,
        Self::Novembro,
        Self::Dezembro,
    ];

    /// Returns the lowercase pt-BR month name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Janeiro => "janeiro",
            Self::Fevereiro => "fevereiro",
            Self::Marco => "março",
            Self::Abril => "abril",
            Self::Maio => "maio",
            Self::Junho => "junho",
            Self::Julho => "julho",
            Self::Agosto => "agosto",
            Self::Setembro => "setembro",
            Self::Outubro => "outubro",
            Self::Novembro => "novembro",
            Self::Dezembro => "dezembro",
        }
    }

    /// Returns the three-letter label used on the month buttons (`jan`, `fev`, `mar`, ...).
    #[must_use]
    pub fn short_label(&self) -> String {
        self.as_str().chars().take(3).collect()
    }

    /// Returns the month a calendar date falls in.
    #[must_use]
    pub const fn of_date(date: Date) -> Self {
        Self::from_calendar(date.month())
    }

    /// Converts a `time` calendar month.
    #[must_use]
    pub const fn from_calendar(month: time::Month) -> Self {
        match month {
            time::Month::January => Self::Janeiro,
            time::Month::February => Self::Fevereiro,
            time::Month::March => Self::Marco,
            time::Month::April => Self::Abril,
            time::Month::May => Self::Maio,
            time::Month::June => Self::Junho,
            time::Month::July => Self::Julho,
            time::Month::August => Self::Agosto,
            time::Month::September => Self::Setembro,
            time::Month::October => Self::Outubro,
            time::Month::November => Self::Novembro,
            time::Month::December => Self::Dezembro,
        }
    }
}

impl FromStr for Month {
    type Err = DomainError;

    /// Accepts the full month name or its three-letter label, ignoring case and accents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = fold_label(s);
        Self::ALL
            .into_iter()
            .find(|m| fold_label(m.as_str()) == wanted || fold_label(&m.short_label()) == wanted)
            .ok_or_else(|| DomainError::UnknownMonth(s.to_string()))
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
