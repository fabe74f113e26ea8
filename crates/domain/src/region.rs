// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Brazilian macro-regions and state codes.
//!
//! The five regions partition the 27 federative units: every state belongs to
//! exactly one region. Both directions of the mapping are fixed tables.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the five Brazilian macro-regions.
///
/// Declaration order is the display order used by the region distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    /// Southeast.
    Sudeste,
    /// Northeast.
    Nordeste,
    /// South.
    Sul,
    /// Center-West.
    #[serde(rename = "Centro-Oeste")]
    CentroOeste,
    /// North.
    Norte,
}

impl Region {
    /// All regions in display order.
    pub const ALL: [Self; 5] = [
        Self::Sudeste,
        Self::Nordeste,
        Self::Sul,
        Self::CentroOeste,
        Self::Norte,
    ];

    /// Returns the pt-BR display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sudeste => "Sudeste",
            Self::Nordeste => "Nordeste",
            Self::Sul => "Sul",
            Self::CentroOeste => "Centro-Oeste",
            Self::Norte => "Norte",
        }
    }

    /// Returns the states owned by this region.
    #[must_use]
    pub const fn states(&self) -> &'static [StateCode] {
        match self {
            Self::Sudeste => &[StateCode::SP, StateCode::RJ, StateCode::MG, StateCode::ES],
            Self::Nordeste => &[
                StateCode::BA,
                StateCode::PE,
                StateCode::CE,
                StateCode::MA,
                StateCode::PB,
                StateCode::RN,
                StateCode::AL,
                StateCode::SE,
                StateCode::PI,
            ],
            Self::Sul => &[StateCode::PR, StateCode::SC, StateCode::RS],
            Self::CentroOeste => &[StateCode::GO, StateCode::MT, StateCode::MS, StateCode::DF],
            Self::Norte => &[
                StateCode::AM,
                StateCode::PA,
                StateCode::AC,
                StateCode::RO,
                StateCode::RR,
                StateCode::AP,
                StateCode::TO,
            ],
        }
    }

    /// Checks whether the given state belongs to this region.
    #[must_use]
    pub fn contains(&self, state: StateCode) -> bool {
        state.region() == *self
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownRegion(s.to_string()))
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A two-letter Brazilian state (UF) code.
///
/// Declared alphabetically so that ordered maps keyed by state read naturally.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StateCode {
    AC,
    AL,
    AM,
    AP,
    BA,
    CE,
    DF,
    ES,
    GO,
    MA,
    MG,
    MS,
    MT,
    PA,
    PB,
    PE,
    PI,
    PR,
    RJ,
    RN,
    RO,
    RR,
    RS,
    SC,
    SE,
    SP,
    TO,
}

impl StateCode {
    /// All 27 state codes in alphabetical order.
    pub const ALL: [Self; 27] = [
        Self::AC,
        Self::AL,
        Self::AM,
        Self::AP,
        Self::BA,
        Self::CE,
        Self::DF,
        Self::ES,
        Self::GO,
        Self::MA,
        Self::MG,
        Self::MS,
        Self::MT,
        Self::PA,
        Self::PB,
        Self::PE,
        Self::PI,
        Self::PR,
        Self::RJ,
        Self::RN,
        Self::RO,
        Self::RR,
        Self::RS,
        Self::SC,
        Self::SE,
        Self::SP,
        Self::TO,
    ];

    /// Returns the two-letter code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AC => "AC",
            Self::AL => "AL",
            Self::AM => "AM",
            Self::AP => "AP",
            Self::BA => "BA",
            Self::CE => "CE",
            Self::DF => "DF",
            Self::ES => "ES",
            Self::GO => "GO",
            Self::MA => "MA",
            Self::MG => "MG",
            Self::MS => "MS",
            Self::MT => "MT",
            Self::PA => "PA",
            Self::PB => "PB",
            Self::PE => "PE",
            Self::PI => "PI",
            Self::PR => "PR",
            Self::RJ => "RJ",
            Self::RN => "RN",
            Self::RO => "RO",
            Self::RR => "RR",
            Self::RS => "RS",
            Self::SC => "SC",
            Self::SE => "SE",
            Self::SP => "SP",
            Self::TO => "TO",
        }
    }

    /// Returns the full state name, as shown on the map tooltip.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AC => "Acre",
            Self::AL => "Alagoas",
            Self::AM => "Amazonas",
            Self::AP => "Amapá",
            Self::BA => "Bahia",
            Self::CE => "Ceará",
            Self::DF => "Distrito Federal",
            Self::ES => "Espírito Santo",
            Self::GO => "Goiás",
            Self::MA => "Maranhão",
            Self::MG => "Minas Gerais",
            Self::MS => "Mato Grosso do Sul",
            Self::MT => "Mato Grosso",
            Self::PA => "Pará",
            Self::PB => "Paraíba",
            Self::PE => "Pernambuco",
            Self::PI => "Piauí",
            Self::PR => "Paraná",
            Self::RJ => "Rio de Janeiro",
            Self::RN => "Rio Grande do Norte",
            Self::RO => "Rondônia",
            Self::RR => "Roraima",
            Self::RS => "Rio Grande do Sul",
            Self::SC => "Santa Catarina",
            Self::SE => "Sergipe",
            Self::SP => "São Paulo",
            Self::TO => "Tocantins",
        }
    }

    /// Returns the macro-region that owns this state.
    #[must_use]
    pub const fn region(&self) -> Region {
        match self {
            Self::SP | Self::RJ | Self::MG | Self::ES => Region::Sudeste,
            Self::BA
            | Self::PE
            | Self::CE
            | Self::MA
            | Self::PB
            | Self::RN
            | Self::AL
            | Self::SE
            | Self::PI => Region::Nordeste,
            Self::PR | Self::SC | Self::RS => Region::Sul,
            Self::GO | Self::MT | Self::MS | Self::DF => Region::CentroOeste,
            Self::AM | Self::PA | Self::AC | Self::RO | Self::RR | Self::AP | Self::TO => {
                Region::Norte
            }
        }
    }
}

impl FromStr for StateCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|uf| uf.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownState(s.to_string()))
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
