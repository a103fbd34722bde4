// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Catalog identifier of a single species.
///
/// Ids are totally ordered; that order is also the tie-break used when several evolutions branch
/// off the same parent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SpeciesId(u32);

impl SpeciesId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03}", self.0)
    }
}

impl From<u32> for SpeciesId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for SpeciesId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(IdError::Empty);
        }
        digits
            .parse::<u32>()
            .map(Self)
            .map_err(|_| IdError::NotNumeric(trimmed.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("species id must not be empty")]
    Empty,
    #[error("species id must be a non-negative integer, got {0:?}")]
    NotNumeric(String),
}
