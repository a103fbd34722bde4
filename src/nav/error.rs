// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use crate::model::SpeciesId;
use crate::store::LookupError;

/// Relation records that cannot form a tree rooted at the requested species.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("{child} has more than one parent ({first} and {second})")]
    MultipleParents { child: SpeciesId, first: SpeciesId, second: SpeciesId },
    #[error("root {root} has a parent ({from} -> {root})")]
    RootHasParent { from: SpeciesId, root: SpeciesId },
    #[error("root {root} does not appear in any evolution record")]
    RootMissing { root: SpeciesId },
    #[error("evolution {from} -> {to} is not reachable from root {root}")]
    Disconnected { root: SpeciesId, from: SpeciesId, to: SpeciesId },
}

/// Why a drill-in transition was abandoned. The navigation stack is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("malformed family data: {0}")]
    DataIntegrity(#[from] IntegrityError),
    #[error("family lookup took {elapsed:?}, budget is {budget:?}")]
    LookupTimeout { elapsed: Duration, budget: Duration },
    #[error("family lookup failed: {0}")]
    LookupFailed(String),
}

impl NavError {
    pub(crate) fn from_lookup(err: LookupError, budget: Duration) -> Self {
        match err {
            LookupError::Timeout { elapsed } => Self::LookupTimeout { elapsed, budget },
            other => Self::LookupFailed(other.to_string()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::DataIntegrity(_) => "data_integrity",
            Self::LookupTimeout { .. } => "lookup_timeout",
            Self::LookupFailed(_) => "lookup_failed",
        }
    }
}
