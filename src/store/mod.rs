// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Family data access.
//!
//! The navigator only sees the [`FamilyLookup`] trait; [`Catalog`] is the JSON-backed
//! implementation used by the TUI and tests.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use smol_str::SmolStr;

use crate::model::{Evolution, SpeciesId};

pub mod catalog;

pub use catalog::{Catalog, CatalogError, SpeciesEntry};

/// Relation records of one family, as returned by a [`FamilyLookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyRecord {
    pub root_id: SpeciesId,
    pub edges: Vec<Evolution>,
    pub names: BTreeMap<SpeciesId, SmolStr>,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("lookup timed out after {elapsed:?}")]
    Timeout { elapsed: Duration },
    #[error("unknown species {0}")]
    UnknownSpecies(SpeciesId),
}

/// Source of evolution families.
pub trait FamilyLookup {
    /// Family containing `id`, or `Ok(None)` when the species has no relatives.
    fn fetch_family(&self, id: SpeciesId) -> Result<Option<FamilyRecord>, LookupError>;

    /// Display name used for species without relatives.
    fn species_name(&self, _id: SpeciesId) -> Option<SmolStr> {
        None
    }
}

impl<T: FamilyLookup + ?Sized> FamilyLookup for Arc<T> {
    fn fetch_family(&self, id: SpeciesId) -> Result<Option<FamilyRecord>, LookupError> {
        (**self).fetch_family(id)
    }

    fn species_name(&self, id: SpeciesId) -> Option<SmolStr> {
        (**self).species_name(id)
    }
}

impl<T: FamilyLookup + ?Sized> FamilyLookup for &T {
    fn fetch_family(&self, id: SpeciesId) -> Result<Option<FamilyRecord>, LookupError> {
        (**self).fetch_family(id)
    }

    fn species_name(&self, id: SpeciesId) -> Option<SmolStr> {
        (**self).species_name(id)
    }
}
