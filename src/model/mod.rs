// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Species are identified by [`SpeciesId`]; a [`Chain`] is the immutable family tree built for one
//! root species.

pub mod chain;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod species;

pub use chain::{Branches, Chain, LayoutKind};
pub use ids::{IdError, SpeciesId};
pub use species::{Evolution, SpeciesNode, Trigger};
