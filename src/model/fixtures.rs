// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smol_str::SmolStr;

use super::ids::SpeciesId;
use super::species::Evolution;

pub(crate) fn sid(value: u32) -> SpeciesId {
    SpeciesId::new(value)
}

pub(crate) fn evo(from: u32, to: u32, trigger: &str) -> Evolution {
    Evolution::new(sid(from), sid(to), trigger)
}

pub(crate) fn bulbasaur_line() -> Vec<Evolution> {
    vec![evo(1, 2, "level16"), evo(2, 3, "level32")]
}

pub(crate) fn charmander_line() -> Vec<Evolution> {
    vec![evo(4, 5, "level16"), evo(5, 6, "level36")]
}

/// Three stone evolutions, deliberately listed out of id order.
pub(crate) fn eevee_family() -> Vec<Evolution> {
    vec![
        evo(133, 136, "fire_stone"),
        evo(133, 134, "water_stone"),
        evo(133, 135, "thunder_stone"),
    ]
}

/// Linear first stage that branches at the second stage.
pub(crate) fn oddish_family() -> Vec<Evolution> {
    vec![evo(43, 44, "level21"), evo(44, 182, "sun_stone"), evo(44, 45, "leaf_stone")]
}

/// Branches at the root, and one of the branches continues.
pub(crate) fn tyrogue_like_family() -> Vec<Evolution> {
    vec![evo(10, 30, "b"), evo(10, 20, "a"), evo(20, 21, "c"), evo(30, 31, "d")]
}

pub(crate) fn names() -> BTreeMap<SpeciesId, SmolStr> {
    [(1, "Bulbasaur"), (2, "Ivysaur"), (3, "Venusaur"), (4, "Charmander"), (133, "Eevee")]
        .into_iter()
        .map(|(id, name)| (sid(id), SmolStr::new(name)))
        .collect()
}
