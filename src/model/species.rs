// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::ids::SpeciesId;

/// Opaque requirement descriptor attached to an evolution (e.g. `level16`, `water_stone`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trigger(SmolStr);

impl Trigger {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(SmolStr::new(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Trigger {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Directed relation from an earlier stage to a later stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Evolution {
    from: SpeciesId,
    to: SpeciesId,
    trigger: Trigger,
}

impl Evolution {
    pub fn new(from: SpeciesId, to: SpeciesId, trigger: impl Into<Trigger>) -> Self {
        Self { from, to, trigger: trigger.into() }
    }

    pub fn from_id(&self) -> SpeciesId {
        self.from
    }

    pub fn to_id(&self) -> SpeciesId {
        self.to
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }
}

/// A member of a [`Chain`](super::Chain), positioned by its distance from the family root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesNode {
    id: SpeciesId,
    name: Option<SmolStr>,
    depth: usize,
    requirements: Vec<Trigger>,
}

impl SpeciesNode {
    pub(crate) fn new(id: SpeciesId, name: Option<SmolStr>, depth: usize) -> Self {
        Self { id, name, depth, requirements: Vec::new() }
    }

    pub fn id(&self) -> SpeciesId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name for display, falling back to the formatted id.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.to_string(),
            None => self.id.to_string(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Triggers of the outgoing evolutions, in branch order.
    pub fn requirements(&self) -> &[Trigger] {
        &self.requirements
    }

    pub(crate) fn push_requirement(&mut self, trigger: Trigger) {
        self.requirements.push(trigger);
    }
}
