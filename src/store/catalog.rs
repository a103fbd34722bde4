// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use smol_str::SmolStr;

use super::{FamilyLookup, FamilyRecord, LookupError};
use crate::model::{Evolution, SpeciesId, Trigger};

const DEMO_CATALOG_JSON: &str = include_str!("../../assets/demo_catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error at {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("species {0} is listed more than once")]
    DuplicateSpecies(SpeciesId),
}

/// One browsable species record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesEntry {
    id: SpeciesId,
    name: SmolStr,
    summary: Option<String>,
}

impl SpeciesEntry {
    pub fn id(&self) -> SpeciesId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

/// In-memory species catalog with flat evolution records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    species: BTreeMap<SpeciesId, SpeciesEntry>,
    evolutions: Vec<Evolution>,
    incoming: BTreeMap<SpeciesId, Vec<usize>>,
    outgoing: BTreeMap<SpeciesId, Vec<usize>>,
}

impl Catalog {
    pub fn new(
        entries: impl IntoIterator<Item = SpeciesEntry>,
        evolutions: Vec<Evolution>,
    ) -> Result<Self, CatalogError> {
        let mut species = BTreeMap::new();
        for entry in entries {
            let id = entry.id;
            if species.insert(id, entry).is_some() {
                return Err(CatalogError::DuplicateSpecies(id));
            }
        }

        let mut incoming = BTreeMap::<SpeciesId, Vec<usize>>::new();
        let mut outgoing = BTreeMap::<SpeciesId, Vec<usize>>::new();
        for (idx, evolution) in evolutions.iter().enumerate() {
            incoming.entry(evolution.to_id()).or_default().push(idx);
            outgoing.entry(evolution.from_id()).or_default().push(idx);
        }

        Ok(Self { species, evolutions, incoming, outgoing })
    }

    /// Loads a catalog from a JSON file (`{"species": [...], "evolutions": [...]}`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&raw, path)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        Self::parse(raw, Path::new("<inline>"))
    }

    /// Built-in catalog with a handful of linear, branching and single-stage families.
    pub fn demo() -> Self {
        match Self::from_json_str(DEMO_CATALOG_JSON) {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!(error = %err, "built-in demo catalog is invalid; using fallback");
                demo_catalog_fallback()
            }
        }
    }

    fn parse(raw: &str, path: &Path) -> Result<Self, CatalogError> {
        let json: CatalogJson = serde_json::from_str(raw)
            .map_err(|source| CatalogError::Json { path: path.to_path_buf(), source })?;

        let entries = json.species.into_iter().map(|species| SpeciesEntry {
            id: species.id,
            name: species.name,
            summary: species.summary,
        });
        let evolutions = json
            .evolutions
            .into_iter()
            .map(|evolution| Evolution::new(evolution.from, evolution.to, evolution.trigger))
            .collect();
        Self::new(entries, evolutions)
    }

    /// Browse entries in ascending id order.
    pub fn species(&self) -> impl Iterator<Item = &SpeciesEntry> {
        self.species.values()
    }

    pub fn entry(&self, id: SpeciesId) -> Option<&SpeciesEntry> {
        self.species.get(&id)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    fn knows(&self, id: SpeciesId) -> bool {
        self.species.contains_key(&id)
            || self.incoming.contains_key(&id)
            || self.outgoing.contains_key(&id)
    }

    /// Walks parent links up to the earliest stage. A cycle stops the walk where it closes.
    fn family_root(&self, id: SpeciesId) -> SpeciesId {
        let mut current = id;
        let mut visited = BTreeSet::from([id]);
        while let Some(parent) = self
            .incoming
            .get(&current)
            .and_then(|edges| edges.first())
            .map(|&idx| self.evolutions[idx].from_id())
        {
            if !visited.insert(parent) {
                break;
            }
            current = parent;
        }
        current
    }
}

impl FamilyLookup for Catalog {
    fn fetch_family(&self, id: SpeciesId) -> Result<Option<FamilyRecord>, LookupError> {
        if !self.knows(id) {
            return Err(LookupError::UnknownSpecies(id));
        }

        let root_id = self.family_root(id);

        let mut members = BTreeSet::from([root_id]);
        let mut queue = VecDeque::from([root_id]);
        while let Some(current) = queue.pop_front() {
            for &idx in self.outgoing.get(&current).into_iter().flatten() {
                let child = self.evolutions[idx].to_id();
                if members.insert(child) {
                    queue.push_back(child);
                }
            }
        }

        // Every record touching the family is handed over, so malformed links surface in the
        // chain builder instead of being silently dropped here.
        let edges: Vec<Evolution> = self
            .evolutions
            .iter()
            .filter(|evolution| {
                members.contains(&evolution.from_id()) || members.contains(&evolution.to_id())
            })
            .cloned()
            .collect();
        if edges.is_empty() {
            return Ok(None);
        }

        let mut named = members;
        named.extend(edges.iter().flat_map(|evolution| [evolution.from_id(), evolution.to_id()]));
        let names = named
            .into_iter()
            .filter_map(|id| self.species.get(&id).map(|entry| (id, entry.name.clone())))
            .collect();

        Ok(Some(FamilyRecord { root_id, edges, names }))
    }

    fn species_name(&self, id: SpeciesId) -> Option<SmolStr> {
        self.species.get(&id).map(|entry| entry.name.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogJson {
    #[serde(default)]
    species: Vec<SpeciesJson>,
    #[serde(default)]
    evolutions: Vec<EvolutionJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct SpeciesJson {
    id: SpeciesId,
    name: SmolStr,
    #[serde(default)]
    summary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct EvolutionJson {
    from: SpeciesId,
    to: SpeciesId,
    trigger: Trigger,
}

fn demo_catalog_fallback() -> Catalog {
    let entry = |id: u32, name: &str| SpeciesEntry {
        id: SpeciesId::new(id),
        name: SmolStr::new(name),
        summary: None,
    };
    let evolution = |from: u32, to: u32, trigger: &str| {
        Evolution::new(SpeciesId::new(from), SpeciesId::new(to), trigger)
    };

    Catalog::new(
        [
            entry(4, "Charmander"),
            entry(5, "Charmeleon"),
            entry(6, "Charizard"),
            entry(132, "Ditto"),
        ],
        vec![evolution(4, 5, "level16"), evolution(5, 6, "level36")],
    )
    .unwrap_or_default()
}

#[cfg(test)]
mod tests;
