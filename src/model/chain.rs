// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use super::ids::SpeciesId;
use super::species::{Evolution, SpeciesNode, Trigger};

/// Children of one node in branch order. Most families branch at most a handful of ways.
pub type Branches = SmallVec<[SpeciesId; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// A species without relatives.
    Single,
    /// Every stage has at most one evolution.
    Linear,
    /// At least one stage evolves in more than one way.
    Branching,
}

impl LayoutKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Linear => "linear",
            Self::Branching => "branching",
        }
    }
}

/// Immutable family graph for one root species.
///
/// The edge set is a tree rooted at [`Chain::root_id`]. Depths and the branch order of every
/// parent are fixed when the chain is built, so cursor ordering never re-traverses the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    root_id: SpeciesId,
    nodes: BTreeMap<SpeciesId, SpeciesNode>,
    edges: Vec<Evolution>,
    children: BTreeMap<SpeciesId, Branches>,
    layout: LayoutKind,
}

impl Chain {
    pub(crate) fn from_parts(
        root_id: SpeciesId,
        nodes: BTreeMap<SpeciesId, SpeciesNode>,
        edges: Vec<Evolution>,
        children: BTreeMap<SpeciesId, Branches>,
    ) -> Self {
        let layout = if nodes.len() == 1 {
            LayoutKind::Single
        } else if children.values().all(|branches| branches.len() <= 1) {
            LayoutKind::Linear
        } else {
            LayoutKind::Branching
        };

        Self { root_id, nodes, edges, children, layout }
    }

    pub fn root_id(&self) -> SpeciesId {
        self.root_id
    }

    pub fn layout(&self) -> LayoutKind {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: SpeciesId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: SpeciesId) -> Option<&SpeciesNode> {
        self.nodes.get(&id)
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &SpeciesNode> {
        self.nodes.values()
    }

    /// Edges in the order they were discovered (breadth-first, branch order within a parent).
    pub fn edges(&self) -> &[Evolution] {
        &self.edges
    }

    pub fn depth(&self, id: SpeciesId) -> Option<usize> {
        self.nodes.get(&id).map(SpeciesNode::depth)
    }

    /// Direct evolutions of `id` in branch order. Empty for leaves and unknown ids.
    pub fn children(&self, id: SpeciesId) -> &[SpeciesId] {
        self.children.get(&id).map(|branches| branches.as_slice()).unwrap_or(&[])
    }

    /// The evolution leading into `id`, if it is not the root.
    pub fn incoming(&self, id: SpeciesId) -> Option<&Evolution> {
        self.edges.iter().find(|edge| edge.to_id() == id)
    }

    pub fn parent(&self, id: SpeciesId) -> Option<SpeciesId> {
        self.incoming(id).map(Evolution::from_id)
    }

    pub fn trigger_into(&self, id: SpeciesId) -> Option<&Trigger> {
        self.incoming(id).map(Evolution::trigger)
    }

    /// Position of `id` among its siblings, as recorded at build time.
    pub fn branch_position(&self, id: SpeciesId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|child| *child == id)
    }
}
