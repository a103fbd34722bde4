// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Builds an immutable [`Chain`] from flat evolution records.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use smol_str::SmolStr;

use super::error::IntegrityError;
use crate::model::{Branches, Chain, Evolution, SpeciesId, SpeciesNode};

/// Builds the family tree rooted at `root_id` from `edges`.
///
/// Siblings are ordered by ascending target id. An empty edge list yields a single-node chain.
pub fn build_chain(root_id: SpeciesId, edges: &[Evolution]) -> Result<Chain, IntegrityError> {
    build_chain_with_names(root_id, edges, &BTreeMap::new())
}

/// Like [`build_chain`], attaching display names from `names` to the nodes that have one.
pub fn build_chain_with_names(
    root_id: SpeciesId,
    edges: &[Evolution],
    names: &BTreeMap<SpeciesId, SmolStr>,
) -> Result<Chain, IntegrityError> {
    let mut parent_of = BTreeMap::<SpeciesId, SpeciesId>::new();
    for edge in edges {
        if edge.to_id() == root_id {
            return Err(IntegrityError::RootHasParent { from: edge.from_id(), root: root_id });
        }
        if let Some(first) = parent_of.insert(edge.to_id(), edge.from_id()) {
            return Err(IntegrityError::MultipleParents {
                child: edge.to_id(),
                first,
                second: edge.from_id(),
            });
        }
    }

    if !edges.is_empty() && !edges.iter().any(|edge| edge.from_id() == root_id) {
        return Err(IntegrityError::RootMissing { root: root_id });
    }

    let mut outgoing = BTreeMap::<SpeciesId, Vec<&Evolution>>::new();
    for edge in edges {
        outgoing.entry(edge.from_id()).or_default().push(edge);
    }
    for branch in outgoing.values_mut() {
        branch.sort_by_key(|edge| edge.to_id());
    }

    let name_of = |id: SpeciesId| names.get(&id).cloned();

    let mut nodes = BTreeMap::<SpeciesId, SpeciesNode>::new();
    let mut children = BTreeMap::<SpeciesId, Branches>::new();
    let mut ordered_edges = Vec::with_capacity(edges.len());
    let mut visited = BTreeSet::<SpeciesId>::new();
    let mut queue = VecDeque::<(SpeciesId, usize)>::new();

    visited.insert(root_id);
    nodes.insert(root_id, SpeciesNode::new(root_id, name_of(root_id), 0));
    queue.push_back((root_id, 0));

    while let Some((id, depth)) = queue.pop_front() {
        let Some(branch) = outgoing.get(&id) else {
            continue;
        };

        for edge in branch {
            let child = edge.to_id();
            if !visited.insert(child) {
                continue;
            }

            if let Some(node) = nodes.get_mut(&id) {
                node.push_requirement(edge.trigger().clone());
            }
            children.entry(id).or_default().push(child);
            nodes.insert(child, SpeciesNode::new(child, name_of(child), depth + 1));
            ordered_edges.push((*edge).clone());
            queue.push_back((child, depth + 1));
        }
    }

    if ordered_edges.len() != edges.len() {
        if let Some(edge) = edges.iter().find(|edge| !nodes.contains_key(&edge.to_id())) {
            return Err(IntegrityError::Disconnected {
                root: root_id,
                from: edge.from_id(),
                to: edge.to_id(),
            });
        }
    }

    Ok(Chain::from_parts(root_id, nodes, ordered_edges, children))
}
