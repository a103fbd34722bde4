// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Chain, LayoutKind, SpeciesId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Focus over the navigable members of a [`Chain`].
///
/// Single-stage chains have nothing to select; every operation on them is a no-op returning
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusCursor {
    selectable: Vec<SpeciesId>,
    index: Option<usize>,
}

impl FocusCursor {
    /// Cursor focused on the chain's root (index 0 unless the chain is single-stage).
    pub fn from_chain(chain: &Chain) -> Self {
        Self::focused_on(chain, chain.root_id())
    }

    /// Cursor focused on `target` if it is selectable, otherwise on the first entry.
    pub fn focused_on(chain: &Chain, target: SpeciesId) -> Self {
        let selectable = selectable_order(chain);
        let index = if selectable.is_empty() {
            None
        } else {
            Some(selectable.iter().position(|id| *id == target).unwrap_or(0))
        };
        Self { selectable, index }
    }

    pub fn selectable(&self) -> &[SpeciesId] {
        &self.selectable
    }

    pub fn selectable_count(&self) -> usize {
        self.selectable.len()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn move_focus(&mut self, direction: Direction) -> Option<usize> {
        let len = self.selectable.len();
        if len == 0 {
            return None;
        }

        let current = self.index.unwrap_or(0).min(len - 1);
        let next = match direction {
            Direction::Next => (current + 1) % len,
            Direction::Prev => (current + len - 1) % len,
        };
        self.index = Some(next);
        self.index
    }

    /// Id under the cursor. Does not change the cursor.
    pub fn activate(&self) -> Option<SpeciesId> {
        self.index.and_then(|idx| self.selectable.get(idx).copied())
    }
}

fn selectable_order(chain: &Chain) -> Vec<SpeciesId> {
    match chain.layout() {
        LayoutKind::Single => Vec::new(),
        LayoutKind::Linear => {
            let mut order: Vec<SpeciesId> = chain.nodes().map(|node| node.id()).collect();
            order.sort_by_key(|id| {
                (chain.depth(*id).unwrap_or(usize::MAX), chain.branch_position(*id).unwrap_or(0))
            });
            order
        }
        LayoutKind::Branching => {
            let mut order = Vec::with_capacity(chain.len());
            let mut stack = vec![chain.root_id()];
            while let Some(id) = stack.pop() {
                order.push(id);
                stack.extend(chain.children(id).iter().rev().copied());
            }
            order
        }
    }
}
