// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::view::ViewState;
use crate::model::SpeciesId;

/// LIFO history of detail views.
///
/// The bottom frame is the entry view handed over by the browse context and is never removed
/// here; the stack is therefore never empty. Only the top frame is reachable mutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    entry: ViewState,
    pushed: Vec<ViewState>,
}

impl NavigationStack {
    pub fn new(entry: ViewState) -> Self {
        Self { entry, pushed: Vec::new() }
    }

    pub fn push(&mut self, view: ViewState) {
        self.pushed.push(view);
    }

    /// Discards the top view and returns the one below it, unchanged.
    ///
    /// Returns `None` when only the entry frame is left; back-navigation then belongs to the
    /// browse context.
    pub fn pop(&mut self) -> Option<&ViewState> {
        self.pushed.pop()?;
        Some(self.peek())
    }

    pub fn peek(&self) -> &ViewState {
        self.pushed.last().unwrap_or(&self.entry)
    }

    pub(crate) fn top_mut(&mut self) -> &mut ViewState {
        self.pushed.last_mut().unwrap_or(&mut self.entry)
    }

    /// Number of frames including the entry frame.
    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }

    pub fn is_at_entry(&self) -> bool {
        self.pushed.is_empty()
    }

    /// Target ids from the entry frame up to the top.
    pub fn breadcrumb(&self) -> Vec<SpeciesId> {
        std::iter::once(&self.entry).chain(&self.pushed).map(ViewState::target).collect()
    }
}
