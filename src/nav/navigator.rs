// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use super::builder::{build_chain, build_chain_with_names};
use super::cursor::Direction;
use super::error::NavError;
use super::stack::NavigationStack;
use super::view::{ViewState, ViewTab};
use crate::model::SpeciesId;
use crate::store::FamilyLookup;

pub const DEFAULT_LOOKUP_BUDGET: Duration = Duration::from_millis(50);

const SCROLL_STEP: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavConfig {
    /// Longest a family lookup may take before the drill-in is abandoned.
    pub lookup_budget: Duration,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { lookup_budget: DEFAULT_LOOKUP_BUDGET }
    }
}

/// One discrete input, already debounced by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MovePrev,
    MoveNext,
    Activate,
    Back,
    NextTab,
    PrevTab,
    ScrollUp,
    ScrollDown,
}

/// What a call to [`Navigator::handle_action`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Moved { index: usize },
    Opened { target: SpeciesId },
    Restored { target: SpeciesId },
    /// Back was pressed on the entry view; the browse context takes over.
    ExitToBrowse,
    TabChanged(ViewTab),
    Scrolled { offset: u16 },
    /// The drill-in failed and the current view stays on screen.
    Aborted(NavError),
}

/// Drives a [`NavigationStack`] from discrete actions.
///
/// Drill-in transitions are atomic: the family is fetched, the chain built and the view assembled
/// before anything is pushed, so a failed or slow lookup leaves the stack untouched.
#[derive(Debug)]
pub struct Navigator<L> {
    lookup: L,
    stack: NavigationStack,
    config: NavConfig,
}

impl<L: FamilyLookup> Navigator<L> {
    /// Opens the entry view for `target`, as requested by the browse context.
    pub fn enter(
        lookup: L,
        target: SpeciesId,
        tab: ViewTab,
        config: NavConfig,
    ) -> Result<Self, NavError> {
        let entry = open_view(&lookup, target, tab, config.lookup_budget)?;
        tracing::info!(
            species = %target,
            layout = entry.chain().layout().as_str(),
            selectable = entry.cursor().selectable_count(),
            "navigation session started"
        );
        Ok(Self::with_entry(lookup, entry, config))
    }

    pub fn with_entry(lookup: L, entry: ViewState, config: NavConfig) -> Self {
        Self { lookup, stack: NavigationStack::new(entry), config }
    }

    pub fn current(&self) -> &ViewState {
        self.stack.peek()
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn config(&self) -> NavConfig {
        self.config
    }

    pub fn handle_action(&mut self, action: Action) -> Effect {
        match action {
            Action::MovePrev => self.move_focus(Direction::Prev),
            Action::MoveNext => self.move_focus(Direction::Next),
            Action::Activate => self.activate(),
            Action::Back => self.back(),
            Action::NextTab => {
                let tab = self.stack.peek().tab().cycle();
                self.stack.top_mut().set_tab(tab);
                Effect::TabChanged(tab)
            }
            Action::PrevTab => {
                let tab = self.stack.peek().tab().cycle_back();
                self.stack.top_mut().set_tab(tab);
                Effect::TabChanged(tab)
            }
            Action::ScrollUp => self.scroll(-SCROLL_STEP),
            Action::ScrollDown => self.scroll(SCROLL_STEP),
        }
    }

    /// Pushes a fresh view for `id`, carrying the current tab over. Only reached from
    /// [`Action::Activate`] once the focused id differs from the current target.
    fn drill_into(&mut self, id: SpeciesId) -> Result<(), NavError> {
        let tab = self.stack.peek().tab();
        let view = open_view(&self.lookup, id, tab, self.config.lookup_budget)?;
        self.stack.push(view);
        Ok(())
    }

    fn move_focus(&mut self, direction: Direction) -> Effect {
        match self.stack.top_mut().cursor_mut().move_focus(direction) {
            Some(index) => {
                tracing::debug!(index, ?direction, "focus moved");
                Effect::Moved { index }
            }
            None => Effect::None,
        }
    }

    fn activate(&mut self) -> Effect {
        let current = self.stack.peek();
        let Some(selected) = current.cursor().activate() else {
            return Effect::None;
        };
        if selected == current.target() {
            return Effect::None;
        }

        match self.drill_into(selected) {
            Ok(()) => {
                tracing::debug!(species = %selected, depth = self.stack.depth(), "view pushed");
                Effect::Opened { target: selected }
            }
            Err(err) => {
                tracing::warn!(
                    species = %selected,
                    kind = err.kind(),
                    error = %err,
                    "drill-in aborted"
                );
                Effect::Aborted(err)
            }
        }
    }

    fn back(&mut self) -> Effect {
        match self.stack.pop() {
            Some(view) => {
                let target = view.target();
                tracing::debug!(species = %target, depth = self.stack.depth(), "view popped");
                Effect::Restored { target }
            }
            None => Effect::ExitToBrowse,
        }
    }

    fn scroll(&mut self, delta: i32) -> Effect {
        let aux = self.stack.top_mut().aux_mut();
        aux.scroll_by(delta);
        Effect::Scrolled { offset: aux.scroll() }
    }
}

/// Fetches the family of `target` and assembles a view for it, without touching any stack.
fn open_view<L: FamilyLookup>(
    lookup: &L,
    target: SpeciesId,
    tab: ViewTab,
    budget: Duration,
) -> Result<ViewState, NavError> {
    let started = Instant::now();
    let record = lookup.fetch_family(target).map_err(|err| NavError::from_lookup(err, budget))?;
    let elapsed = started.elapsed();
    if elapsed > budget {
        return Err(NavError::LookupTimeout { elapsed, budget });
    }

    let chain = match record {
        Some(record) => build_chain_with_names(record.root_id, &record.edges, &record.names)?,
        None => match lookup.species_name(target) {
            Some(name) => build_chain_with_names(target, &[], &BTreeMap::from([(target, name)]))?,
            None => build_chain(target, &[])?,
        },
    };

    Ok(ViewState::new(target, chain, tab))
}

#[cfg(test)]
mod tests;
