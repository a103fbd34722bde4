// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::cursor::FocusCursor;
use crate::model::{Chain, SpeciesId};

/// Detail tab shown for the target species.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewTab {
    Overview,
    #[default]
    Evolution,
    Requirements,
}

impl ViewTab {
    pub const ALL: [ViewTab; 3] = [Self::Overview, Self::Evolution, Self::Requirements];

    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Evolution => "Evolution",
            Self::Requirements => "Requirements",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Evolution => 1,
            Self::Requirements => 2,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            Self::Overview => Self::Evolution,
            Self::Evolution => Self::Requirements,
            Self::Requirements => Self::Overview,
        }
    }

    pub fn cycle_back(self) -> Self {
        match self {
            Self::Overview => Self::Requirements,
            Self::Evolution => Self::Overview,
            Self::Requirements => Self::Evolution,
        }
    }
}

/// Display state that is reset whenever a new view is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AuxState {
    scroll: u16,
}

impl AuxState {
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub(crate) fn scroll_by(&mut self, delta: i32) {
        let step = u16::try_from(delta.unsigned_abs()).unwrap_or(u16::MAX);
        if delta < 0 {
            self.scroll = self.scroll.saturating_sub(step);
        } else {
            self.scroll = self.scroll.saturating_add(step);
        }
    }
}

/// Snapshot of one detail view: the target species, its family, the focus and tab/scroll state.
///
/// Views below the top of a [`NavigationStack`](super::NavigationStack) are never mutated, so
/// popping back to one yields exactly what was shown before the drill-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    target: SpeciesId,
    chain: Chain,
    cursor: FocusCursor,
    tab: ViewTab,
    aux: AuxState,
}

impl ViewState {
    /// New view with the focus placed on `target` and default scroll state.
    pub fn new(target: SpeciesId, chain: Chain, tab: ViewTab) -> Self {
        let cursor = FocusCursor::focused_on(&chain, target);
        Self { target, chain, cursor, tab, aux: AuxState::default() }
    }

    pub fn target(&self) -> SpeciesId {
        self.target
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn cursor(&self) -> &FocusCursor {
        &self.cursor
    }

    pub fn tab(&self) -> ViewTab {
        self.tab
    }

    pub fn aux(&self) -> &AuxState {
        &self.aux
    }

    pub(crate) fn cursor_mut(&mut self) -> &mut FocusCursor {
        &mut self.cursor
    }

    pub(crate) fn set_tab(&mut self, tab: ViewTab) {
        self.tab = tab;
    }

    pub(crate) fn aux_mut(&mut self) -> &mut AuxState {
        &mut self.aux
    }
}
