// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::time::Duration;

use rstest::rstest;

use super::{Action, Effect, NavConfig, Navigator};
use crate::model::fixtures::{charmander_line, eevee_family, evo, sid};
use crate::model::{Evolution, LayoutKind, SpeciesId};
use crate::nav::{IntegrityError, NavError, ViewTab};
use crate::store::{Catalog, FamilyLookup, FamilyRecord, LookupError};

/// Serves fixed families keyed by every member id.
#[derive(Default)]
struct FixedLookup {
    families: BTreeMap<SpeciesId, (SpeciesId, Vec<Evolution>)>,
    delay: Option<Duration>,
    fail_on: Option<SpeciesId>,
}

impl FixedLookup {
    fn with_family(mut self, root: u32, edges: Vec<Evolution>) -> Self {
        let root = sid(root);
        self.families.insert(root, (root, edges.clone()));
        for edge in &edges {
            self.families.insert(edge.to_id(), (root, edges.clone()));
        }
        self
    }

    fn standard() -> Self {
        Self::default().with_family(4, charmander_line()).with_family(133, eevee_family())
    }
}

impl FamilyLookup for FixedLookup {
    fn fetch_family(&self, id: SpeciesId) -> Result<Option<FamilyRecord>, LookupError> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        if self.fail_on == Some(id) {
            return Err(LookupError::Timeout { elapsed: Duration::from_millis(80) });
        }
        Ok(self.families.get(&id).map(|(root_id, edges)| FamilyRecord {
            root_id: *root_id,
            edges: edges.clone(),
            names: BTreeMap::new(),
        }))
    }
}

fn enter(lookup: FixedLookup, target: u32) -> Navigator<FixedLookup> {
    Navigator::enter(lookup, sid(target), ViewTab::Evolution, NavConfig::default())
        .expect("entry view")
}

#[test]
fn single_stage_entry_has_nothing_to_select() {
    let mut nav = enter(FixedLookup::standard(), 132);

    assert_eq!(nav.current().chain().layout(), LayoutKind::Single);
    assert_eq!(nav.current().cursor().selectable_count(), 0);
    assert_eq!(nav.handle_action(Action::MoveNext), Effect::None);
    assert_eq!(nav.handle_action(Action::Activate), Effect::None);
    assert_eq!(nav.stack().depth(), 1);
}

#[test]
fn activate_drills_into_selected_relative() {
    let mut nav = enter(FixedLookup::standard(), 4);

    assert_eq!(nav.handle_action(Action::MoveNext), Effect::Moved { index: 1 });
    assert_eq!(nav.handle_action(Action::Activate), Effect::Opened { target: sid(5) });

    let top = nav.current();
    assert_eq!(top.target(), sid(5));
    assert_eq!(top.cursor().index(), Some(1));
    assert_eq!(top.chain().root_id(), sid(4));
    assert_eq!(nav.stack().breadcrumb(), vec![sid(4), sid(5)]);
}

#[test]
fn back_restores_previous_view_verbatim() {
    let mut nav = enter(FixedLookup::standard(), 4);
    nav.handle_action(Action::MoveNext);
    nav.handle_action(Action::NextTab);
    nav.handle_action(Action::ScrollDown);
    let before = nav.current().clone();

    nav.handle_action(Action::Activate);
    nav.handle_action(Action::MoveNext);
    nav.handle_action(Action::ScrollDown);
    nav.handle_action(Action::ScrollDown);

    assert_eq!(nav.handle_action(Action::Back), Effect::Restored { target: sid(4) });
    assert_eq!(nav.current(), &before);
    assert_eq!(nav.current().cursor().index(), Some(1));
}

#[test]
fn back_on_entry_hands_over_to_browse() {
    let mut nav = enter(FixedLookup::standard(), 4);
    let entry = nav.current().clone();

    assert_eq!(nav.handle_action(Action::Back), Effect::ExitToBrowse);
    assert_eq!(nav.current(), &entry);
}

#[test]
fn drill_in_carries_tab_and_resets_scroll() {
    let mut nav = enter(FixedLookup::standard(), 133);
    nav.handle_action(Action::PrevTab);
    nav.handle_action(Action::ScrollDown);
    nav.handle_action(Action::MoveNext);
    nav.handle_action(Action::MoveNext);

    assert_eq!(nav.handle_action(Action::Activate), Effect::Opened { target: sid(135) });
    assert_eq!(nav.current().tab(), ViewTab::Overview);
    assert_eq!(nav.current().aux().scroll(), 0);
    assert_eq!(nav.current().cursor().index(), Some(2));
}

#[test]
fn activating_current_target_is_a_noop() {
    let mut nav = enter(FixedLookup::standard(), 4);

    assert_eq!(nav.handle_action(Action::Activate), Effect::None);
    assert_eq!(nav.stack().depth(), 1);
}

#[test]
fn drilled_view_does_not_reopen_its_own_target() {
    let mut nav = enter(FixedLookup::standard(), 4);
    nav.handle_action(Action::MoveNext);
    assert_eq!(nav.handle_action(Action::Activate), Effect::Opened { target: sid(5) });
    let before = nav.stack().clone();

    assert_eq!(nav.handle_action(Action::Activate), Effect::None);
    assert_eq!(nav.stack(), &before);
}

#[test]
fn failed_lookup_leaves_stack_untouched() {
    let lookup = FixedLookup { fail_on: Some(sid(5)), ..FixedLookup::standard() };
    let mut nav = enter(lookup, 4);
    nav.handle_action(Action::MoveNext);
    let before = nav.stack().clone();

    let effect = nav.handle_action(Action::Activate);

    assert!(matches!(effect, Effect::Aborted(NavError::LookupTimeout { .. })));
    assert_eq!(nav.stack(), &before);
}

#[test]
fn slow_lookup_exceeding_budget_is_aborted() {
    let mut nav = enter(FixedLookup::standard(), 4);
    nav.handle_action(Action::MoveNext);
    let before = nav.stack().clone();

    let slow = FixedLookup { delay: Some(Duration::from_millis(20)), ..FixedLookup::standard() };
    let config = NavConfig { lookup_budget: Duration::from_millis(1) };
    let mut nav = Navigator::with_entry(slow, before.peek().clone(), config);

    let effect = nav.handle_action(Action::Activate);

    assert!(matches!(
        effect,
        Effect::Aborted(NavError::LookupTimeout { budget, .. }) if budget == config.lookup_budget
    ));
    assert_eq!(nav.stack(), &before);
}

#[test]
fn malformed_family_is_aborted_as_integrity_error() {
    let broken = vec![evo(4, 5, "level16"), evo(5, 6, "level36"), evo(4, 6, "glitch")];
    let lookup = FixedLookup::standard();
    let mut nav = enter(lookup, 4);
    nav.handle_action(Action::MoveNext);
    let entry = nav.current().clone();

    let mut nav = Navigator::with_entry(
        FixedLookup::default().with_family(4, broken),
        entry,
        NavConfig::default(),
    );
    let before = nav.stack().clone();

    let effect = nav.handle_action(Action::Activate);

    assert_eq!(
        effect,
        Effect::Aborted(NavError::DataIntegrity(IntegrityError::MultipleParents {
            child: sid(6),
            first: sid(5),
            second: sid(4),
        }))
    );
    assert_eq!(nav.stack(), &before);
}

#[test]
fn enter_propagates_lookup_failure() {
    let catalog = Catalog::demo();
    let err = Navigator::enter(&catalog, sid(9999), ViewTab::Evolution, NavConfig::default())
        .unwrap_err();

    assert!(matches!(err, NavError::LookupFailed(_)));
}

#[test]
fn catalog_backed_navigation_uses_names() {
    let catalog = Catalog::demo();
    let nav = Navigator::enter(&catalog, sid(132), ViewTab::Evolution, NavConfig::default())
        .expect("entry");

    let node = nav.current().chain().node(sid(132)).expect("node");
    assert_eq!(node.name(), Some("Ditto"));
}

#[rstest]
#[case::forward(Action::MoveNext, 1)]
#[case::backward(Action::MovePrev, 3)]
fn branching_moves_wrap(#[case] action: Action, #[case] expected: usize) {
    let mut nav = enter(FixedLookup::standard(), 133);

    assert_eq!(nav.handle_action(action), Effect::Moved { index: expected });
}
