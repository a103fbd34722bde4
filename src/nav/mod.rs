// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Evolution-graph navigation.
//!
//! [`build_chain`] turns flat relation records into a [`Chain`](crate::model::Chain), a
//! [`FocusCursor`] walks its selectable members, and the [`Navigator`] pushes and pops
//! [`ViewState`]s on a [`NavigationStack`] in response to [`Action`]s.

pub mod builder;
pub mod cursor;
pub mod error;
pub mod navigator;
pub mod stack;
pub mod view;

pub use builder::{build_chain, build_chain_with_names};
pub use cursor::{Direction, FocusCursor};
pub use error::{IntegrityError, NavError};
pub use navigator::{Action, Effect, NavConfig, Navigator, DEFAULT_LOOKUP_BUDGET};
pub use stack::NavigationStack;
pub use view::{AuxState, ViewState, ViewTab};
