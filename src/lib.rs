// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Evodex: evolution-chain browser with lossless drill-in navigation.
//!
//! `model` holds the species/chain types, `nav` the navigation core, `store` the family data
//! collaborator and `tui` the terminal front end.

pub mod model;
pub mod nav;
pub mod store;
pub mod tui;
