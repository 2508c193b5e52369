// ─────────────────────────────────────────────────────────────────────
// SCPN Semiconductor Lab — Semicon Physics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form formulas evaluated over parameter sweeps.
//!
//! Every entry point takes a parameter struct whose fields all have defaults
//! and returns a fresh result; nothing is cached between calls.

pub mod band;
mod checks;
pub mod diode;
pub mod material;
pub mod plot;
pub mod transistor;
