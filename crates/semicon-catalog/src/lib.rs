// ─────────────────────────────────────────────────────────────────────
// SCPN Semiconductor Lab — Semicon Catalog
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Read-only reference tables.
//!
//! Both catalogs are `const` data: shared across request handlers without locks.

pub mod devices;
pub mod materials;

use semicon_types::error::{SemiconError, SemiconResult};

/// First entry whose English or local name contains `query`, ignoring case.
pub(crate) fn find_by_name<'a, T>(
    records: &'a [T],
    query: &str,
    kind: &'static str,
    names_of: impl Fn(&T) -> [&str; 2],
) -> SemiconResult<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(SemiconError::InvalidParameter(format!(
            "{kind} name must not be empty"
        )));
    }
    records
        .iter()
        .find(|r| {
            names_of(r)
                .iter()
                .any(|name| name.to_lowercase().contains(&needle))
        })
        .ok_or_else(|| SemiconError::NotFound {
            kind,
            name: query.to_string(),
        })
}
