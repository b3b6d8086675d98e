//! List-level merging of item records.
//!
//! When several DATs are combined, the same dump often appears more than once
//! with different subsets of hashes. These helpers collapse such duplicates
//! and give distinct items that share a name unique names.

use std::collections::HashMap;

use datkit_core::{FieldValue, Record};

use crate::identity::{duplicate_suffix, equal_to, fill_missing_hashes, has_zero_hash, is_nodump};

/// Collapse items that [`equal_to`] an earlier item into that item.
///
/// The first occurrence is kept and gains any hashes only later duplicates
/// carried. `nodump` items are never merged, since they carry no hashes to
/// tell them apart.
pub fn merge_duplicates(items: Vec<Record>) -> Vec<Record> {
    let total = items.len();
    let mut kept: Vec<Record> = Vec::with_capacity(total);

    for item in items {
        if has_zero_hash(&item) {
            log::debug!(
                "{} '{}' has no usable hash",
                item.variant(),
                item.name().unwrap_or_default()
            );
        }

        let existing = if is_nodump(&item) {
            None
        } else {
            kept.iter_mut()
                .find(|existing| !is_nodump(existing) && equal_to(existing, &item))
        };

        match existing {
            Some(existing) => {
                let filled = fill_missing_hashes(existing, &item);
                log::debug!(
                    "merged duplicate {} '{}' ({filled} hashes filled)",
                    item.variant(),
                    item.name().unwrap_or_default()
                );
            }
            None => kept.push(item),
        }
    }

    log::debug!("merged {total} items into {}", kept.len());
    kept
}

/// Rename distinct items that share a name.
///
/// Every occurrence after the first gets its [`duplicate_suffix`] inserted
/// before the extension: `game.bin` becomes `game_deadbeef.bin`. If that name
/// is already held by a different item, a counter is appended to the suffix
/// (`game_deadbeef_1.bin`). Items equal to the holder of a name are left
/// alone. Returns how many items were renamed.
pub fn resolve_duplicate_names(items: &mut [Record]) -> usize {
    let mut first_by_name: HashMap<String, usize> = HashMap::new();
    let mut renamed = 0;

    for index in 0..items.len() {
        let Some(name) = items[index].name().map(str::to_string) else {
            continue;
        };

        let first = match first_by_name.get(&name) {
            Some(&first) => first,
            None => {
                first_by_name.insert(name, index);
                continue;
            }
        };
        if equal_to(&items[first], &items[index]) {
            continue;
        }

        let suffix = duplicate_suffix(&items[index]);
        let mut new_name = with_suffix(&name, &suffix);
        let mut counter = 1;
        while let Some(&holder) = first_by_name.get(&new_name) {
            if equal_to(&items[holder], &items[index]) {
                break;
            }
            new_name = with_suffix(&name, &format!("{suffix}_{counter}"));
            counter += 1;
        }

        match items[index].insert("name", Some(FieldValue::String(new_name.clone()))) {
            Ok(()) => {
                log::debug!("renamed duplicate '{name}' to '{new_name}'");
                first_by_name.entry(new_name).or_insert(index);
                renamed += 1;
            }
            Err(e) => log::warn!("could not rename '{name}': {e}"),
        }
    }

    renamed
}

/// Insert `suffix` before the extension of the last path component.
fn with_suffix(name: &str, suffix: &str) -> String {
    let file_start = name.rfind(['/', '\\']).map_or(0, |i| i + 1);
    match name[file_start..].rfind('.') {
        Some(dot) if dot > 0 => {
            let dot = file_start + dot;
            format!("{}{suffix}{}", &name[..dot], &name[dot..])
        }
        _ => format!("{name}{suffix}"),
    }
}
