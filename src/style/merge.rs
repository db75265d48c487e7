//! Attribute merging: base, behavior, overrides — in that order.
//!
//! Every rendered element gets its final attribute set from [`merge`]. The
//! precedence rules are fixed: behavior entries (rewritten to `hx-<verb>`)
//! overwrite base entries, overrides overwrite both, and a `class` present
//! in both base and overrides concatenates instead of replacing so callers
//! can extend generated styling without clobbering it.

use crate::html::attrs::AttrMap;
use crate::style::behavior::Behavior;

/// Attribute name whose base and override values concatenate instead of
/// replacing.
pub const CLASS_ATTR: &str = "class";

/// Prefix applied to every behavior verb during merge.
pub const HX_PREFIX: &str = "hx-";

/// Merge the three attribute sources of an element into one map.
///
/// In order:
/// 1. start from `base`;
/// 2. for each behavior entry, set `hx-<verb>`, overwriting any colliding
///    key from step 1 — the rewrite is applied exactly once per verb and
///    never to base or override keys;
/// 3. apply `overrides` last, overwriting steps 1–2, except a `class` key
///    present in both `base` and `overrides`, whose values concatenate
///    base-then-override with a single separating space.
///
/// Deterministic: for fixed inputs the output is identical on every call,
/// and non-colliding keys keep the order base → behavior → overrides.
/// There is no error path; malformed entries (e.g. an empty verb) pass
/// through unchanged.
pub fn merge(base: &AttrMap, behavior: &Behavior, overrides: &AttrMap) -> AttrMap {
    let mut merged = base.clone();
    for (verb, value) in behavior.iter() {
        merged.set(format!("{HX_PREFIX}{verb}"), value);
    }
    for (name, value) in overrides.iter() {
        if name == CLASS_ATTR {
            if let Some(combined) = merged
                .get(CLASS_ATTR)
                .map(|existing| join_classes(existing, value))
            {
                merged.set(CLASS_ATTR, combined);
                continue;
            }
        }
        merged.set(name, value);
    }
    merged
}

/// Join two class strings with a single space, trimming surrounding
/// whitespace. Either side may be empty.
pub fn join_classes(base: &str, extra: &str) -> String {
    match (base.trim(), extra.trim()) {
        ("", extra) => extra.to_owned(),
        (base, "") => base.to_owned(),
        (base, extra) => format!("{base} {extra}"),
    }
}
