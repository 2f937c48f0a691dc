//! Proptest generators for property-based testing.

use proptest::prelude::*;

use hashforge_algo::{catalog, Algorithm, AlgorithmId};

/// Generate a random compiled-in (non-sentinel) identifier.
pub fn algorithm_id() -> impl Strategy<Value = AlgorithmId> {
    proptest::sample::select(AlgorithmId::all())
}

/// Generate a random valid algorithm value.
pub fn algorithm() -> impl Strategy<Value = Algorithm> {
    algorithm_id().prop_map(Algorithm::new)
}

/// Every alias string in the catalog (canonical and short), paired with
/// the identifier it must resolve to.
pub fn known_aliases() -> Vec<(&'static str, AlgorithmId)> {
    let mut aliases = Vec::new();
    for entry in catalog::entries() {
        aliases.push((entry.name, entry.id));
        if let Some(short) = entry.short_name {
            aliases.push((short, entry.id));
        }
    }
    aliases
}

/// Generate a catalog alias with randomly flipped ASCII case, paired with
/// the identifier it must still resolve to.
pub fn case_mangled_alias() -> impl Strategy<Value = (String, AlgorithmId)> {
    proptest::sample::select(known_aliases()).prop_flat_map(|(alias, id)| {
        let flips = proptest::collection::vec(any::<bool>(), alias.len());
        flips.prop_map(move |flips| {
            let mangled = alias
                .chars()
                .zip(flips)
                .map(|(c, flip)| {
                    if flip {
                        c.to_ascii_uppercase()
                    } else {
                        c.to_ascii_lowercase()
                    }
                })
                .collect();
            (mangled, id)
        })
    })
}

/// Generate strings that are not aliases of anything.
pub fn junk_alias() -> impl Strategy<Value = String> {
    "[a-z0-9/_-]{1,24}".prop_filter("must not be a known alias", |s| {
        !known_aliases()
            .iter()
            .any(|(alias, _)| alias.eq_ignore_ascii_case(s))
    })
}
