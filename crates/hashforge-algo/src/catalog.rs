//! Alias catalog: maps human-readable algorithm names (from configuration
//! or the command line) to [`AlgorithmId`]s.
//!
//! The catalog is assembled exactly once, before the first lookup, from the
//! compiled-in per-family tables below, then never mutated. Concurrent
//! readers need no synchronization for that reason. Lookups are linear in
//! the (small, fixed) table size; first match wins.

use std::sync::OnceLock;

use crate::id::AlgorithmId;

/// One row of the alias catalog: a canonical name, an optional short
/// name, and the identifier both resolve to.
///
/// Many aliases may map to one identifier. No alias string may map to two
/// different identifiers; that would be a table defect and is checked by
/// tests.
#[derive(Debug, Clone, Copy)]
pub struct AliasEntry {
    /// Canonical name, always present and non-empty.
    pub name: &'static str,
    /// Short name, if the entry has one.
    pub short_name: Option<&'static str>,
    /// The identifier this entry resolves to.
    pub id: AlgorithmId,
}

const fn entry(
    name: &'static str,
    short_name: Option<&'static str>,
    id: AlgorithmId,
) -> AliasEntry {
    AliasEntry { name, short_name, id }
}

const CN_ENTRIES: &[AliasEntry] = {
    use AlgorithmId::*;
    &[
        entry("cryptonight/0", Some("cn/0"), Cn0),
        entry("cryptonight", Some("cn"), Cn0),
        entry("cryptonight/1", Some("cn/1"), Cn1),
        entry("cryptonight-monerov7", None, Cn1),
        entry("cryptonight_v7", None, Cn1),
        entry("cryptonight/2", Some("cn/2"), Cn2),
        entry("cryptonight-monerov8", None, Cn2),
        entry("cryptonight_v8", None, Cn2),
        entry("cryptonight/r", Some("cn/r"), CnR),
        entry("cryptonight_r", None, CnR),
        entry("cryptonight/wow", Some("cn/wow"), CnWow),
        entry("cryptonight/fast", Some("cn/fast"), CnFast),
        entry("cryptonight/msr", Some("cn/msr"), CnFast),
        entry("cryptonight/half", Some("cn/half"), CnHalf),
        entry("cryptonight/xao", Some("cn/xao"), CnXao),
        entry("cryptonight_alloy", None, CnXao),
        entry("cryptonight/rto", Some("cn/rto"), CnRto),
        entry("cryptonight/rwz", Some("cn/rwz"), CnRwz),
        entry("cryptonight/zls", Some("cn/zls"), CnZls),
        entry("cryptonight/double", Some("cn/double"), CnDouble),
        entry("cryptonight/conceal", Some("cn/conceal"), CnConceal),
        entry("cryptonight/ccx", Some("cn/ccx"), CnConceal),
    ]
};

#[cfg(feature = "cn-gpu")]
const CN_GPU_ENTRIES: &[AliasEntry] = {
    use AlgorithmId::*;
    &[
        entry("cryptonight/gpu", Some("cn/gpu"), CnGpu),
        entry("cryptonight_gpu", None, CnGpu),
    ]
};

#[cfg(feature = "cn-lite")]
const CN_LITE_ENTRIES: &[AliasEntry] = {
    use AlgorithmId::*;
    &[
        entry("cryptonight-lite/0", Some("cn-lite/0"), CnLite0),
        entry("cryptonight-lite/1", Some("cn-lite/1"), CnLite1),
        entry("cryptonight-lite", Some("cn-lite"), CnLite1),
        entry("cryptonight-light", Some("cn-light"), CnLite1),
        entry("cryptonight_lite", None, CnLite1),
        entry("cryptonight-aeonv7", None, CnLite1),
        entry("cryptonight_lite_v7", None, CnLite1),
    ]
};

#[cfg(feature = "cn-heavy")]
const CN_HEAVY_ENTRIES: &[AliasEntry] = {
    use AlgorithmId::*;
    &[
        entry("cryptonight-heavy/0", Some("cn-heavy/0"), CnHeavy0),
        entry("cryptonight-heavy", Some("cn-heavy"), CnHeavy0),
        entry("cryptonight_heavy", None, CnHeavy0),
        entry("cryptonight-heavy/xhv", Some("cn-heavy/xhv"), CnHeavyXhv),
        entry("cryptonight_haven", None, CnHeavyXhv),
        entry("cryptonight-heavy/tube", Some("cn-heavy/tube"), CnHeavyTube),
        entry("cryptonight-bittube2", None, CnHeavyTube),
    ]
};

#[cfg(feature = "cn-pico")]
const CN_PICO_ENTRIES: &[AliasEntry] = {
    use AlgorithmId::*;
    &[
        entry("cryptonight-pico", Some("cn-pico"), CnPico0),
        entry("cryptonight-pico/trtl", Some("cn-pico/trtl"), CnPico0),
        entry("cryptonight-turtle", Some("cn-trtl"), CnPico0),
        entry("cryptonight-ultralite", Some("cn-ultralite"), CnPico0),
        entry("cryptonight_turtle", Some("cn_turtle"), CnPico0),
    ]
};

#[cfg(feature = "cn-extremelite")]
const CN_EXTREMELITE_ENTRIES: &[AliasEntry] = {
    use AlgorithmId::*;
    &[
        entry(
            "cryptonight-extremelite/upx2",
            Some("cn-extremelite/upx2"),
            CnExtremeLite0,
        ),
        entry("cryptonight-extremelite", Some("cn-extremelite"), CnExtremeLite0),
        entry("cryptonight-upx2", Some("cn-upx2"), CnExtremeLite0),
        entry("upx2", None, CnExtremeLite0),
    ]
};

#[cfg(feature = "randomx")]
const RX_ENTRIES: &[AliasEntry] = {
    use AlgorithmId::*;
    &[
        entry("randomx/0", Some("rx/0"), Rx0),
        entry("randomx/test", Some("rx/test"), Rx0),
        entry("RandomX", Some("rx"), Rx0),
        entry("randomx/wow", Some("rx/wow"), RxWow),
        entry("RandomWOW", None, RxWow),
        entry("randomx/loki", Some("rx/loki"), RxLoki),
        entry("RandomXL", None, RxLoki),
        entry("randomx/arq", Some("rx/arq"), RxArq),
        entry("RandomARQ", None, RxArq),
    ]
};

#[cfg(feature = "argon2")]
const AR2_ENTRIES: &[AliasEntry] = {
    use AlgorithmId::*;
    &[
        entry("argon2/chukwa", None, Ar2Chukwa),
        entry("chukwa", None, Ar2Chukwa),
        entry("ar2/512", None, Ar2Chukwa),
        entry("ar2-512", None, Ar2Chukwa),
        entry("argon2/wrkz", None, Ar2Wrkz),
        entry("ar2/256", None, Ar2Wrkz),
        entry("ar2-256", None, Ar2Wrkz),
    ]
};

fn build_catalog() -> Vec<AliasEntry> {
    let mut entries = Vec::with_capacity(64);
    entries.extend_from_slice(CN_ENTRIES);
    #[cfg(feature = "cn-gpu")]
    entries.extend_from_slice(CN_GPU_ENTRIES);
    #[cfg(feature = "cn-lite")]
    entries.extend_from_slice(CN_LITE_ENTRIES);
    #[cfg(feature = "cn-heavy")]
    entries.extend_from_slice(CN_HEAVY_ENTRIES);
    #[cfg(feature = "cn-pico")]
    entries.extend_from_slice(CN_PICO_ENTRIES);
    #[cfg(feature = "cn-extremelite")]
    entries.extend_from_slice(CN_EXTREMELITE_ENTRIES);
    #[cfg(feature = "randomx")]
    entries.extend_from_slice(RX_ENTRIES);
    #[cfg(feature = "argon2")]
    entries.extend_from_slice(AR2_ENTRIES);
    entries
}

/// Every alias entry compiled into this build, in table order.
pub fn entries() -> &'static [AliasEntry] {
    static CATALOG: OnceLock<Vec<AliasEntry>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog).as_slice()
}

/// Resolve an alias to an identifier.
///
/// `None` or an empty string resolves to [`AlgorithmId::Invalid`], as does
/// any string matching no entry. Comparison is ASCII-case-insensitive
/// against the canonical name, then the short name, in table order. Total:
/// an unresolved alias is a normal outcome, not an error.
pub fn parse(name: Option<&str>) -> AlgorithmId {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return AlgorithmId::Invalid,
    };

    for entry in entries() {
        if entry.name.eq_ignore_ascii_case(name)
            || entry
                .short_name
                .is_some_and(|short| short.eq_ignore_ascii_case(name))
        {
            return entry.id;
        }
    }

    AlgorithmId::Invalid
}

/// Display name for an identifier: the first catalog entry with that id.
///
/// With `prefer_short`, the short name is returned when the entry has one;
/// otherwise the canonical name. Identifiers absent from the catalog
/// (including both sentinels) yield the literal `"invalid"`.
pub fn name(id: AlgorithmId, prefer_short: bool) -> &'static str {
    for entry in entries() {
        if entry.id == id {
            return match entry.short_name {
                Some(short) if prefer_short => short,
                _ => entry.name,
            };
        }
    }

    "invalid"
}
