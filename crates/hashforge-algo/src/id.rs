//! Algorithm identifiers: the closed set of hash-algorithm variants
//! compiled into this build.
//!
//! Which variants exist is decided at build time by the family feature
//! flags (`cn-lite`, `cn-heavy`, `cn-pico`, `cn-extremelite`, `cn-gpu`,
//! `randomx`, `argon2`). A disabled family is absent from the enum, the
//! alias catalog, the classifier, and the size tables.

use std::sync::OnceLock;

/// Identifier for one supported hash-algorithm variant.
///
/// Two reserved sentinels exist: [`AlgorithmId::Invalid`] means
/// "unset/unrecognized" and [`AlgorithmId::Max`] marks the logical end of
/// the id range. Neither is ever a real algorithm. Every non-sentinel id
/// belongs to exactly one [`Family`](crate::Family).
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlgorithmId {
    // CryptoNight base family
    /// CryptoNight v0 (original).
    Cn0,
    /// CryptoNight v1 (Monero v7).
    Cn1,
    /// CryptoNight v2 (Monero v8).
    Cn2,
    /// CryptoNight-R.
    CnR,
    /// CryptoNight variant for Wownero.
    CnWow,
    /// CryptoNight-Fast (Masari).
    CnFast,
    /// CryptoNight-Half.
    CnHalf,
    /// CryptoNight-XAO (Alloy).
    CnXao,
    /// CryptoNight-RTO (Arto).
    CnRto,
    /// CryptoNight-RWZ (Graft).
    CnRwz,
    /// CryptoNight-ZLS (Zelerius).
    CnZls,
    /// CryptoNight-Double (X-CASH).
    CnDouble,
    /// CryptoNight-Conceal.
    CnConceal,
    /// CryptoNight-GPU, requires dedicated accelerator state.
    #[cfg(feature = "cn-gpu")]
    CnGpu,

    // CryptoNight-Lite family
    /// CryptoNight-Lite v0.
    #[cfg(feature = "cn-lite")]
    CnLite0,
    /// CryptoNight-Lite v1 (Aeon v7).
    #[cfg(feature = "cn-lite")]
    CnLite1,

    // CryptoNight-Heavy family
    /// CryptoNight-Heavy.
    #[cfg(feature = "cn-heavy")]
    CnHeavy0,
    /// CryptoNight-Heavy variant for BitTube.
    #[cfg(feature = "cn-heavy")]
    CnHeavyTube,
    /// CryptoNight-Heavy variant for Haven.
    #[cfg(feature = "cn-heavy")]
    CnHeavyXhv,

    // CryptoNight-Pico family
    /// CryptoNight-Pico (TurtleCoin).
    #[cfg(feature = "cn-pico")]
    CnPico0,

    // CryptoNight-ExtremeLite family
    /// CryptoNight-ExtremeLite (uPlexa v2).
    #[cfg(feature = "cn-extremelite")]
    CnExtremeLite0,

    // RandomX family
    /// RandomX (Monero).
    #[cfg(feature = "randomx")]
    Rx0,
    /// RandomWOW (Wownero).
    #[cfg(feature = "randomx")]
    RxWow,
    /// RandomXL (Loki).
    #[cfg(feature = "randomx")]
    RxLoki,
    /// RandomARQ (ArQmA).
    #[cfg(feature = "randomx")]
    RxArq,

    // Argon2 family
    /// Argon2id/Chukwa (TurtleCoin).
    #[cfg(feature = "argon2")]
    Ar2Chukwa,
    /// Argon2id/WRKZ.
    #[cfg(feature = "argon2")]
    Ar2Wrkz,

    /// Sentinel: no algorithm selected or alias not recognized.
    Invalid,
    /// Sentinel: end of the valid id range, used only for bounds.
    Max,
}

impl AlgorithmId {
    /// Whether this id names a real algorithm (neither sentinel).
    pub fn is_valid(self) -> bool {
        !matches!(self, AlgorithmId::Invalid | AlgorithmId::Max)
    }

    /// Every non-sentinel id compiled into this build, in declaration
    /// order. Assembled once, immutable afterward.
    pub fn all() -> &'static [AlgorithmId] {
        static ALL: OnceLock<Vec<AlgorithmId>> = OnceLock::new();
        ALL.get_or_init(build_id_list).as_slice()
    }
}

impl Default for AlgorithmId {
    fn default() -> Self {
        AlgorithmId::Invalid
    }
}

fn build_id_list() -> Vec<AlgorithmId> {
    use AlgorithmId::*;

    let mut ids = vec![
        Cn0, Cn1, Cn2, CnR, CnWow, CnFast, CnHalf, CnXao, CnRto, CnRwz,
        CnZls, CnDouble, CnConceal,
    ];
    #[cfg(feature = "cn-gpu")]
    ids.push(CnGpu);
    #[cfg(feature = "cn-lite")]
    ids.extend_from_slice(&[CnLite0, CnLite1]);
    #[cfg(feature = "cn-heavy")]
    ids.extend_from_slice(&[CnHeavy0, CnHeavyTube, CnHeavyXhv]);
    #[cfg(feature = "cn-pico")]
    ids.push(CnPico0);
    #[cfg(feature = "cn-extremelite")]
    ids.push(CnExtremeLite0);
    #[cfg(feature = "randomx")]
    ids.extend_from_slice(&[Rx0, RxWow, RxLoki, RxArq]);
    #[cfg(feature = "argon2")]
    ids.extend_from_slice(&[Ar2Chukwa, Ar2Wrkz]);
    ids
}
