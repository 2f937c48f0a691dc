//! Family classification: groups algorithm identifiers by shared
//! memory-footprint and intensity characteristics.

use crate::id::AlgorithmId;

/// A group of algorithm variants sharing memory/resource characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// CryptoNight base family, 2 MiB scratchpad.
    Cn,
    /// CryptoNight-Lite, 1 MiB scratchpad.
    #[cfg(feature = "cn-lite")]
    CnLite,
    /// CryptoNight-Heavy, 4 MiB scratchpad.
    #[cfg(feature = "cn-heavy")]
    CnHeavy,
    /// CryptoNight-Pico, 256 KiB scratchpad.
    #[cfg(feature = "cn-pico")]
    CnPico,
    /// CryptoNight-ExtremeLite, 128 KiB scratchpad.
    #[cfg(feature = "cn-extremelite")]
    CnExtremeLite,
    /// RandomX: random-execution algorithms with per-variant dataset sizes.
    #[cfg(feature = "randomx")]
    RandomX,
    /// Argon2: memory-hard key-derivation algorithms.
    #[cfg(feature = "argon2")]
    Argon2,
    /// Sentinel ids and nothing else. A compiled-in algorithm can never
    /// reach this tag: the classifier match below is exhaustive with no
    /// wildcard arm, so an unmapped variant is a compile error.
    Unknown,
}

impl Family {
    /// Classify an identifier. Total over the full id range, including
    /// both sentinels; pure and side-effect-free.
    pub fn of(id: AlgorithmId) -> Family {
        use AlgorithmId::*;

        match id {
            Cn0 | Cn1 | Cn2 | CnR | CnWow | CnFast | CnHalf | CnXao | CnRto
            | CnRwz | CnZls | CnDouble | CnConceal => Family::Cn,
            #[cfg(feature = "cn-gpu")]
            CnGpu => Family::Cn,

            #[cfg(feature = "cn-lite")]
            CnLite0 | CnLite1 => Family::CnLite,

            #[cfg(feature = "cn-heavy")]
            CnHeavy0 | CnHeavyTube | CnHeavyXhv => Family::CnHeavy,

            #[cfg(feature = "cn-pico")]
            CnPico0 => Family::CnPico,

            #[cfg(feature = "cn-extremelite")]
            CnExtremeLite0 => Family::CnExtremeLite,

            #[cfg(feature = "randomx")]
            Rx0 | RxWow | RxLoki | RxArq => Family::RandomX,

            #[cfg(feature = "argon2")]
            Ar2Chukwa | Ar2Wrkz => Family::Argon2,

            Invalid | Max => Family::Unknown,
        }
    }

    /// Whether this is one of the CryptoNight families.
    pub fn is_cn(self) -> bool {
        match self {
            Family::Cn => true,
            #[cfg(feature = "cn-lite")]
            Family::CnLite => true,
            #[cfg(feature = "cn-heavy")]
            Family::CnHeavy => true,
            #[cfg(feature = "cn-pico")]
            Family::CnPico => true,
            #[cfg(feature = "cn-extremelite")]
            Family::CnExtremeLite => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_compiled_id_is_classified() {
        for &id in AlgorithmId::all() {
            assert_ne!(
                Family::of(id),
                Family::Unknown,
                "{id:?} must belong to a family"
            );
        }
    }

    #[test]
    fn test_sentinels_are_unknown() {
        assert_eq!(Family::of(AlgorithmId::Invalid), Family::Unknown);
        assert_eq!(Family::of(AlgorithmId::Max), Family::Unknown);
    }

    #[test]
    fn test_base_family() {
        assert_eq!(Family::of(AlgorithmId::Cn0), Family::Cn);
        assert_eq!(Family::of(AlgorithmId::CnConceal), Family::Cn);
        assert!(Family::of(AlgorithmId::Cn1).is_cn());
    }

    #[test]
    #[cfg(feature = "randomx")]
    fn test_randomx_family_is_not_cn() {
        assert_eq!(Family::of(AlgorithmId::RxWow), Family::RandomX);
        assert!(!Family::RandomX.is_cn());
    }

    #[test]
    #[cfg(feature = "argon2")]
    fn test_argon2_family() {
        assert_eq!(Family::of(AlgorithmId::Ar2Chukwa), Family::Argon2);
        assert_eq!(Family::of(AlgorithmId::Ar2Wrkz), Family::Argon2);
    }
}
