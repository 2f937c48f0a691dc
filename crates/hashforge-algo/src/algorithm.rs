//! The `Algorithm` value type: one identifier plus derived metadata.
//!
//! An `Algorithm` stores nothing but its identifier. Family, working-set
//! sizes, and the intensity limit are computed on demand and are pure
//! functions of the identifier, so two values built from the same id always
//! agree on every query.

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::catalog;
use crate::cn;
use crate::error::ParseAlgorithmError;
use crate::family::Family;
use crate::id::AlgorithmId;

/// A hash-algorithm selection, possibly invalid.
///
/// The default value wraps [`AlgorithmId::Invalid`] and means "no
/// algorithm selected"; callers must not proceed with algorithm-dependent
/// work while [`is_valid`](Algorithm::is_valid) is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Algorithm(pub AlgorithmId);

impl Algorithm {
    /// Wrap an identifier.
    pub const fn new(id: AlgorithmId) -> Self {
        Self(id)
    }

    /// Resolve an alias (absent, empty, or unrecognized input yields the
    /// invalid value). See [`catalog::parse`].
    pub fn parse(name: Option<&str>) -> Self {
        Self(catalog::parse(name))
    }

    /// The wrapped identifier.
    pub const fn id(self) -> AlgorithmId {
        self.0
    }

    /// Whether a real algorithm is selected.
    pub fn is_valid(self) -> bool {
        self.0.is_valid()
    }

    /// Whether the algorithm belongs to one of the CryptoNight families.
    pub fn is_cn(self) -> bool {
        self.family().is_cn()
    }

    /// The family this algorithm belongs to; `Unknown` for the sentinels.
    pub fn family(self) -> Family {
        Family::of(self.0)
    }

    /// Canonical display name, or `"invalid"`.
    pub fn name(self) -> &'static str {
        catalog::name(self.0, false)
    }

    /// Short display name where one exists, canonical otherwise;
    /// `"invalid"` for unresolvable ids.
    pub fn short_name(self) -> &'static str {
        catalog::name(self.0, true)
    }

    /// Secondary-cache working-set bytes. Nonzero only for the RandomX
    /// family, with a fixed size per variant.
    pub fn l2(self) -> usize {
        #[cfg(feature = "randomx")]
        {
            use AlgorithmId::*;
            match self.0 {
                Rx0 | RxLoki => return 0x40000,
                RxWow => return 0x20000,
                RxArq => return 0x10000,
                _ => {}
            }
        }

        0
    }

    /// Primary working-set bytes required per concurrent instance.
    ///
    /// CryptoNight families delegate to the per-variant size table in
    /// [`cn`]; RandomX and Argon2 variants have fixed documented sizes;
    /// everything else (including the sentinels) is zero.
    pub fn l3(self) -> usize {
        let family = self.family();
        if family.is_cn() {
            return cn::memory(self.0);
        }

        #[cfg(feature = "randomx")]
        if family == Family::RandomX {
            use AlgorithmId::*;
            const ONE_MIB: usize = 0x100000;
            return match self.0 {
                Rx0 | RxLoki => 2 * ONE_MIB,
                RxWow => ONE_MIB,
                RxArq => ONE_MIB / 4,
                _ => 0,
            };
        }

        #[cfg(feature = "argon2")]
        if family == Family::Argon2 {
            use AlgorithmId::*;
            const ONE_MIB: usize = 0x100000;
            return match self.0 {
                Ar2Chukwa => ONE_MIB / 2,
                Ar2Wrkz => ONE_MIB / 4,
                _ => 0,
            };
        }

        0
    }

    /// Maximum concurrent hashing lanes per execution unit.
    ///
    /// 1 for RandomX and Argon2 variants, and for CryptoNight-GPU with its
    /// dedicated accelerator state; 5 for the cache-friendly CryptoNight
    /// variants.
    pub fn max_intensity(self) -> u32 {
        #[cfg(feature = "randomx")]
        if self.family() == Family::RandomX {
            return 1;
        }

        #[cfg(feature = "argon2")]
        if self.family() == Family::Argon2 {
            return 1;
        }

        #[cfg(feature = "cn-gpu")]
        if self.0 == AlgorithmId::CnGpu {
            return 1;
        }

        5
    }
}

impl From<AlgorithmId> for Algorithm {
    fn from(id: AlgorithmId) -> Self {
        Self(id)
    }
}

impl From<Algorithm> for AlgorithmId {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.0
    }
}

// Total conversion: unrecognized names yield the invalid value. The
// fallible counterpart is `FromStr`; an explicit `TryFrom<&str>` would
// collide with core's blanket impl derived from this one.
impl From<&str> for Algorithm {
    fn from(name: &str) -> Self {
        Self::parse(Some(name))
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseAlgorithmError::Empty);
        }

        let algorithm = Self::parse(Some(s));
        if algorithm.is_valid() {
            Ok(algorithm)
        } else {
            Err(ParseAlgorithmError::UnknownAlgorithm(s.to_owned()))
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Serializes as the short name string when valid, null otherwise. This is
/// the only externally serialized form of an algorithm selection.
impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_valid() {
            serializer.serialize_str(self.short_name())
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(Self::parse(name.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cn1_scenario() {
        let algorithm = Algorithm::parse(Some("cn/1"));
        assert_eq!(algorithm.id(), AlgorithmId::Cn1);
        assert_eq!(algorithm.family(), Family::Cn);
        assert!(algorithm.is_cn());
        assert_eq!(algorithm.max_intensity(), 5);
    }

    #[test]
    #[cfg(feature = "randomx")]
    fn test_random_wow_scenario() {
        let algorithm = Algorithm::parse(Some("RandomWOW"));
        assert_eq!(algorithm.id(), AlgorithmId::RxWow);
        assert_eq!(algorithm.l2(), 0x20000);
        assert_eq!(algorithm.l3(), 0x100000);
        assert_eq!(algorithm.max_intensity(), 1);
    }

    #[test]
    fn test_invalid_algorithm() {
        let algorithm = Algorithm::parse(None);
        assert!(!algorithm.is_valid());
        assert_eq!(algorithm.family(), Family::Unknown);
        assert_eq!(algorithm.l2(), 0);
        assert_eq!(algorithm.l3(), 0);
        assert_eq!(algorithm.name(), "invalid");
        assert_eq!(algorithm, Algorithm::default());
    }

    #[test]
    fn test_queries_are_pure() {
        for &id in AlgorithmId::all() {
            let a = Algorithm::new(id);
            let b = Algorithm::new(id);
            assert_eq!(a.l2(), b.l2());
            assert_eq!(a.l3(), b.l3());
            assert_eq!(a.max_intensity(), b.max_intensity());
            assert_eq!(a.family(), b.family());
        }
    }

    #[test]
    fn test_cn_l3_matches_working_set_table() {
        for &id in AlgorithmId::all() {
            let algorithm = Algorithm::new(id);
            if algorithm.is_cn() {
                assert_eq!(algorithm.l3(), crate::cn::memory(id));
                assert_ne!(algorithm.l3(), 0);
            }
        }
    }

    #[test]
    fn test_intensity_limits() {
        for &id in AlgorithmId::all() {
            let algorithm = Algorithm::new(id);
            let expected = match algorithm.family() {
                #[cfg(feature = "randomx")]
                Family::RandomX => 1,
                #[cfg(feature = "argon2")]
                Family::Argon2 => 1,
                #[cfg(feature = "cn-gpu")]
                _ if id == AlgorithmId::CnGpu => 1,
                _ => 5,
            };
            assert_eq!(algorithm.max_intensity(), expected, "{id:?}");
        }
    }

    #[test]
    fn test_display_uses_short_name() {
        // First catalog row carrying the id wins, so the bare legacy
        // alias displays as the versioned short name.
        assert_eq!(Algorithm::parse(Some("cryptonight")).to_string(), "cn/0");
        assert_eq!(Algorithm::parse(Some("cn/half")).to_string(), "cn/half");
        assert_eq!(Algorithm::default().to_string(), "invalid");
    }

    #[test]
    fn test_string_conversions_agree() {
        let from: Algorithm = Algorithm::from("cn/2");
        assert_eq!(from.id(), AlgorithmId::Cn2);

        // TryFrom comes from the blanket impl over From<&str>.
        let tried = Algorithm::try_from("cn/2").unwrap();
        assert_eq!(tried, from);

        // From is total where FromStr is fallible.
        assert!(!Algorithm::from("bogus").is_valid());
        assert!("bogus".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!("".parse::<Algorithm>(), Err(ParseAlgorithmError::Empty));
        assert_eq!(
            "bogus".parse::<Algorithm>(),
            Err(ParseAlgorithmError::UnknownAlgorithm("bogus".into()))
        );
        assert_eq!(
            "cn/half".parse::<Algorithm>(),
            Ok(Algorithm::new(AlgorithmId::CnHalf))
        );
    }

    #[test]
    fn test_serialize_valid_as_short_name() {
        let json = serde_json::to_string(&Algorithm::parse(Some("cryptonight/2"))).unwrap();
        assert_eq!(json, "\"cn/2\"");
    }

    #[test]
    fn test_serialize_invalid_as_null() {
        let json = serde_json::to_string(&Algorithm::default()).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_deserialize_round_trip() {
        for &id in AlgorithmId::all() {
            let algorithm = Algorithm::new(id);
            let json = serde_json::to_string(&algorithm).unwrap();
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(back, algorithm);
        }

        let back: Algorithm = serde_json::from_str("null").unwrap();
        assert!(!back.is_valid());
    }

    #[test]
    #[cfg(feature = "argon2")]
    fn test_short_name_without_short_alias() {
        let algorithm = Algorithm::parse(Some("argon2/wrkz"));
        assert_eq!(algorithm.short_name(), "argon2/wrkz");
        assert_eq!(algorithm.l3(), 0x40000);
        assert_eq!(algorithm.max_intensity(), 1);
    }
}
