//! Fixture vectors pinning the alias table and per-algorithm metadata.
//!
//! Each vector records the full expected metadata for one alias, so a
//! regression in the catalog, the classifier, or any size table shows up
//! as a concrete diff against a named expectation.

use hashforge_algo::{AlgorithmId, Family};

/// Expected metadata for one alias lookup.
#[derive(Debug, Clone)]
pub struct MetadataVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The alias fed to `parse`.
    pub alias: &'static str,
    /// Expected identifier.
    pub id: AlgorithmId,
    /// Expected family.
    pub family: Family,
    /// Expected secondary-cache working-set bytes.
    pub l2: usize,
    /// Expected primary working-set bytes.
    pub l3: usize,
    /// Expected concurrent-lane limit.
    pub max_intensity: u32,
    /// Expected short name (and JSON string form).
    pub short_name: &'static str,
}

/// Get all fixture vectors for the compiled-in feature set.
pub fn all_vectors() -> Vec<MetadataVector> {
    let mut vectors = vec![
        MetadataVector {
            name: "CryptoNight v0 via canonical name",
            alias: "cryptonight/0",
            id: AlgorithmId::Cn0,
            family: Family::Cn,
            l2: 0,
            l3: 0x200000,
            max_intensity: 5,
            short_name: "cn/0",
        },
        MetadataVector {
            name: "CryptoNight v0 via bare legacy alias",
            alias: "cn",
            id: AlgorithmId::Cn0,
            family: Family::Cn,
            l2: 0,
            l3: 0x200000,
            max_intensity: 5,
            short_name: "cn/0",
        },
        MetadataVector {
            name: "CryptoNight v1 via short name",
            alias: "cn/1",
            id: AlgorithmId::Cn1,
            family: Family::Cn,
            l2: 0,
            l3: 0x200000,
            max_intensity: 5,
            short_name: "cn/1",
        },
        MetadataVector {
            name: "CryptoNight-Half",
            alias: "cryptonight/half",
            id: AlgorithmId::CnHalf,
            family: Family::Cn,
            l2: 0,
            l3: 0x200000,
            max_intensity: 5,
            short_name: "cn/half",
        },
        MetadataVector {
            name: "CryptoNight-Conceal via ccx alias",
            alias: "cn/ccx",
            id: AlgorithmId::CnConceal,
            family: Family::Cn,
            l2: 0,
            l3: 0x200000,
            max_intensity: 5,
            short_name: "cn/conceal",
        },
    ];

    #[cfg(feature = "cn-gpu")]
    vectors.push(MetadataVector {
        name: "CryptoNight-GPU pins one lane",
        alias: "cn/gpu",
        id: AlgorithmId::CnGpu,
        family: Family::Cn,
        l2: 0,
        l3: 0x200000,
        max_intensity: 1,
        short_name: "cn/gpu",
    });

    #[cfg(feature = "cn-lite")]
    vectors.push(MetadataVector {
        name: "CryptoNight-Lite via bare alias resolves to v1",
        alias: "cn-lite",
        id: AlgorithmId::CnLite1,
        family: Family::CnLite,
        l2: 0,
        l3: 0x100000,
        max_intensity: 5,
        short_name: "cn-lite/1",
    });

    #[cfg(feature = "cn-heavy")]
    vectors.push(MetadataVector {
        name: "CryptoNight-Heavy Haven via legacy spelling",
        alias: "cryptonight_haven",
        id: AlgorithmId::CnHeavyXhv,
        family: Family::CnHeavy,
        l2: 0,
        l3: 0x400000,
        max_intensity: 5,
        short_name: "cn-heavy/xhv",
    });

    #[cfg(feature = "cn-pico")]
    vectors.push(MetadataVector {
        name: "CryptoNight-Pico via turtle alias",
        alias: "cn-trtl",
        id: AlgorithmId::CnPico0,
        family: Family::CnPico,
        l2: 0,
        l3: 0x40000,
        max_intensity: 5,
        short_name: "cn-pico",
    });

    #[cfg(feature = "cn-extremelite")]
    vectors.push(MetadataVector {
        name: "CryptoNight-ExtremeLite via bare upx2",
        alias: "upx2",
        id: AlgorithmId::CnExtremeLite0,
        family: Family::CnExtremeLite,
        l2: 0,
        l3: 0x20000,
        max_intensity: 5,
        short_name: "cn-extremelite/upx2",
    });

    #[cfg(feature = "randomx")]
    vectors.extend_from_slice(&[
        MetadataVector {
            name: "RandomX base",
            alias: "rx/0",
            id: AlgorithmId::Rx0,
            family: Family::RandomX,
            l2: 0x40000,
            l3: 0x200000,
            max_intensity: 1,
            short_name: "rx/0",
        },
        MetadataVector {
            name: "RandomWOW via project name",
            alias: "RandomWOW",
            id: AlgorithmId::RxWow,
            family: Family::RandomX,
            l2: 0x20000,
            l3: 0x100000,
            max_intensity: 1,
            short_name: "rx/wow",
        },
        MetadataVector {
            name: "RandomARQ quarter-size dataset",
            alias: "rx/arq",
            id: AlgorithmId::RxArq,
            family: Family::RandomX,
            l2: 0x10000,
            l3: 0x40000,
            max_intensity: 1,
            short_name: "rx/arq",
        },
    ]);

    #[cfg(feature = "argon2")]
    vectors.extend_from_slice(&[
        MetadataVector {
            name: "Argon2 Chukwa via bare alias",
            alias: "chukwa",
            id: AlgorithmId::Ar2Chukwa,
            family: Family::Argon2,
            l2: 0,
            l3: 0x80000,
            max_intensity: 1,
            short_name: "argon2/chukwa",
        },
        MetadataVector {
            name: "Argon2 WRKZ has no short alias",
            alias: "argon2/wrkz",
            id: AlgorithmId::Ar2Wrkz,
            family: Family::Argon2,
            l2: 0,
            l3: 0x40000,
            max_intensity: 1,
            short_name: "argon2/wrkz",
        },
    ]);

    vectors
}
