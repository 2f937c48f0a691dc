//! Per-variant working-set sizes for the CryptoNight families.
//!
//! This is the size table [`Algorithm::l3`](crate::Algorithm::l3)
//! delegates to for CryptoNight identifiers. The scratchpad size is a
//! property of the family, not the individual variant.

use crate::family::Family;
use crate::id::AlgorithmId;

const ONE_MIB: usize = 0x100000;

/// Scratchpad bytes required per concurrent CryptoNight instance.
///
/// Zero for identifiers outside the CryptoNight families, including both
/// sentinels. Pure function of the identifier.
pub fn memory(id: AlgorithmId) -> usize {
    match Family::of(id) {
        Family::Cn => 2 * ONE_MIB,
        #[cfg(feature = "cn-lite")]
        Family::CnLite => ONE_MIB,
        #[cfg(feature = "cn-heavy")]
        Family::CnHeavy => 4 * ONE_MIB,
        #[cfg(feature = "cn-pico")]
        Family::CnPico => ONE_MIB / 4,
        #[cfg(feature = "cn-extremelite")]
        Family::CnExtremeLite => ONE_MIB / 8,
        _ => 0,
    }
}
