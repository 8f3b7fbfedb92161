//! Crate `config` provides the solver's configuration bit mask.
use crate::types::NUM_LITERALS;

bitflags! {
    /// Typed view over the `configuration: u32` bit mask.
    ///
    /// The conversion to and from `u32` is lossless (`from_bits_truncate` only
    /// drops bits outside the defined set, and none are defined above bit 10
    /// here).
    #[derive(Default)]
    pub struct SolverConfig: u32 {
        /// bit 0: enable the SCC inference rule (force-false on common ancestor).
        const SCC_INFERENCE = 0x1;
        /// bit 1: use the SCC engine's largest-component literal as the branch heuristic.
        const SCC_HEURISTIC = 0x2;
        /// bit 8: use the CSR adjacency backend instead of the nested-vector one.
        const CSR_BACKEND = 0x100;
        /// bit 9: fork the very first branching decision across two threads.
        const PARALLEL_DEPTH1 = 0x200;
        /// bit 10: reserved for a SIMD backend; falls back to the CSR path.
        const SIMD_RESERVED = 0x400;
    }
}

impl From<u32> for SolverConfig {
    fn from(bits: u32) -> SolverConfig {
        SolverConfig::from_bits_truncate(bits)
    }
}

impl From<SolverConfig> for u32 {
    fn from(config: SolverConfig) -> u32 {
        config.bits()
    }
}

impl SolverConfig {
    /// `true` when either the CSR bit or its SIMD-reserved alias is set.
    pub fn wants_csr_backend(self) -> bool {
        self.intersects(SolverConfig::CSR_BACKEND | SolverConfig::SIMD_RESERVED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_u32() {
        let bits = 0x1 | 0x2 | 0x200;
        let config = SolverConfig::from(bits);
        assert_eq!(u32::from(config), bits);
    }

    #[test]
    fn unknown_bits_are_truncated_not_rejected() {
        let config = SolverConfig::from(0xffff_ffff);
        assert!(config.contains(SolverConfig::SCC_INFERENCE));
        assert!(config.contains(SolverConfig::PARALLEL_DEPTH1));
    }

    #[test]
    fn simd_reserved_also_selects_csr_path() {
        assert!(SolverConfig::SIMD_RESERVED.wants_csr_backend());
        assert!(SolverConfig::CSR_BACKEND.wants_csr_backend());
        assert!(!SolverConfig::SCC_HEURISTIC.wants_csr_backend());
    }

    #[test]
    fn literal_space_is_addressable_by_u16_counters() {
        assert!(NUM_LITERALS < u16::MAX as usize);
    }
}
