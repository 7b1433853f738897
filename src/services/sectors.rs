//! Static sector growth caps.
//!
//! Each sector carries a {min, max} bound for the suggested growth rate.
//! The table is fixed at process start and shared immutably; lookups never
//! fail, unknown tags degrade to the DEFAULT bound.

use crate::types::SectorLimit;
use std::collections::HashMap;

/// Immutable registry of sector growth bounds.
pub struct SectorLimits {
    table: HashMap<&'static str, SectorLimit>,
    default: SectorLimit,
}

impl SectorLimits {
    /// Build the registry with the built-in sector table.
    pub fn builtin() -> Self {
        let mut table = HashMap::new();
        table.insert(
            "ENERGY",
            SectorLimit {
                min_pct: 4.0,
                max_pct: 10.0,
            },
        );
        table.insert(
            "IT",
            SectorLimit {
                min_pct: 6.0,
                max_pct: 15.0,
            },
        );
        table.insert(
            "BANKING",
            SectorLimit {
                min_pct: 7.0,
                max_pct: 14.0,
            },
        );
        table.insert(
            "FMCG",
            SectorLimit {
                min_pct: 5.0,
                max_pct: 12.0,
            },
        );

        Self {
            table,
            default: SectorLimit {
                min_pct: 5.0,
                max_pct: 12.0,
            },
        }
    }

    /// Look up the growth bound for a sector tag.
    ///
    /// The tag is trimmed and uppercased before lookup; anything not in the
    /// table (including empty or malformed input) resolves to DEFAULT.
    pub fn limits_for(&self, sector: &str) -> SectorLimit {
        let key = sector.trim().to_uppercase();
        self.table.get(key.as_str()).copied().unwrap_or(self.default)
    }
}

impl Default for SectorLimits {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sector_bounds() {
        let limits = SectorLimits::builtin();

        let energy = limits.limits_for("ENERGY");
        assert_eq!(energy.min_pct, 4.0);
        assert_eq!(energy.max_pct, 10.0);

        let it = limits.limits_for("IT");
        assert_eq!(it.min_pct, 6.0);
        assert_eq!(it.max_pct, 15.0);

        let banking = limits.limits_for("BANKING");
        assert_eq!(banking.min_pct, 7.0);
        assert_eq!(banking.max_pct, 14.0);

        let fmcg = limits.limits_for("FMCG");
        assert_eq!(fmcg.min_pct, 5.0);
        assert_eq!(fmcg.max_pct, 12.0);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let limits = SectorLimits::builtin();
        assert_eq!(limits.limits_for("it"), limits.limits_for("IT"));
        assert_eq!(limits.limits_for("Banking"), limits.limits_for("BANKING"));
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        let limits = SectorLimits::builtin();
        assert_eq!(limits.limits_for("  energy "), limits.limits_for("ENERGY"));
    }

    #[test]
    fn test_unknown_sector_degrades_to_default() {
        let limits = SectorLimits::builtin();
        let default = limits.limits_for("DEFAULT");
        assert_eq!(default.min_pct, 5.0);
        assert_eq!(default.max_pct, 12.0);

        assert_eq!(limits.limits_for("unknown"), default);
        assert_eq!(limits.limits_for(""), default);
        assert_eq!(limits.limits_for("!!!"), default);
    }

    #[test]
    fn test_all_bounds_are_ordered() {
        let limits = SectorLimits::builtin();
        for sector in ["ENERGY", "IT", "BANKING", "FMCG", "DEFAULT"] {
            let bound = limits.limits_for(sector);
            assert!(
                bound.min_pct <= bound.max_pct,
                "bound for {} is inverted: [{}, {}]",
                sector,
                bound.min_pct,
                bound.max_pct
            );
        }
    }
}
