//! Guarded mutations
//!
//! A [`GuardPolicy`] protects one numeric attribute against changes in one
//! direction. Such a change is only carried out when the caller passes the
//! override flag; otherwise the mutation is skipped with a warning and the
//! command still succeeds.

use crate::utils::validation::validate_minimum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Decrease,
    Increase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardPolicy {
    /// Flag name of the protected attribute, e.g. `capacity`
    pub attribute: &'static str,
    pub unit: &'static str,
    /// Smallest value accepted at all, checked before any remote call
    pub minimum: i64,
    /// Direction of change that may destroy data
    pub destructive: Direction,
    pub override_flag: &'static str,
    /// First sentence of the warning
    pub risk: &'static str,
    /// What the override would do, e.g. `reduce storage size`
    pub action: &'static str,
}

/// Shrinking a storage can truncate the file system on it.
pub const STORAGE_CAPACITY_SHRINK: GuardPolicy = GuardPolicy {
    attribute: "capacity",
    unit: "GB",
    minimum: 1,
    destructive: Direction::Decrease,
    override_flag: "--force",
    risk: "Downsizing can destroy your data",
    action: "reduce storage size",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Blocked { warning: String },
}

impl GuardPolicy {
    /// Structural check, independent of remote state
    pub fn validate(&self, requested: i64) -> crate::Result<()> {
        validate_minimum(self.attribute, requested, self.minimum, self.unit)
    }

    pub fn is_destructive(&self, current: i64, requested: i64) -> bool {
        match self.destructive {
            Direction::Decrease => requested < current,
            Direction::Increase => requested > current,
        }
    }

    /// Compare the requested value against the current remote value
    pub fn evaluate(&self, current: i64, requested: i64, force: bool) -> GuardDecision {
        if !self.is_destructive(current, requested) || force {
            return GuardDecision::Proceed;
        }

        GuardDecision::Blocked {
            warning: format!(
                "{}. Re-run with {} to {} from {} {} to {} {}",
                self.risk,
                self.override_flag,
                self.action,
                current,
                self.unit,
                requested,
                self.unit
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrink_without_force_is_blocked() {
        let decision = STORAGE_CAPACITY_SHRINK.evaluate(20, 9, false);
        assert_eq!(
            decision,
            GuardDecision::Blocked {
                warning: "Downsizing can destroy your data. Re-run with --force to reduce storage size from 20 GB to 9 GB".to_string()
            }
        );
    }

    #[test]
    fn test_shrink_with_force_proceeds() {
        assert_eq!(
            STORAGE_CAPACITY_SHRINK.evaluate(20, 9, true),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn test_grow_or_unchanged_proceeds() {
        assert_eq!(
            STORAGE_CAPACITY_SHRINK.evaluate(15, 20, false),
            GuardDecision::Proceed
        );
        assert_eq!(
            STORAGE_CAPACITY_SHRINK.evaluate(15, 15, false),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn test_increase_guard_is_mirrored() {
        let policy = GuardPolicy {
            attribute: "replicas",
            unit: "nodes",
            minimum: 0,
            destructive: Direction::Increase,
            override_flag: "--yes",
            risk: "More replicas cost more",
            action: "scale out",
        };
        assert!(matches!(
            policy.evaluate(2, 5, false),
            GuardDecision::Blocked { .. }
        ));
        assert_eq!(policy.evaluate(5, 2, false), GuardDecision::Proceed);
    }

    #[test]
    fn test_validate_rejects_below_minimum() {
        assert!(STORAGE_CAPACITY_SHRINK.validate(1).is_ok());
        assert!(STORAGE_CAPACITY_SHRINK.validate(0).is_err());
        assert!(STORAGE_CAPACITY_SHRINK.validate(-10).is_err());
    }
}
