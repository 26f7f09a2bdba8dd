//! Scene-allocated entity identifiers
//!
//! Ids are plain newtypes with no global counter behind them; the scene
//! registry owns allocation and guarantees monotonically increasing,
//! never-reused values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a bone in the scene's hierarchy
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoneId(pub u64);

impl BoneId {
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for BoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoneId({})", self.0)
    }
}

impl fmt::Display for BoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a cube primitive
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubeId(pub u64);

impl CubeId {
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for CubeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CubeId({})", self.0)
    }
}

impl fmt::Display for CubeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trip() {
        let id = BoneId::from_raw(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "42");
        assert_eq!(format!("{:?}", id), "BoneId(42)");
    }

    #[test]
    fn ids_are_ordered_by_raw_value() {
        assert!(CubeId::from_raw(1) < CubeId::from_raw(2));
    }
}
