use crate::shared::error::HierarchyError;
use crate::shared::Result;
use serde::Serialize;
use std::fmt;

/// Position of a level in an approval chain, always within `1..=level_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Ordinal(u32);

impl Ordinal {
    /// Validates a raw level number against the hierarchy's level count
    pub fn new(level: i64, level_count: u32) -> Result<Self> {
        if level < 1 || level > i64::from(level_count) {
            return Err(HierarchyError::InvalidOrdinal { level, level_count }.into());
        }
        Ok(Self(level as u32))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Zero-based position within a level set
    pub(crate) fn index(&self) -> usize {
        (self.0 - 1) as usize
    }

    /// All ordinals of a hierarchy with `level_count` levels, in order
    pub fn range(level_count: u32) -> impl Iterator<Item = Ordinal> {
        (1..=level_count).map(Ordinal)
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
