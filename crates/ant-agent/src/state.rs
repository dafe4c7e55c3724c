//! The two behavioural states of an ant.

use std::fmt;

/// Whether an ant is looking for food or carrying it home.
///
/// Carrying is derived from the state, never stored separately, so the two
/// cannot disagree.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AntState {
    /// Not carrying: follows the scent field or wanders.
    #[default]
    Searching,
    /// Carrying: heads straight for the nest, laying scent.
    Returning,
}

impl AntState {
    #[inline]
    pub fn is_carrying(self) -> bool {
        matches!(self, AntState::Returning)
    }

    /// Label used in output columns.
    pub fn as_str(self) -> &'static str {
        match self {
            AntState::Searching => "searching",
            AntState::Returning => "returning",
        }
    }
}

impl fmt::Display for AntState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
