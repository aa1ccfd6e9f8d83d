//! Open/closed model for the navigation menu.
//!
//! The DOM stores the state as string tokens; this type is what the rest of
//! the crate reasons about. Conversion happens only at the attribute boundary.

use crate::constants::{FALSE_TOKEN, TRUE_TOKEN};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuState {
    Open,
    Closed,
}

impl MenuState {
    /// Interpret the container's `data-visible` value.
    ///
    /// Only the exact token `"false"` reads as closed. An absent attribute,
    /// `"TRUE"` or any stray value reads as open, so the next activation
    /// closes the menu.
    #[inline]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(FALSE_TOKEN) => Self::Closed,
            _ => Self::Open,
        }
    }

    /// Token written to the DOM for this state.
    #[inline]
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Open => TRUE_TOKEN,
            Self::Closed => FALSE_TOKEN,
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        if open {
            Self::Open
        } else {
            Self::Closed
        }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_false_token_reads_as_closed() {
        assert_eq!(MenuState::from_attribute(Some("false")), MenuState::Closed);
        assert_eq!(MenuState::from_attribute(Some("true")), MenuState::Open);
        assert_eq!(MenuState::from_attribute(None), MenuState::Open);
        assert_eq!(MenuState::from_attribute(Some("FALSE")), MenuState::Open);
        assert_eq!(MenuState::from_attribute(Some("TRUE")), MenuState::Open);
        assert_eq!(MenuState::from_attribute(Some("")), MenuState::Open);
        assert_eq!(MenuState::from_attribute(Some(" false")), MenuState::Open);
    }

    #[test]
    fn tokens_are_lowercase() {
        assert_eq!(MenuState::Open.as_token(), "true");
        assert_eq!(MenuState::Closed.as_token(), "false");
        assert_eq!(MenuState::Open.to_string(), "true");
        assert_eq!(MenuState::Closed.to_string(), "false");
    }

    #[test]
    fn toggled_flips_and_double_toggle_is_identity() {
        for s in [MenuState::Open, MenuState::Closed] {
            assert_ne!(s.toggled(), s);
            assert_eq!(s.toggled().toggled(), s);
        }
    }

    #[test]
    fn bool_conversion_matches_is_open() {
        assert!(MenuState::from(true).is_open());
        assert!(!MenuState::from(false).is_open());
    }
}
