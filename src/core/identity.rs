//! Hidden piece identities and their cyclic dominance.
//!
//! Red beats Green, Green beats Blue, Blue beats Red. Equal identities tie.

use serde::{Deserialize, Serialize};

/// The hidden type of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identity {
    Red,
    Green,
    Blue,
}

impl Identity {
    /// All identities, in dominance order.
    pub const ALL: [Identity; 3] = [Identity::Red, Identity::Green, Identity::Blue];

    /// The identity this one defeats.
    #[must_use]
    pub const fn prey(self) -> Self {
        match self {
            Identity::Red => Identity::Green,
            Identity::Green => Identity::Blue,
            Identity::Blue => Identity::Red,
        }
    }

    /// The identity that defeats this one.
    #[must_use]
    pub const fn predator(self) -> Self {
        match self {
            Identity::Red => Identity::Blue,
            Identity::Green => Identity::Red,
            Identity::Blue => Identity::Green,
        }
    }

    /// True if `self` defeats `other`.
    ///
    /// ```
    /// use veiled_skirmish::core::Identity;
    ///
    /// assert!(Identity::Red.beats(Identity::Green));
    /// assert!(!Identity::Green.beats(Identity::Red));
    /// assert!(!Identity::Blue.beats(Identity::Blue));
    /// ```
    #[must_use]
    pub fn beats(self, other: Identity) -> bool {
        self.prey() == other
    }

    /// Single-letter tag used in text rendering.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Identity::Red => 'R',
            Identity::Green => 'G',
            Identity::Blue => 'B',
        }
    }

    /// Lower-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Identity::Red => "red",
            Identity::Green => "green",
            Identity::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Identity {
    type Err = UnknownIdentity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Identity::Red),
            "green" | "g" => Ok(Identity::Green),
            "blue" | "b" => Ok(Identity::Blue),
            _ => Err(UnknownIdentity(s.to_string())),
        }
    }
}

/// Returned when parsing an identity name fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown identity: {0:?} (expected red, green or blue)")]
pub struct UnknownIdentity(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prey_and_predator_are_inverse() {
        for id in Identity::ALL {
            assert_eq!(id.prey().predator(), id);
            assert_eq!(id.predator().prey(), id);
            assert_ne!(id.prey(), id);
        }
    }

    #[test]
    fn test_every_identity_beats_exactly_one() {
        for id in Identity::ALL {
            let wins = Identity::ALL.iter().filter(|&&other| id.beats(other)).count();
            assert_eq!(wins, 1);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Red".parse::<Identity>(), Ok(Identity::Red));
        assert_eq!("g".parse::<Identity>(), Ok(Identity::Green));
        assert_eq!("blue".parse::<Identity>(), Ok(Identity::Blue));
        assert!("purple".parse::<Identity>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Identity::Green.to_string(), "green");
        assert_eq!(Identity::Blue.letter(), 'B');
    }
}
