//! Player identification.
//!
//! A match always has exactly two sides. `Player::One` starts in the
//! top-left corner and races towards (7,7); `Player::Two` starts in the
//! bottom-right corner and races towards (0,0).

use serde::{Deserialize, Serialize};

use super::square::Square;

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Create a player from its 1-based number.
    ///
    /// ```
    /// use veiled_skirmish::core::Player;
    ///
    /// assert_eq!(Player::from_number(1), Some(Player::One));
    /// assert_eq!(Player::from_number(2), Some(Player::Two));
    /// assert_eq!(Player::from_number(3), None);
    /// ```
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Corner where this player's respawned pieces appear.
    #[must_use]
    pub const fn home_square(self) -> Square {
        match self {
            Player::One => Square::new(0, 0),
            Player::Two => Square::new(7, 7),
        }
    }

    /// Square this player must occupy to win: the opponent's home corner.
    #[must_use]
    pub const fn goal_square(self) -> Square {
        self.opponent().home_square()
    }

    /// The three squares this player's pieces start on.
    #[must_use]
    pub const fn starting_squares(self) -> [Square; 3] {
        match self {
            Player::One => [Square::new(0, 1), Square::new(1, 0), Square::new(1, 1)],
            Player::Two => [Square::new(7, 6), Square::new(6, 7), Square::new(6, 6)],
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}
