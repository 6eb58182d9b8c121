//! Combat resolution.
//!
//! An attack compares the two identities under cyclic dominance. The
//! outcome says which piece survives; `rules::engine` applies it to the board.

use serde::{Deserialize, Serialize};

use crate::core::identity::Identity;

/// Which side of an attack survives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatOutcome {
    /// Defender is destroyed, attacker takes its square.
    AttackerWins,
    /// Attacker is destroyed, defender stays.
    DefenderWins,
    /// Same identity: nothing moves, nothing dies.
    Draw,
}

/// Resolve an attack of `attacker` on `defender`.
///
/// ```
/// use veiled_skirmish::core::Identity;
/// use veiled_skirmish::rules::{resolve_attack, CombatOutcome};
///
/// assert_eq!(resolve_attack(Identity::Red, Identity::Green), CombatOutcome::AttackerWins);
/// assert_eq!(resolve_attack(Identity::Red, Identity::Blue), CombatOutcome::DefenderWins);
/// assert_eq!(resolve_attack(Identity::Red, Identity::Red), CombatOutcome::Draw);
/// ```
#[must_use]
pub fn resolve_attack(attacker: Identity, defender: Identity) -> CombatOutcome {
    if attacker == defender {
        CombatOutcome::Draw
    } else if attacker.beats(defender) {
        CombatOutcome::AttackerWins
    } else {
        CombatOutcome::DefenderWins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_nine_pairs() {
        let mut draws = 0;
        let mut attacker_wins = 0;
        let mut defender_wins = 0;

        for attacker in Identity::ALL {
            for defender in Identity::ALL {
                match resolve_attack(attacker, defender) {
                    CombatOutcome::Draw => {
                        assert_eq!(attacker, defender);
                        draws += 1;
                    }
                    CombatOutcome::AttackerWins => {
                        assert_eq!(attacker.prey(), defender);
                        attacker_wins += 1;
                    }
                    CombatOutcome::DefenderWins => {
                        assert_eq!(defender.prey(), attacker);
                        defender_wins += 1;
                    }
                }
            }
        }

        assert_eq!((draws, attacker_wins, defender_wins), (3, 3, 3));
    }

    #[test]
    fn test_outcome_flips_with_roles() {
        for a in Identity::ALL {
            for b in Identity::ALL {
                let forward = resolve_attack(a, b);
                let backward = resolve_attack(b, a);
                let expected = match forward {
                    CombatOutcome::AttackerWins => CombatOutcome::DefenderWins,
                    CombatOutcome::DefenderWins => CombatOutcome::AttackerWins,
                    CombatOutcome::Draw => CombatOutcome::Draw,
                };
                assert_eq!(backward, expected);
            }
        }
    }

    #[test]
    fn test_cycle() {
        assert_eq!(resolve_attack(Identity::Red, Identity::Green), CombatOutcome::AttackerWins);
        assert_eq!(resolve_attack(Identity::Green, Identity::Blue), CombatOutcome::AttackerWins);
        assert_eq!(resolve_attack(Identity::Blue, Identity::Red), CombatOutcome::AttackerWins);
    }
}
