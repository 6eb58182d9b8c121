//! Invariants that hold over arbitrary sequences of player requests.
//!
//! Requests are drawn with coordinates slightly beyond the board so that
//! rejections are exercised as often as accepted actions.

use proptest::prelude::*;

use veiled_skirmish::core::{GameState, Identity, Player, Square};

#[derive(Clone, Debug)]
enum Request {
    Move(Square, Square),
    Peek(Square),
    EndPeek,
    Redeploy(Square, Identity),
    Respawn(Identity),
}

fn square() -> impl Strategy<Value = Square> {
    (-1i8..9, -1i8..9).prop_map(|(x, y)| Square::new(x, y))
}

fn near_move() -> impl Strategy<Value = Request> {
    (square(), 0usize..4).prop_map(|(from, dir)| {
        let (dx, dy) = [(1, 0), (-1, 0), (0, 1), (0, -1)][dir];
        Request::Move(from, Square::new(from.x + dx, from.y + dy))
    })
}

fn identity() -> impl Strategy<Value = Identity> {
    prop_oneof![Just(Identity::Red), Just(Identity::Green), Just(Identity::Blue)]
}

fn request() -> impl Strategy<Value = Request> {
    prop_oneof![
        4 => near_move(),
        1 => (square(), square()).prop_map(|(a, b)| Request::Move(a, b)),
        2 => square().prop_map(Request::Peek),
        1 => Just(Request::EndPeek),
        2 => (square(), identity()).prop_map(|(s, i)| Request::Redeploy(s, i)),
        1 => identity().prop_map(Request::Respawn),
    ]
}

/// Returns true if the request was accepted.
fn perform(state: &mut GameState, request: &Request) -> bool {
    match *request {
        Request::Move(from, to) => state.move_piece(from, to).is_ok(),
        Request::Peek(sq) => state.peek(sq).is_ok(),
        Request::EndPeek => {
            state.end_peek();
            true
        }
        Request::Redeploy(sq, identity) => state.redeploy(sq, identity).is_ok(),
        Request::Respawn(identity) => state.respawn(identity).is_ok(),
    }
}

fn assert_consistent(state: &GameState) {
    let budget = state.config().action_points_per_turn;
    assert!(state.action_points() > 0 && state.action_points() <= budget);

    for player in Player::ALL {
        assert!(state.count_player_pieces(player) <= state.config().max_pieces_per_player);
    }

    let mut ids: Vec<_> = state.board().pieces().map(|(_, p)| p.id).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total, "piece id appears on two squares");

    if let Some(id) = state.peeked_piece_id() {
        let (_, piece) = state.board().find(id).expect("peeked piece left the board");
        assert_eq!(piece.owner, state.current_player());
    }
}

proptest! {
    /// Invariant: the state stays consistent after every request.
    #[test]
    fn state_stays_consistent(seed in any::<u64>(), requests in prop::collection::vec(request(), 0..120)) {
        let mut state = GameState::new(seed);
        assert_consistent(&state);
        for request in &requests {
            perform(&mut state, request);
            assert_consistent(&state);
        }
    }

    /// Invariant: a rejected request leaves the state untouched.
    #[test]
    fn rejection_changes_nothing(seed in any::<u64>(), requests in prop::collection::vec(request(), 0..120)) {
        let mut state = GameState::new(seed);
        for request in &requests {
            let before = state.clone();
            if !perform(&mut state, request) {
                prop_assert_eq!(&state, &before, "rejected {:?} mutated the state", request);
            }
        }
    }

    /// Invariant: peeking costs nothing and never passes the turn.
    #[test]
    fn peek_is_free(seed in any::<u64>(), target in square()) {
        let mut state = GameState::new(seed);
        let points = state.action_points();
        let player = state.current_player();

        let _ = state.peek(target);
        prop_assert_eq!(state.action_points(), points);
        prop_assert_eq!(state.current_player(), player);

        state.end_peek();
        state.end_peek();
        prop_assert!(state.peeked_piece_id().is_none());
    }

    /// Invariant: a valid move check agrees with the move itself.
    #[test]
    fn check_agrees_with_move(seed in any::<u64>(), request in near_move()) {
        let mut state = GameState::new(seed);
        if let Request::Move(from, to) = request {
            let valid = state.is_valid_move(from, to);
            prop_assert_eq!(state.move_piece(from, to).is_ok(), valid);
        }
    }

    /// Invariant: every enumerated action is accepted.
    #[test]
    fn legal_actions_apply(seed in any::<u64>(), requests in prop::collection::vec(request(), 0..60)) {
        let mut state = GameState::new(seed);
        for request in &requests {
            perform(&mut state, request);
        }
        for action in state.legal_actions() {
            let mut copy = state.clone();
            prop_assert!(copy.apply(&action).is_ok(), "{:?} was listed but rejected", action);
        }
    }
}
