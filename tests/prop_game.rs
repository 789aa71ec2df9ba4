//! Property tests over random boards, seeds and key sequences.

use proptest::prelude::*;

use tui_chase::core::{Board, GameState};
use tui_chase::types::DRONE_COUNT;

fn keys() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(
        prop::sample::select(vec!['w', 'a', 's', 'd', ' ', 'q']),
        0..80,
    )
}

fn new_game(width: u16, height: u16, seed: u32) -> Option<GameState> {
    GameState::new(Board::new(width, height).ok()?, seed).ok()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Player and drones never leave the board, and wrecks never come back.
    #[test]
    fn turns_keep_positions_on_board(
        width in 6u16..60,
        height in 6u16..40,
        seed in any::<u32>(),
        keys in keys(),
    ) {
        let Some(mut state) = new_game(width, height, seed) else {
            return Err(TestCaseError::reject("no playable layout"));
        };
        let board = *state.board();

        for ch in keys {
            let before: Vec<bool> = state.drones().iter().map(|d| d.alive).collect();
            state.submit_char(ch);

            prop_assert!(board.contains(state.player()));
            prop_assert_eq!(state.drones().len(), DRONE_COUNT);
            for (d, was_alive) in state.drones().iter().zip(before) {
                prop_assert!(board.contains(d.position), "drone left board: {:?}", d.position);
                prop_assert!(was_alive || !d.alive, "wreck came back to life");
            }
            prop_assert!(state.snapshot().in_bounds());
        }
    }

    /// Resolving twice destroys nothing the first pass spared.
    #[test]
    fn collision_resolution_is_idempotent(
        seed in any::<u32>(),
        keys in keys(),
    ) {
        let Some(mut state) = new_game(20, 12, seed) else {
            return Err(TestCaseError::reject("no playable layout"));
        };
        for ch in keys {
            state.submit_char(ch);
        }

        // Advance without resolving, so fresh overlaps may exist.
        state.advance_drones();
        let mut once = state.clone();
        once.resolve_collisions();
        let mut twice = once.clone();
        twice.resolve_collisions();

        let alive = |g: &GameState| g.drones().iter().map(|d| d.alive).collect::<Vec<_>>();
        prop_assert_eq!(alive(&once), alive(&twice));
    }

    /// The win banner shows exactly when no drone is left.
    #[test]
    fn win_iff_no_drone_alive(
        width in 6u16..30,
        height in 6u16..20,
        seed in any::<u32>(),
        keys in keys(),
    ) {
        let Some(mut state) = new_game(width, height, seed) else {
            return Err(TestCaseError::reject("no playable layout"));
        };
        for ch in keys {
            state.submit_char(ch);
            prop_assert_eq!(state.is_win(), state.alive_count() == 0);
            prop_assert_eq!(state.overlay().is_win(), state.is_win());
        }
    }
}
