//! Proptest strategies producing `GameState` fixtures.
//!
//! Every field is an independent range strategy, so shrinking is whatever the
//! integer strategies do: each field walks toward its lower bound and never
//! leaves its range.
//!
//! ```rust,ignore
//! use cookie_baker_fixtures::generators::game_state_arbitrary;
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn totals_never_overflow(state in game_state_arbitrary()) {
//!         prop_assert!(state.total_buildings() <= 1_200);
//!     }
//! }
//! ```

use proptest::prelude::*;

use crate::bounds::{FieldBounds, FixtureBounds, MAX_FREE, MAX_OWNED};
use crate::error::Result;
use crate::state::GameState;

prop_compose! {
    // Draw order is the documented field order; values land by field name.
    fn compose_game_state(bounds: FixtureBounds)(
        cookies in bounds.cookies.strategy(),
        cursors in bounds.cursors.strategy(),
        grandmas in bounds.grandmas.strategy(),
        farms in bounds.farms.strategy(),
        mines in bounds.mines.strategy(),
        factories in bounds.factories.strategy(),
        banks in bounds.banks.strategy(),
        free_cursors in bounds.free_cursors.strategy(),
        free_grandmas in bounds.free_grandmas.strategy(),
        free_farms in bounds.free_farms.strategy(),
        free_mines in bounds.free_mines.strategy(),
        free_factories in bounds.free_factories.strategy(),
        free_banks in bounds.free_banks.strategy()
    ) -> GameState {
        GameState {
            cookies,
            cursors,
            grandmas,
            farms,
            mines,
            factories,
            banks,
            free_cursors,
            free_grandmas,
            free_farms,
            free_mines,
            free_factories,
            free_banks,
        }
    }
}

/// Game states with every field inside the default game ranges.
pub fn game_state_arbitrary() -> impl Strategy<Value = GameState> {
    compose_game_state(FixtureBounds::default())
}

/// Game states with every field inside `bounds`.
///
/// Inverted bounds are rejected here rather than at sampling time.
pub fn game_state_within(bounds: FixtureBounds) -> Result<impl Strategy<Value = GameState>> {
    bounds.validate()?;
    Ok(compose_game_state(bounds))
}

/// `(owned, free)` for one building kind with `free <= owned`.
fn owned_with_free(owned: FieldBounds, free_max: u32) -> impl Strategy<Value = (u32, u32)> {
    owned
        .strategy()
        .prop_flat_map(move |n| (Just(n), 0..=n.min(free_max)))
}

/// Like [`game_state_arbitrary`], but no kind has more free units than owned.
pub fn consistent_game_state_arbitrary() -> impl Strategy<Value = GameState> {
    let bounds = FixtureBounds::default();
    let pair = || owned_with_free(FieldBounds::new(0, MAX_OWNED), MAX_FREE);
    (
        bounds.cookies.strategy(),
        (pair(), pair(), pair(), pair(), pair(), pair()),
    )
        .prop_map(
            |(
                cookies,
                (
                    (cursors, free_cursors),
                    (grandmas, free_grandmas),
                    (farms, free_farms),
                    (mines, free_mines),
                    (factories, free_factories),
                    (banks, free_banks),
                ),
            )| GameState {
                cookies,
                cursors,
                grandmas,
                farms,
                mines,
                factories,
                banks,
                free_cursors,
                free_grandmas,
                free_farms,
                free_mines,
                free_factories,
                free_banks,
            },
        )
}


#[cfg(test)]
mod proptests {
    use super::*;

    // ── Default generator ─────────────────────────────────

    proptest! {
        #[test]
        fn prop_fields_within_default_bounds(state in game_state_arbitrary()) {
            let bounds = FixtureBounds::default();
            prop_assert!(bounds.contains(&state), "out of bounds: {}", state);
        }

        #[test]
        fn prop_building_totals_bounded(state in game_state_arbitrary()) {
            prop_assert!(state.total_buildings() <= 6 * MAX_OWNED as u64);
            prop_assert!(state.total_free() <= 6 * MAX_FREE as u64);
        }
    }

    // ── Custom bounds ─────────────────────────────────────

    proptest! {
        #[test]
        fn prop_custom_bounds_respected(
            (bounds, state) in (0u32..100, 0u32..100).prop_flat_map(|(lo, span)| {
                let mut bounds = FixtureBounds::default();
                bounds.cookies = FieldBounds::new(lo, lo + span);
                bounds.free_farms = FieldBounds::new(lo % 11, (lo % 11).max(span % 11));
                let states = game_state_within(bounds).unwrap();
                (Just(bounds), states)
            }),
        ) {
            prop_assert!(bounds.contains(&state), "out of bounds: {}", state);
            prop_assert!(FixtureBounds::default().contains(&state));
        }
    }

    // ── Consistent generator ──────────────────────────────

    proptest! {
        #[test]
        fn prop_consistent_free_within_owned(state in consistent_game_state_arbitrary()) {
            prop_assert!(state.free_within_owned(), "free exceeds owned: {}", state);
            prop_assert!(FixtureBounds::default().contains(&state));
        }
    }
}
