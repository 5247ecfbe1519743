//! Cookie Factory game state record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of integer fields in a `GameState`.
pub const FIELD_COUNT: usize = 13;

/// Kinds of buildings a baker can own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuildingKind {
    Cursor,
    Grandma,
    Farm,
    Mine,
    Factory,
    Bank,
}

impl BuildingKind {
    /// All building kinds in display order.
    pub fn all() -> &'static [BuildingKind] {
        &[
            BuildingKind::Cursor,
            BuildingKind::Grandma,
            BuildingKind::Farm,
            BuildingKind::Mine,
            BuildingKind::Factory,
            BuildingKind::Bank,
        ]
    }

    /// Position in `all()`.
    pub fn index(&self) -> usize {
        match self {
            BuildingKind::Cursor => 0,
            BuildingKind::Grandma => 1,
            BuildingKind::Farm => 2,
            BuildingKind::Mine => 3,
            BuildingKind::Factory => 4,
            BuildingKind::Bank => 5,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            BuildingKind::Cursor => "Cursor",
            BuildingKind::Grandma => "Grandma",
            BuildingKind::Farm => "Farm",
            BuildingKind::Mine => "Mine",
            BuildingKind::Factory => "Factory",
            BuildingKind::Bank => "Bank",
        }
    }
}

/// Snapshot of a baker's cookies and buildings.
///
/// Owned and free counts are independent; see [`GameState::free_within_owned`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub cookies: u32,

    pub cursors: u32,
    pub grandmas: u32,
    pub farms: u32,
    pub mines: u32,
    pub factories: u32,
    pub banks: u32,

    pub free_cursors: u32,
    pub free_grandmas: u32,
    pub free_farms: u32,
    pub free_mines: u32,
    pub free_factories: u32,
    pub free_banks: u32,
}

impl GameState {
    /// Field names in constructor order.
    pub const FIELD_NAMES: [&'static str; FIELD_COUNT] = [
        "cookies",
        "cursors",
        "grandmas",
        "farms",
        "mines",
        "factories",
        "banks",
        "free_cursors",
        "free_grandmas",
        "free_farms",
        "free_mines",
        "free_factories",
        "free_banks",
    ];

    /// Field values in constructor order.
    pub fn to_array(&self) -> [u32; FIELD_COUNT] {
        [
            self.cookies,
            self.cursors,
            self.grandmas,
            self.farms,
            self.mines,
            self.factories,
            self.banks,
            self.free_cursors,
            self.free_grandmas,
            self.free_farms,
            self.free_mines,
            self.free_factories,
            self.free_banks,
        ]
    }

    /// Inverse of [`GameState::to_array`].
    pub fn from_array(values: [u32; FIELD_COUNT]) -> Self {
        let [
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
        ] = values;
        Self {
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

    /// Owned count for a building kind.
    pub fn owned(&self, kind: BuildingKind) -> u32 {
        match kind {
            BuildingKind::Cursor => self.cursors,
            BuildingKind::Grandma => self.grandmas,
            BuildingKind::Farm => self.farms,
            BuildingKind::Mine => self.mines,
            BuildingKind::Factory => self.factories,
            BuildingKind::Bank => self.banks,
        }
    }

    /// Free (unassigned) count for a building kind.
    pub fn free(&self, kind: BuildingKind) -> u32 {
        match kind {
            BuildingKind::Cursor => self.free_cursors,
            BuildingKind::Grandma => self.free_grandmas,
            BuildingKind::Farm => self.free_farms,
            BuildingKind::Mine => self.free_mines,
            BuildingKind::Factory => self.free_factories,
            BuildingKind::Bank => self.free_banks,
        }
    }

    pub fn total_buildings(&self) -> u64 {
        BuildingKind::all()
            .iter()
            .map(|k| self.owned(*k) as u64)
            .sum()
    }

    pub fn total_free(&self) -> u64 {
        BuildingKind::all().iter().map(|k| self.free(*k) as u64).sum()
    }

    /// True when no kind has more free units than owned units.
    pub fn free_within_owned(&self) -> bool {
        BuildingKind::all()
            .iter()
            .all(|k| self.free(*k) <= self.owned(*k))
    }
}

/// Build a `GameState` from positional values.
///
/// Argument order matches `GameState::FIELD_NAMES`. Values are taken as-is.
#[allow(clippy::too_many_arguments)]
pub fn create_game_state(
    cookies: u32,
    cursors: u32,
    grandmas: u32,
    farms: u32,
    mines: u32,
    factories: u32,
    banks: u32,
    free_cursors: u32,
    free_grandmas: u32,
    free_farms: u32,
    free_mines: u32,
    free_factories: u32,
    free_banks: u32,
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

/// Format a count with comma separators (e.g. 1234567 → "1,234,567").
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cookies", format_count(self.cookies as u64))?;
        for kind in BuildingKind::all() {
            write!(
                f,
                " | {} {}/{}",
                kind.name().to_lowercase(),
                self.owned(*kind),
                self.free(*kind)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_game_state_keeps_argument_order() {
        let s = create_game_state(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13);
        assert_eq!(s.to_array(), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13]);
        assert_eq!(s.cookies, 1);
        assert_eq!(s.banks, 7);
        assert_eq!(s.free_cursors, 8);
        assert_eq!(s.free_banks, 13);
    }

    #[test]
    fn from_array_inverts_to_array() {
        let values = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 10, 20, 30];
        assert_eq!(GameState::from_array(values).to_array(), values);
    }

    #[test]
    fn owned_and_free_follow_kind() {
        let s = create_game_state(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12);
        for (i, kind) in BuildingKind::all().iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(s.owned(*kind), i as u32 + 1);
            assert_eq!(s.free(*kind), i as u32 + 7);
        }
    }

    #[test]
    fn totals_sum_all_kinds() {
        let s = create_game_state(0, 200, 200, 200, 200, 200, 200, 10, 10, 10, 10, 10, 10);
        assert_eq!(s.total_buildings(), 1200);
        assert_eq!(s.total_free(), 60);
    }

    #[test]
    fn free_within_owned_detects_excess() {
        let mut s = create_game_state(0, 5, 5, 5, 5, 5, 5, 5, 0, 0, 0, 0, 0);
        assert!(s.free_within_owned());
        s.free_banks = 6;
        assert!(!s.free_within_owned());
    }

    #[test]
    fn default_is_all_zero() {
        assert_eq!(GameState::default().to_array(), [0; FIELD_COUNT]);
    }

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(2_000_000_000), "2,000,000,000");
    }

    #[test]
    fn display_summarizes_state() {
        let s = create_game_state(1_500, 3, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0);
        assert_eq!(
            s.to_string(),
            "1,500 cookies | cursor 3/2 | grandma 0/0 | farm 0/0 | mine 0/0 | factory 0/0 | bank 1/0"
        );
    }

    #[test]
    fn json_uses_field_names() {
        let s = create_game_state(42, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3);
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["cookies"], 42);
        assert_eq!(json["cursors"], 1);
        assert_eq!(json["free_banks"], 3);
        let back: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}
