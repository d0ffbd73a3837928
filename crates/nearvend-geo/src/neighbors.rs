//! Adjacent-cell lookup for geohashes.
//!
//! The neighbour of a cell usually differs only in its last symbol. When the
//! last symbol sits on the cell's edge in the requested direction, the parent
//! cell has to move first; that recursion is what carries a step across the
//! antimeridian or over a pole. Which symbols are edges, and what each symbol
//! maps to, depends on whether the hash has an even or odd length because
//! the final symbol then ends on a longitude or a latitude bit.

use crate::geohash::{is_valid, BASE32};

/// One of the four axis-aligned steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Parse `n`, `s`, `e` or `w` (either case).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'n' => Some(Self::North),
            's' => Some(Self::South),
            'e' => Some(Self::East),
            'w' => Some(Self::West),
            _ => None,
        }
    }

    fn row(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }
}

// Indexed by [Direction::row()][hash.len() % 2].
const NEIGHBOR: [[&str; 2]; 4] = [
    [
        "p0r21436x8zb9dcf5h7kjnmqesgutwvy",
        "bc01fg45238967deuvhjyznpkmstqrwx",
    ],
    [
        "14365h7k9dcfesgujnmqp0r2twvyx8zb",
        "238967debc01fg45kmstqrwxuvhjyznp",
    ],
    [
        "bc01fg45238967deuvhjyznpkmstqrwx",
        "p0r21436x8zb9dcf5h7kjnmqesgutwvy",
    ],
    [
        "238967debc01fg45kmstqrwxuvhjyznp",
        "14365h7k9dcfesgujnmqp0r2twvyx8zb",
    ],
];

const BORDER: [[&str; 2]; 4] = [
    ["prxz", "bcfguvyz"],
    ["028b", "0145hjnp"],
    ["bcfguvyz", "prxz"],
    ["0145hjnp", "028b"],
];

/// The eight compass points, in the fixed order neighbours are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Compass {
    pub const ALL: [Compass; 8] = [
        Compass::N,
        Compass::NE,
        Compass::E,
        Compass::SE,
        Compass::S,
        Compass::SW,
        Compass::W,
        Compass::NW,
    ];

    /// Axis steps taking a cell to this neighbour. Diagonals are a vertical
    /// step followed by a horizontal one.
    #[must_use]
    pub fn steps(self) -> (Direction, Option<Direction>) {
        use Direction::{East, North, South, West};
        match self {
            Compass::N => (North, None),
            Compass::NE => (North, Some(East)),
            Compass::E => (East, None),
            Compass::SE => (South, Some(East)),
            Compass::S => (South, None),
            Compass::SW => (South, Some(West)),
            Compass::W => (West, None),
            Compass::NW => (North, Some(West)),
        }
    }
}

impl std::fmt::Display for Compass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Compass::N => "n",
            Compass::NE => "ne",
            Compass::E => "e",
            Compass::SE => "se",
            Compass::S => "s",
            Compass::SW => "sw",
            Compass::W => "w",
            Compass::NW => "nw",
        };
        f.write_str(label)
    }
}

/// The cell adjacent to `hash` in `direction`, at the same precision.
///
/// Input is case-insensitive. An empty hash or one containing a non-geohash
/// symbol yields an empty string.
#[must_use]
pub fn adjacent(hash: &str, direction: Direction) -> String {
    let hash = hash.to_ascii_lowercase();
    if !is_valid(&hash) {
        return String::new();
    }
    step(&hash, direction).unwrap_or_default()
}

fn step(hash: &str, direction: Direction) -> Option<String> {
    let (&last, _) = hash.as_bytes().split_last()?;
    let parent = &hash[..hash.len() - 1];
    let parity = hash.len() % 2;
    let row = direction.row();

    let mut cell = if BORDER[row][parity].as_bytes().contains(&last) && !parent.is_empty() {
        step(parent, direction)?
    } else {
        parent.to_owned()
    };

    let position = NEIGHBOR[row][parity].bytes().position(|c| c == last)?;
    cell.push(char::from(BASE32[position]));
    Some(cell)
}

/// All eight neighbours of `hash` in [`Compass::ALL`] order.
///
/// Every returned hash has the same length as the input. Empty or invalid
/// input yields an empty list.
#[must_use]
pub fn neighbors(hash: &str) -> Vec<String> {
    let hash = hash.to_ascii_lowercase();
    if !is_valid(&hash) {
        return Vec::new();
    }

    Compass::ALL
        .iter()
        .map(|compass| {
            let (first, second) = compass.steps();
            let cell = adjacent(&hash, first);
            match second {
                Some(direction) => adjacent(&cell, direction),
                None => cell,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "neighbors_test.rs"]
mod tests;
