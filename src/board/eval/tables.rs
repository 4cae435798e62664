//! Evaluation constants and tables.
//!
//! Per-square tables are written from RED's side of the board (index 0 is
//! square 1) and mirrored for BLACK.

// ============================================================================
// MATERIAL
// ============================================================================

pub const MAN_VALUE: i32 = 100;
pub const KING_VALUE: i32 = 160;

/// Score for a position where one side cannot move. Far below the search
/// infinity so that sums and negations never overflow.
pub const WIN_SCORE: i32 = 100_000;

/// Bonus per extra legal move over the opponent
pub const MOBILITY_WEIGHT: i32 = 2;

// ============================================================================
// POSITIONAL TABLES
// ============================================================================

/// Men: back-row guard, central files, and approach to the crowning row.
#[rustfmt::skip]
pub const MAN_TABLE: [i32; 32] = [
     8, 10, 10,  8,
     2,  3,  3,  2,
     3,  5,  5,  2,
     4,  8,  8,  4,
     5,  9,  9,  5,
     8, 10, 10,  8,
    12, 14, 14, 12,
     0,  0,  0,  0,
];

/// Kings: centre over edges, double corners are a refuge.
#[rustfmt::skip]
pub const KING_TABLE: [i32; 32] = [
     0,  2,  2,  4,
     2,  6,  6,  2,
     2,  8,  8,  4,
     4, 10, 10,  2,
     2, 10, 10,  4,
     4,  8,  8,  2,
     2,  6,  6,  2,
     4,  2,  2,  0,
];

// ============================================================================
// TACTICAL TERMS
// ============================================================================

/// Capture whose landing piece cannot be taken straight back
pub const SAFE_CAPTURE_BONUS: i32 = 30;

/// Extra jumps in the longest chain available
pub const CHAIN_BONUS: i32 = 40;

/// Piece the opponent can currently capture
pub const HANGING_PENALTY: i32 = 35;
