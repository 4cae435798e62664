//! Search constants.

/// Deepest search a configuration may request.
pub const MAX_SEARCH_DEPTH: u32 = 12;

/// Bound used in place of infinity. Larger than any evaluation (which is
/// clamped to `WIN_SCORE`) and safe to negate.
pub const SCORE_INFINITY: i32 = 1_000_000;
