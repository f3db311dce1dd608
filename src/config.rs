use alloc::vec::Vec;

/// Largest supported board side; one column letter per index.
pub const MAX_BOARD_SIZE: usize = 26;
/// Longest warship in an automatically drawn fleet.
pub const MAX_SHIP_SIZE: usize = 5;
/// Whole-fleet redraws attempted before automatic placement gives up.
pub const MAX_FLEET_ATTEMPTS: usize = 100;

/// Sizes of a standard fleet on a board of side `board_size`: one warship
/// per size, descending from `min(board_size, MAX_SHIP_SIZE)`, truncated to
/// `count` entries.
pub fn fleet_sizes(board_size: usize, count: usize) -> Vec<usize> {
    (1..=board_size.min(MAX_SHIP_SIZE))
        .rev()
        .take(count)
        .collect()
}

/// Number of warships a standard game uses on a board of side `board_size`.
pub fn default_ship_count(board_size: usize) -> usize {
    board_size.min(MAX_SHIP_SIZE)
}
