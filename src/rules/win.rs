//! Win detection for arbitrary board sizes and run lengths
//!
//! Every scan is centered on the pivot cell, the cell of the most recent
//! move: a new winning run must contain the newest mark, so only the four
//! lines through that cell need checking. Each scan slides a window of
//! offsets `-(win_length - 1) ..= win_length - 1` along its direction and
//! is O(win_length) regardless of board size.

use crate::board::{Board, Mark};

/// Direction vectors `(dx, dy)` for line scanning, in evaluation order:
/// horizontal, vertical, diagonal down (row grows with col), diagonal up.
/// The scan window is symmetric around the pivot, so each vector covers
/// its mirror `(-dx, -dy)` as well.
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal down
    (1, -1), // Diagonal up
];

/// Find the winning run through `pivot`, if the move there completed one.
///
/// Scans the four directions in fixed order and short-circuits on the
/// first hit; at most one outcome is possible per move on a well-formed
/// board, so the order only affects how soon the scan stops. Returns the
/// `win_length` cells of the run as `(col, row)` pairs, in line order.
pub fn winning_line(
    board: &Board,
    pivot: (usize, usize),
    mark: Mark,
    win_length: usize,
) -> Option<Vec<(usize, usize)>> {
    DIRECTIONS
        .iter()
        .find_map(|&dir| scan_direction(board, pivot, mark, dir, win_length))
}

/// Sliding-window scan along one direction through the pivot.
///
/// Counts consecutive `mark` cells across the window, resetting on any
/// cell that is out of bounds, empty, or holds the other mark. A win is
/// declared the instant the counter reaches `win_length`.
fn scan_direction(
    board: &Board,
    pivot: (usize, usize),
    mark: Mark,
    (dx, dy): (i32, i32),
    win_length: usize,
) -> Option<Vec<(usize, usize)>> {
    let span = win_length as i32 - 1;
    let mut run = 0usize;

    for step in -span..=span {
        let col = pivot.0 as i32 + dx * step;
        let row = pivot.1 as i32 + dy * step;

        if board.mark_at(col, row) == Some(mark) {
            run += 1;
            if run == win_length {
                // The window cells at offsets step - span ..= step form the run
                let line = ((step - span)..=step)
                    .map(|s| {
                        (
                            (pivot.0 as i32 + dx * s) as usize,
                            (pivot.1 as i32 + dy * s) as usize,
                        )
                    })
                    .collect();
                return Some(line);
            }
        } else {
            run = 0;
        }
    }

    None
}
