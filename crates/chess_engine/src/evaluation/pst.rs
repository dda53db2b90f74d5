//! Square weights
//!
//! One centre-weighted table shared by every piece except the king, and by
//! both sides (it is symmetric top to bottom, so no flipping is needed).

use crate::board::in_bounds;

#[rustfmt::skip]
const CENTER_PST: [[i32; 8]; 8] = [
    [ 0,  5, 10, 10, 10, 10,  5,  0],
    [ 5, 10, 15, 15, 15, 15, 10,  5],
    [10, 15, 25, 30, 30, 25, 15, 10],
    [10, 15, 30, 40, 40, 30, 15, 10],
    [10, 15, 30, 40, 40, 30, 15, 10],
    [10, 15, 25, 30, 30, 25, 15, 10],
    [ 5, 10, 15, 15, 15, 15, 10,  5],
    [ 0,  5, 10, 10, 10, 10,  5,  0],
];

/// Table weight of a square; off-board squares weigh nothing
pub fn square_weight(row: i8, col: i8) -> i32 {
    if !in_bounds(row, col) {
        return 0;
    }
    CENTER_PST[row as usize][col as usize]
}
