//! Text rendering of the board.

use crate::core::board::Board;
use crate::core::common::Coord;
use crate::core::config::{CORNER_MARKER, HIDDEN_MARKER};
use alloc::string::String;
use core::fmt::{Display, Write};

fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

fn push_padded(line: &mut String, text: impl Display, width: usize) {
    // Writing into a String cannot fail.
    let _ = write!(line, "{:<width$}", text, width = width);
}

fn finish_line(out: &mut String, line: &mut String) {
    out.push_str(line.trim_end());
    out.push('\n');
    line.clear();
}

/// Render the board with column indices across the top and row indices
/// down the left. Matched cells show their symbol, the rest show
/// [`HIDDEN_MARKER`].
///
/// ```text
/// -   0  1  2  3
/// 0   +  A  +  +
/// 1   +  A  +  +
/// ```
pub fn render_board(board: &Board) -> String {
    let dims = board.dimensions();
    let label_w = digits(dims.rows.saturating_sub(1)) + 3;
    let cell_w = digits(dims.cols.saturating_sub(1)) + 2;

    let mut out = String::new();
    let mut line = String::new();

    push_padded(&mut line, CORNER_MARKER, label_w);
    for c in 0..dims.cols {
        push_padded(&mut line, c, cell_w);
    }
    finish_line(&mut out, &mut line);

    for r in 0..dims.rows {
        push_padded(&mut line, r, label_w);
        for c in 0..dims.cols {
            let at = Coord::new(r, c);
            let shown = board.is_revealed(at).unwrap_or(false);
            let ch = if shown {
                board.symbol(at).unwrap_or(HIDDEN_MARKER)
            } else {
                HIDDEN_MARKER
            };
            push_padded(&mut line, ch, cell_w);
        }
        finish_line(&mut out, &mut line);
    }
    out
}
