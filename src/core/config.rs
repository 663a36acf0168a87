/// Smallest number of distinct symbols a board can hold.
pub const MIN_SYMBOLS: usize = 1;
/// Largest number of distinct symbols; one per letter of the alphabet.
pub const MAX_SYMBOLS: usize = 26;
/// Symbol used for the first pair; later pairs follow alphabetically.
pub const FIRST_SYMBOL: char = 'A';
/// Shown in place of a symbol that has not been matched yet.
pub const HIDDEN_MARKER: char = '+';
/// Fills the top-left corner of a rendered board.
pub const CORNER_MARKER: char = '-';
/// Longest coordinate or symbol-count token accepted from the player.
pub const MAX_TOKEN_DIGITS: usize = 2;

/// Symbol assigned to the pair with the given index (`0 => 'A'`).
/// Returns `None` for indices beyond [`MAX_SYMBOLS`].
pub fn symbol_for(index: usize) -> Option<char> {
    if index >= MAX_SYMBOLS {
        return None;
    }
    char::from_u32(FIRST_SYMBOL as u32 + index as u32)
}

/// Inverse of [`symbol_for`].
pub fn symbol_index(symbol: char) -> Option<usize> {
    let idx = (symbol as u32).checked_sub(FIRST_SYMBOL as u32)? as usize;
    (idx < MAX_SYMBOLS).then_some(idx)
}
