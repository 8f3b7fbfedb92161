//! Crate `validator` implements a model checker for a *completed* board,
//! independent of whatever search produced it. Checks the row/column/box
//! invariants directly against the 81-character digit encoding, rather than
//! re-deriving them from internal literals.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has invalid length {got} (expected 81)")]
    InvalidLength { got: usize },

    #[error("invalid digit at position {position}: byte {byte:#04x}")]
    InvalidDigit { position: usize, byte: u8 },

    #[error("{group} {index} contains {digit} more than once")]
    Duplicate { group: &'static str, index: usize, digit: u8 },
}

/// Returns `Ok(())` iff `board` is an 81-character, fully-filled, valid
/// Sudoku solution: every row, column, and 3x3 box contains each of
/// `'1'..'9'` exactly once. A valid board of this shape automatically
/// satisfies the triad constraints too, since those are implied by the row/
/// column/box constraints they were derived from.
pub fn validate(board: &str) -> Result<(), BoardError> {
    let bytes = board.as_bytes();
    if bytes.len() != 81 {
        return Err(BoardError::InvalidLength { got: bytes.len() });
    }
    for (i, &b) in bytes.iter().enumerate() {
        if !(b'1'..=b'9').contains(&b) {
            return Err(BoardError::InvalidDigit { position: i, byte: b });
        }
    }

    check_groups("row", bytes, |r, c| r * 9 + c)?;
    check_groups("column", bytes, |r, c| c * 9 + r)?;
    check_groups("box", bytes, |r, c| (r / 3) * 27 + (c / 3) * 9 + (r % 3) * 3 + (c % 3))?;
    Ok(())
}

fn check_groups(
    group: &'static str,
    bytes: &[u8],
    index_of: impl Fn(usize, usize) -> usize,
) -> Result<(), BoardError> {
    for g in 0..9 {
        let mut seen = [false; 9];
        for member in 0..9 {
            let digit = bytes[index_of(g, member)];
            let slot = (digit - b'1') as usize;
            if seen[slot] {
                return Err(BoardError::Duplicate { group, index: g, digit });
            }
            seen[slot] = true;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn accepts_a_valid_solved_board() {
        assert!(validate(SOLVED).is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(validate("123"), Err(BoardError::InvalidLength { got: 3 }));
    }

    #[test]
    fn rejects_a_duplicate_in_a_row() {
        let mut board = SOLVED.as_bytes().to_vec();
        board[1] = board[0];
        let result = validate(std::str::from_utf8(&board).unwrap());
        assert!(matches!(result, Err(BoardError::Duplicate { group: "row", index: 0, .. })));
    }
}
