use crate::board::{Board, Tile, EMPTY};
use crate::error::GameError;

/// Parses an array of string slices into a `Board`.
///
/// Each string slice is one row, starting from row 0. Cells are separated by
/// whitespace and are either a number or `.` for an empty cell (`0` is also
/// accepted as empty). The number of rows and the number of cells in every row
/// must agree; the board size is taken from the row count.
///
/// # Returns
/// * `Ok(Board)` if parsing and validation succeed.
/// * `Err(GameError::InvalidBoard)` if a token is not a number or `.`, or if
///   the resulting rows fail `Board::from_rows` validation (not square, not a
///   power of two).
///
/// # Examples
/// ```
/// use twenty48::utils::board_from_str_array;
/// use twenty48::board::EMPTY;
///
/// let board = board_from_str_array(&[
///     "2 . 4",
///     ". . .",
///     "8 . 2",
/// ]).unwrap();
/// assert_eq!(board.get_tile(0, 0), 2);
/// assert_eq!(board.get_tile(0, 1), EMPTY);
/// assert_eq!(board.get_tile(2, 0), 8);
///
/// assert!(board_from_str_array(&["2 X", ". ."]).is_err());
/// assert!(board_from_str_array(&["2 .", ". .", ". ."]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, GameError> {
    let mut rows = Vec::with_capacity(s.len());

    for (r, row_str) in s.iter().enumerate() {
        let mut row: Vec<Tile> = Vec::new();
        for (c, token) in row_str.split_whitespace().enumerate() {
            let tile = if token == "." {
                EMPTY
            } else {
                token.parse::<Tile>().map_err(|_| {
                    GameError::InvalidBoard(format!(
                        "unrecognized cell '{}' in row {} col {}",
                        token, r, c
                    ))
                })?
            };
            row.push(tile);
        }
        rows.push(row);
    }

    Board::from_rows(rows)
}

/// Parses a multi-line board description, skipping blank lines.
///
/// This is the format accepted by the command line player's `--board-file`.
pub fn parse_board(text: &str) -> Result<Board, GameError> {
    let lines: Vec<&str> = text
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    board_from_str_array(&lines)
}
