//! The square 2048 grid.
//!
//! This module defines:
//! - `Tile`: the numeric value stored in a cell (`EMPTY` or a power of two).
//! - `Board`: an owned N×N matrix of tiles with the geometric primitives
//!   (transpose, row mirroring, vertical flip) that the transform module
//!   composes into direction reorientations.
use crate::error::GameError;
use std::fmt;

/// The value of a single cell. Zero is empty, anything else is a power of two.
pub type Tile = u64;

/// Sentinel value of an empty cell.
pub const EMPTY: Tile = 0;

/// Largest tile accepted on a supplied board.
///
/// A merge never makes the board total grow, so tiles produced in play stay
/// far below `Tile::MAX` when every starting tile is at most this value.
pub const MAX_TILE: Tile = 1 << 32;

/// Grid size used when no size is requested.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Represents the game board as a row-major N×N grid of `Tile`s.
///
/// A `Board` is always square. Every transition in the engine produces a new
/// `Board` instead of mutating the one it was given, so a board handed out by
/// a session never aliases the session's next state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    grid: Vec<Tile>,
}

impl Board {
    /// Creates a new `size`×`size` board with every cell set to `EMPTY`.
    ///
    /// # Examples
    /// ```
    /// use twenty48::board::{Board, EMPTY};
    /// let board = Board::new_empty(4);
    /// assert_eq!(board.get_tile(3, 3), EMPTY);
    /// assert_eq!(board.count_empty(), 16);
    /// ```
    pub fn new_empty(size: usize) -> Self {
        Board {
            size,
            grid: vec![EMPTY; size * size],
        }
    }

    /// Creates a board from a list of rows.
    ///
    /// # Returns
    /// * `Ok(Board)` if the rows form a non-empty square and every non-empty
    ///   cell holds a power of two.
    /// * `Err(GameError::InvalidBoard)` if there are no rows, any row length
    ///   differs from the row count, or a cell holds a value that is not a
    ///   power of two or is above `MAX_TILE`.
    ///
    /// # Examples
    /// ```
    /// use twenty48::board::Board;
    /// let board = Board::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(board.size(), 2);
    /// assert!(Board::from_rows(vec![vec![2, 0, 0], vec![0, 4, 0]]).is_err());
    /// assert!(Board::from_rows(vec![vec![3, 0], vec![0, 0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GameError> {
        let size = rows.len();
        if size == 0 {
            return Err(GameError::InvalidBoard(
                "board must have at least one row".to_string(),
            ));
        }

        let mut grid = Vec::with_capacity(size * size);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GameError::InvalidBoard(format!(
                    "board is not square: row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    size
                )));
            }
            for (c, &tile) in row.iter().enumerate() {
                if tile != EMPTY && !tile.is_power_of_two() {
                    return Err(GameError::InvalidBoard(format!(
                        "cell ({}, {}) holds {}, which is not a power of two",
                        r, c, tile
                    )));
                }
                if tile > MAX_TILE {
                    return Err(GameError::InvalidBoard(format!(
                        "cell ({}, {}) holds {}, above the largest allowed tile {}",
                        r, c, tile, MAX_TILE
                    )));
                }
            }
            grid.extend(row);
        }

        Ok(Board { size, grid })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is not below `size()`.
    pub fn get_tile(&self, r: usize, c: usize) -> Tile {
        self.grid[self.index(r, c)]
    }

    /// Sets the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is not below `size()`.
    pub fn set_tile(&mut self, r: usize, c: usize, tile: Tile) {
        let idx = self.index(r, c);
        self.grid[idx] = tile;
    }

    /// Borrow row `r` as a line of `size()` tiles.
    pub fn row(&self, r: usize) -> &[Tile] {
        &self.grid[r * self.size..(r + 1) * self.size]
    }

    /// Overwrites row `r` with `line`.
    ///
    /// # Panics
    /// Panics if `line.len()` differs from `size()`.
    pub fn set_row(&mut self, r: usize, line: &[Tile]) {
        let size = self.size;
        self.grid[r * size..(r + 1) * size].copy_from_slice(line);
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // chunks(0) panics, an empty grid yields no rows either way
        self.grid.chunks(self.size.max(1))
    }

    /// Copies the board into a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.grid
            .iter()
            .enumerate()
            .filter(|(_, &tile)| tile == EMPTY)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    /// Number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.grid.iter().filter(|&&tile| tile == EMPTY).count()
    }

    /// True if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Largest tile on the board, `EMPTY` for an empty board.
    pub fn max_tile(&self) -> Tile {
        self.grid.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Swaps rows and columns.
    pub fn transposed(&self) -> Board {
        let mut out = Board::new_empty(self.size);
        for r in 0..self.size {
            for c in 0..self.size {
                out.set_tile(c, r, self.get_tile(r, c));
            }
        }
        out
    }

    /// Reverses the order of the cells within every row (mirror along the vertical axis).
    pub fn mirrored(&self) -> Board {
        let mut out = self.clone();
        for row in out.grid.chunks_mut(self.size.max(1)) {
            row.reverse();
        }
        out
    }

    /// Reverses the order of the rows (mirror along the horizontal axis).
    pub fn flipped(&self) -> Board {
        let mut out = Board::new_empty(self.size);
        for r in 0..self.size {
            out.set_row(self.size - 1 - r, self.row(r));
        }
        out
    }

    fn index(&self, r: usize, c: usize) -> usize {
        assert!(
            r < self.size && c < self.size,
            "cell ({}, {}) is outside a {}x{} board",
            r,
            c,
            self.size,
            self.size
        );
        r * self.size + c
    }
}

impl fmt::Display for Board {
    /// Renders right-aligned columns, `.` for empty cells, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().to_string().len().max(1);
        for (r, row) in self.rows().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|&tile| {
                    if tile == EMPTY {
                        format!("{:>width$}", ".", width = width)
                    } else {
                        format!("{:>width$}", tile, width = width)
                    }
                })
                .collect();
            write!(f, "{}", cells.join(" "))?;
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_empty_board() {
        let board = Board::new_empty(4);
        assert_eq!(board.size(), 4);
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(board.get_tile(r, c), EMPTY);
            }
        }
        assert_eq!(board.empty_cells().len(), 16);
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let result = Board::from_rows(vec![vec![0; 4]; 3]);
        assert!(matches!(result, Err(GameError::InvalidBoard(_))));
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let result = Board::from_rows(vec![vec![0, 0], vec![0]]);
        assert!(matches!(result, Err(GameError::InvalidBoard(_))));
    }

    #[test]
    fn test_from_rows_rejects_empty_input() {
        assert!(matches!(
            Board::from_rows(Vec::new()),
            Err(GameError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_from_rows_rejects_non_power_of_two() {
        let result = Board::from_rows(vec![vec![2, 6], vec![0, 0]]);
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains("not a power of two"),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn test_from_rows_tile_limit() {
        let at_limit = Board::from_rows(vec![vec![MAX_TILE, 0], vec![0, 0]]);
        assert!(at_limit.is_ok(), "MAX_TILE itself is allowed");

        let above = Board::from_rows(vec![vec![MAX_TILE << 1, 0], vec![0, 0]]);
        let err = above.unwrap_err();
        assert!(
            err.to_string().contains("above the largest allowed tile"),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn test_set_and_get_tile() {
        let mut board = Board::new_empty(3);
        board.set_tile(1, 2, 8);
        assert_eq!(board.get_tile(1, 2), 8);
        assert_eq!(board.row(1), &[0, 0, 8]);
        assert_eq!(board.count_empty(), 8);
        assert!(!board.empty_cells().contains(&(1, 2)));
    }

    #[test]
    #[should_panic]
    fn test_get_tile_out_of_bounds() {
        let board = Board::new_empty(4);
        board.get_tile(0, 4);
    }

    #[test]
    fn test_geometric_primitives() {
        let board = board_from_str_array(&["2 4 8", "16 32 64", "128 256 512"]).unwrap();

        assert_eq!(
            board.transposed().to_rows(),
            vec![vec![2, 16, 128], vec![4, 32, 256], vec![8, 64, 512]]
        );
        assert_eq!(
            board.mirrored().to_rows(),
            vec![vec![8, 4, 2], vec![64, 32, 16], vec![512, 256, 128]]
        );
        assert_eq!(
            board.flipped().to_rows(),
            vec![vec![128, 256, 512], vec![16, 32, 64], vec![2, 4, 8]]
        );
    }

    #[test]
    fn test_is_full_and_max_tile() {
        let full = board_from_str_array(&["2 4", "8 16"]).unwrap();
        assert!(full.is_full());
        assert_eq!(full.max_tile(), 16);

        let empty = Board::new_empty(2);
        assert!(!empty.is_full());
        assert_eq!(empty.max_tile(), EMPTY);
    }

    #[test]
    fn test_display_board_formatting() {
        let board = board_from_str_array(&["2 . . .", ". 128 . .", ". . . .", ". . . 4"]).unwrap();
        let display_str = format!("{}", board);
        println!("---Board Display Test:\n{}---", display_str);

        assert_eq!(display_str.lines().count(), 4, "one line per row");
        assert_eq!(display_str.lines().next(), Some("  2   .   .   ."));
        assert_eq!(display_str.lines().nth(1), Some("  . 128   .   ."));
    }
}
