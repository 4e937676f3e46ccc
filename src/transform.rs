//! Direction reorientation.
//!
//! Every move is handled by the engine as "collapse each row toward index 0".
//! `transform` rotates or mirrors a board so that the requested direction
//! becomes that shift-left case, and `revert` undoes the reorientation.
use crate::board::Board;
use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// One of the four directions a move can slide the tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Single-character key used by the command line player.
    pub fn to_char(&self) -> char {
        match self {
            Direction::Left => 'l',
            Direction::Right => 'r',
            Direction::Up => 'u',
            Direction::Down => 'd',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = GameError;

    /// Maps `u`/`l`/`d`/`r` (either case) to a direction.
    ///
    /// # Examples
    /// ```
    /// use twenty48::transform::Direction;
    /// assert_eq!(Direction::try_from('u').unwrap(), Direction::Up);
    /// assert!(Direction::try_from('x').is_err());
    /// ```
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'l' => Ok(Direction::Left),
            'r' => Ok(Direction::Right),
            'u' => Ok(Direction::Up),
            'd' => Ok(Direction::Down),
            _ => Err(GameError::InvalidDirection(c.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Direction::Left),
            "r" | "right" => Ok(Direction::Right),
            "u" | "up" => Ok(Direction::Up),
            "d" | "down" => Ok(Direction::Down),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        write!(f, "{}", name)
    }
}

/// Returns a copy of `board` oriented so that a move in `direction` becomes
/// a collapse of every row toward column 0.
///
/// - `Left`: identity copy.
/// - `Right`: each row reversed.
/// - `Up`: transpose.
/// - `Down`: rows reversed, then transpose.
pub fn transform(board: &Board, direction: Direction) -> Board {
    match direction {
        Direction::Left => board.clone(),
        Direction::Right => board.mirrored(),
        Direction::Up => board.transposed(),
        Direction::Down => board.flipped().transposed(),
    }
}

/// Inverse of `transform` for the same direction.
///
/// `Down` reverts as transpose-then-flip, the reverse order of its transform.
///
/// # Examples
/// ```
/// use twenty48::board::Board;
/// use twenty48::transform::{revert, transform, Direction};
/// let board = Board::from_rows(vec![vec![2, 4], vec![8, 0]]).unwrap();
/// for direction in Direction::ALL {
///     assert_eq!(revert(&transform(&board, direction), direction), board);
/// }
/// ```
pub fn revert(board: &Board, direction: Direction) -> Board {
    match direction {
        Direction::Left => board.clone(),
        Direction::Right => board.mirrored(),
        Direction::Up => board.transposed(),
        Direction::Down => board.transposed().flipped(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;
    use pretty_assertions::assert_eq;

    fn sample_board() -> Board {
        board_from_str_array(&[
            "2 4 8 16",
            "32 64 128 256",
            "512 1024 2048 4096",
            "8192 . 2 .",
        ])
        .unwrap()
    }

    #[test]
    fn test_transform_left_is_identity() {
        let board = sample_board();
        assert_eq!(transform(&board, Direction::Left), board);
    }

    #[test]
    fn test_transform_right_mirrors_rows() {
        let board = sample_board();
        let t = transform(&board, Direction::Right);
        assert_eq!(t.row(0), &[16, 8, 4, 2]);
        assert_eq!(t.row(3), &[0, 2, 0, 8192]);
    }

    #[test]
    fn test_transform_up_transposes() {
        let board = sample_board();
        let t = transform(&board, Direction::Up);
        assert_eq!(t.row(0), &[2, 32, 512, 8192]);
        assert_eq!(t.row(1), &[4, 64, 1024, 0]);
    }

    #[test]
    fn test_transform_down_reads_columns_bottom_up() {
        let board = sample_board();
        let t = transform(&board, Direction::Down);
        // row i of the transformed board is column i read from the bottom
        assert_eq!(t.row(0), &[8192, 512, 32, 2]);
        assert_eq!(t.row(1), &[0, 1024, 64, 4]);
        assert_eq!(t.row(2), &[2, 2048, 128, 8]);
    }

    #[test]
    fn test_round_trip_all_directions() {
        let boards = [
            sample_board(),
            Board::new_empty(4),
            board_from_str_array(&["2 . .", ". 4 .", "8 . 16"]).unwrap(),
            board_from_str_array(&["2"]).unwrap(),
        ];
        for board in &boards {
            for direction in Direction::ALL {
                assert_eq!(
                    &revert(&transform(board, direction), direction),
                    board,
                    "round trip failed for {}",
                    direction
                );
            }
        }
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!(Direction::try_from('l').unwrap(), Direction::Left);
        assert_eq!(Direction::try_from('R').unwrap(), Direction::Right);
        assert_eq!(Direction::try_from('u').unwrap(), Direction::Up);
        assert_eq!(Direction::try_from('d').unwrap(), Direction::Down);
        assert_eq!("down".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!(" Up ".parse::<Direction>().unwrap(), Direction::Up);

        assert_eq!(
            Direction::try_from('x'),
            Err(GameError::InvalidDirection("x".to_string()))
        );
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(GameError::InvalidDirection(_))
        ));
    }

    #[test]
    fn test_direction_char_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::try_from(direction.to_char()).unwrap(), direction);
        }
    }
}
