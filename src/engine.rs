//! Core move engine for 2048.
//!
//! This module defines the game's rules:
//! - `collapse_line`: the merge-and-compact pass applied to a single line.
//! - `shift_board`: reorients a board, collapses every row, and reverts it.
//! - `add_random_tile`: spawns a 2 or a 4 on a random empty cell.
//! - `apply_move`: a full move (shift, then spawn or report game over).
//! - `GameSession`: owns a board, the running score and the game-over flag.
use crate::board::{Board, Tile, EMPTY};
use crate::config::SessionConfig;
use crate::error::GameError;
use crate::transform::{revert, transform, Direction};
use log::{debug, info, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// What a move did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A tile was spawned; the game goes on. `points` is the sum of the tiles
    /// created by merges during this move.
    Continue { points: u64 },
    /// The collapsed board had no empty cell, so no tile could be spawned.
    GameOver,
}

impl MoveOutcome {
    /// Points scored by the move, `None` once the game is over.
    pub fn points(&self) -> Option<u64> {
        match self {
            MoveOutcome::Continue { points } => Some(*points),
            MoveOutcome::GameOver => None,
        }
    }
}

/// A move's outcome together with the board it produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub outcome: MoveOutcome,
    /// The new board. For `GameOver` this is the collapsed board with no tile added.
    pub board: Board,
}

/// Collapses a line toward index 0.
///
/// Adjacent occupied cells (ignoring the empty cells between them) merge when
/// they hold equal values. Scanning runs left to right and a tile takes part
/// in at most one merge per pass, so `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`.
///
/// # Returns
/// `(points, collapsed)` where `points` is the sum of the doubled values
/// produced by merges (0 if nothing merged) and `collapsed` has the same
/// length as `line`.
///
/// # Examples
/// ```
/// use twenty48::engine::collapse_line;
/// assert_eq!(collapse_line(&[2, 2, 0, 0]), (4, vec![4, 0, 0, 0]));
/// assert_eq!(collapse_line(&[0, 2, 0, 4]), (0, vec![2, 4, 0, 0]));
/// ```
pub fn collapse_line(line: &[Tile]) -> (u64, Vec<Tile>) {
    let occupied: Vec<usize> = line
        .iter()
        .enumerate()
        .filter(|(_, &tile)| tile != EMPTY)
        .map(|(idx, _)| idx)
        .collect();

    if occupied.is_empty() {
        return (0, line.to_vec());
    }

    let mut values: Vec<Tile> = occupied.iter().map(|&idx| line[idx]).collect();
    // merged_into[i] is the occupied-list index of the left tile of the merge i took part in
    let mut merged_into: Vec<Option<usize>> = vec![None; occupied.len()];
    let mut points = 0;

    for i in 0..occupied.len() - 1 {
        let next = i + 1;
        if values[i] == values[next] && merged_into[i].is_none() && merged_into[next].is_none() {
            values[i] *= 2;
            points += values[i];
            merged_into[i] = Some(i);
            merged_into[next] = Some(i);
        }
    }

    // Survivors pack from 0 in order; an absorbed tile lands on its left partner.
    let mut targets = vec![0usize; occupied.len()];
    let mut next_free = 0;
    for i in 0..occupied.len() {
        match merged_into[i] {
            Some(left) if left != i => targets[i] = targets[left],
            _ => {
                targets[i] = next_free;
                next_free += 1;
            }
        }
    }

    let mut collapsed = vec![EMPTY; line.len()];
    for (i, &target) in targets.iter().enumerate() {
        let survives = merged_into[i].map_or(true, |left| left == i);
        if survives {
            collapsed[target] = values[i];
        }
    }

    (points, collapsed)
}

/// Slides and merges every line of `board` in `direction`, without spawning a tile.
///
/// # Returns
/// `(points, shifted)`: total merge points over all rows and the new board.
pub fn shift_board(board: &Board, direction: Direction) -> (u64, Board) {
    let mut oriented = transform(board, direction);
    let mut points = 0;
    for r in 0..oriented.size() {
        let (line_points, collapsed) = collapse_line(oriented.row(r));
        oriented.set_row(r, &collapsed);
        points += line_points;
    }
    (points, revert(&oriented, direction))
}

/// Returns a copy of `board` with a 2 or a 4 (even odds) placed on a uniformly
/// chosen empty cell.
///
/// # Returns
/// * `Ok(Board)` with exactly one previously empty cell filled.
/// * `Err(GameError::BoardFull)` if `board` has no empty cell.
///
/// # Examples
/// ```
/// use twenty48::board::Board;
/// use twenty48::engine::add_random_tile;
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let board = add_random_tile(&Board::new_empty(4), &mut rng).unwrap();
/// assert_eq!(board.count_empty(), 15);
/// ```
pub fn add_random_tile<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Board, GameError> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return Err(GameError::BoardFull);
    }

    let tile: Tile = if rng.gen_bool(0.5) { 2 } else { 4 };
    let (r, c) = empty[rng.gen_range(0..empty.len())];
    trace!("spawning {} at ({}, {})", tile, r, c);

    let mut out = board.clone();
    out.set_tile(r, c, tile);
    Ok(out)
}

/// Plays one move: shift in `direction`, then spawn a tile.
///
/// If the shifted board has no empty cell the move ends the game: the outcome
/// is `MoveOutcome::GameOver` and the shifted board is returned without a new
/// tile. A move that changes nothing still spawns a tile when there is room.
///
/// # Examples
/// ```
/// use twenty48::board::Board;
/// use twenty48::engine::{apply_move, MoveOutcome};
/// use twenty48::transform::Direction;
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let board = Board::from_rows(vec![vec![2, 2], vec![0, 0]]).unwrap();
/// let result = apply_move(&board, Direction::Left, &mut rng).unwrap();
/// assert_eq!(result.outcome, MoveOutcome::Continue { points: 4 });
/// assert_eq!(result.board.get_tile(0, 0), 4);
/// ```
pub fn apply_move<R: Rng + ?Sized>(
    board: &Board,
    direction: Direction,
    rng: &mut R,
) -> Result<MoveResult, GameError> {
    let (points, shifted) = shift_board(board, direction);

    if shifted.is_full() {
        return Ok(MoveResult {
            outcome: MoveOutcome::GameOver,
            board: shifted,
        });
    }

    let board = add_random_tile(&shifted, rng)?;
    Ok(MoveResult {
        outcome: MoveOutcome::Continue { points },
        board,
    })
}

/// Manages the state of a single 2048 game.
///
/// A session owns its board, the accumulated score, the game-over flag and
/// the random source used for tile spawns. It changes only through
/// `make_move`, and stops changing once `is_game_over()` is true.
///
/// # Examples
/// ```
/// use twenty48::engine::GameSession;
/// use twenty48::transform::Direction;
///
/// let mut game = GameSession::new_with_seed(4, 7).unwrap();
/// assert_eq!(game.board().count_empty(), 14);
///
/// game.make_move(Direction::Left).unwrap();
/// println!("Score: {}", game.score());
/// println!("{}", game.board());
///
/// if game.is_game_over() {
///     println!("Game over!");
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    score: u64,
    game_over: bool,
    rng: SmallRng,
}

impl GameSession {
    /// Starts a game on a `size`×`size` board seeded with two random tiles.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Self::with_config(&SessionConfig::with_size(size), None)
    }

    /// Like `new`, with a reproducible tile spawner.
    pub fn new_with_seed(size: usize, seed: u64) -> Result<Self, GameError> {
        Self::with_config(&SessionConfig::with_size(size).seeded(seed), None)
    }

    /// Starts a game on an externally supplied board.
    ///
    /// # Returns
    /// `Err(GameError::InvalidBoard)` if `rows` is not a square of powers of
    /// two, or if `expected_size` is given and differs from the row count.
    ///
    /// # Examples
    /// ```
    /// use twenty48::engine::GameSession;
    /// assert!(GameSession::from_rows(vec![vec![0; 4]; 3], None).is_err());
    /// assert!(GameSession::from_rows(vec![vec![0; 4]; 4], Some(5)).is_err());
    /// assert!(GameSession::from_rows(vec![vec![0; 4]; 4], Some(4)).is_ok());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>, expected_size: Option<usize>) -> Result<Self, GameError> {
        let board = Board::from_rows(rows)?;
        let config = SessionConfig {
            size: expected_size,
            ..Default::default()
        };
        Self::with_config(&config, Some(board))
    }

    /// General constructor.
    ///
    /// With `initial_board`, the board is checked against `config.size` and
    /// used as is. Without it, a board of `config.generated_size()` is created
    /// and two tiles are spawned on it; that size must be at least 2.
    pub fn with_config(config: &SessionConfig, initial_board: Option<Board>) -> Result<Self, GameError> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let board = match initial_board {
            Some(board) => {
                if let Some(expected) = config.size {
                    if board.size() != expected {
                        return Err(GameError::InvalidBoard(format!(
                            "wrong grid size: board is {}x{}, expected {}x{}",
                            board.size(),
                            board.size(),
                            expected,
                            expected
                        )));
                    }
                }
                board
            }
            None => {
                let size = config.generated_size();
                if size < 2 {
                    return Err(GameError::InvalidBoard(format!(
                        "a generated board needs room for two tiles, got size {}",
                        size
                    )));
                }
                let board = add_random_tile(&Board::new_empty(size), &mut rng)?;
                add_random_tile(&board, &mut rng)?
            }
        };

        debug!(
            "new {}x{} session, starting score {}",
            board.size(),
            board.size(),
            config.initial_score
        );

        Ok(GameSession {
            board,
            score: config.initial_score,
            game_over: false,
            rng,
        })
    }

    /// Returns an immutable reference to the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Points accumulated from merges so far.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// True once a move has left the board without room for a new tile.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Plays `direction`.
    ///
    /// On `Continue`, the move's points are added to the score and the board
    /// is replaced. On `GameOver`, the collapsed board is kept and the session
    /// becomes terminal. Calling this on a terminal session changes nothing
    /// and returns `MoveOutcome::GameOver`.
    ///
    /// The new board is computed before any field is touched, so an `Err`
    /// leaves the session as it was.
    pub fn make_move(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        if self.game_over {
            debug!("ignoring {} on a finished game", direction);
            return Ok(MoveOutcome::GameOver);
        }

        let result = apply_move(&self.board, direction, &mut self.rng)?;
        match result.outcome {
            MoveOutcome::Continue { points } => {
                self.score += points;
                debug!("moved {}: +{} points, score {}", direction, points, self.score);
            }
            MoveOutcome::GameOver => {
                self.game_over = true;
                info!("game over after {} with score {}", direction, self.score);
            }
        }
        self.board = result.board;

        Ok(result.outcome)
    }
}
