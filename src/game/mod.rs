//! Game state machine.
//!
//! `Game` owns the only mutable state: the board, the side to move, the
//! per-color check flags and the move log. The presentation layer calls
//! `attempt_move`, `legal_moves` and `reset_game` and reacts to the returned
//! report and to the events sent to registered observers.
//!
//! # Example
//! ```
//! use chess_rules::board::Square;
//! use chess_rules::game::{AutoQueen, Game, MoveOutcome};
//!
//! let mut game = Game::new();
//! let report = game
//!     .attempt_move("e2".parse().unwrap(), "e4".parse().unwrap(), &mut AutoQueen)
//!     .unwrap();
//! assert_eq!(report.notation, "e2e4");
//! assert!(matches!(report.outcome, MoveOutcome::Continued { .. }));
//! assert_eq!(game.legal_moves(Square(1, 4)).len(), 2);
//! ```

mod events;
mod notation;
mod promotion;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use events::{EventRecorder, GameEvent, GameObserver, LogObserver};
pub use notation::{render_move, MoveLog, MoveRecord};
pub use promotion::{parse_promotion_answer, AutoQueen, FixedChoice, PromotionChooser};

use crate::board::{
    parse_side_to_move, Board, Color, ColoredPiece, FenError, Move, MoveError, Piece, Square,
};
use promotion::resolve_choice;

/// Result of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    /// Play goes on; `side_to_move` is not in check.
    Continued { side_to_move: Color },
    /// Play goes on with `side_to_move` in check.
    Check { side_to_move: Color },
    Checkmate { winner: Color },
    /// Drawn: the side to move has no legal move and is not in check.
    Stalemate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: Move,
    /// Notation without the move-number prefix
    pub notation: String,
    pub outcome: MoveOutcome,
}

pub struct Game {
    board: Board,
    side_to_move: Color,
    in_check: [bool; 2],
    log: MoveLog,
    status: GameStatus,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// Standard starting arrangement, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            side_to_move: Color::White,
            in_check: [false; 2],
            log: MoveLog::new(),
            status: GameStatus::Ongoing,
            observers: Vec::new(),
        }
    }

    /// Set up a game from a placement string with an optional side-to-move
    /// field, e.g. `"7k/5Q2/6K1/8/8/8/8/8 b"`.
    ///
    /// Both kings must be present, and the side not on move must not be in
    /// check. Check flags and terminal status are computed for the position
    /// as given.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let board = Board::from_fen(fen)?;
        let side_to_move = parse_side_to_move(fen)?;
        for color in Color::BOTH {
            if board.find_king(color).is_none() {
                return Err(FenError::MissingKing { color });
            }
        }
        let waiting = side_to_move.opponent();
        if board.is_in_check(waiting) {
            return Err(FenError::OpponentInCheck { color: waiting });
        }

        let mut game = Game::new();
        game.in_check = [
            board.is_in_check(Color::White),
            board.is_in_check(Color::Black),
        ];
        if !board.has_any_legal_move(side_to_move) {
            game.status = if game.in_check[side_to_move.index()] {
                GameStatus::Checkmate {
                    winner: side_to_move.opponent(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        game.board = board;
        game.side_to_move = side_to_move;
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Check flag for `color` as of the last accepted move.
    pub fn in_check(&self, color: Color) -> bool {
        self.in_check[color.index()]
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Legal destinations for the piece on `from`, for highlighting. Empty for
    /// an empty or off-board square.
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        if !from.is_on_board() {
            return Vec::new();
        }
        self.board.legal_moves(from)
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Back to the starting arrangement with an empty log. Observers stay
    /// registered.
    pub fn reset_game(&mut self) {
        self.board = Board::new();
        self.side_to_move = Color::White;
        self.in_check = [false; 2];
        self.log.clear();
        self.status = GameStatus::Ongoing;
        log::debug!("game reset");

        self.emit(GameEvent::GameReset);
        self.emit(GameEvent::BoardChanged(self.board.clone()));
        self.emit(GameEvent::SideToMoveChanged(self.side_to_move));
    }

    /// Validate and play one move.
    ///
    /// Validation runs to completion before anything changes, so an `Err`
    /// leaves the game exactly as it was. `chooser` is consulted only when a
    /// pawn reaches the last rank; invalid or missing answers become a queen.
    pub fn attempt_move(
        &mut self,
        from: Square,
        to: Square,
        chooser: &mut dyn PromotionChooser,
    ) -> Result<MoveReport, MoveError> {
        let piece = match self.validate(from, to) {
            Ok(piece) => piece,
            Err(err) => {
                log::trace!("rejected {from}{to}: {err}");
                return Err(err);
            }
        };
        let mover = piece.color;
        let opponent = mover.opponent();
        let mut mv = Move::new(from, to, !self.board.is_empty(to));

        self.board.relocate(from, to);

        let mut moved = piece;
        if piece.piece == Piece::Pawn && to.row() == mover.promotion_row() {
            let answer = chooser.choose_promotion(mover, to);
            let promoted = resolve_choice(answer);
            if answer != Some(promoted) {
                log::trace!("promotion answer {answer:?} on {to} replaced by queen");
            }
            moved.piece = promoted;
            mv = mv.with_promotion(promoted);
        }
        moved.has_moved = true;
        self.board.set_piece(to, moved);

        let record = self.log.record(piece.piece, &mv, mover).clone();

        self.in_check[mover.index()] = false;
        let opponent_in_check = self.board.is_in_check(opponent);
        self.in_check[opponent.index()] = opponent_in_check;
        let opponent_can_move = self.board.has_any_legal_move(opponent);

        let outcome = if opponent_in_check && !opponent_can_move {
            self.status = GameStatus::Checkmate { winner: mover };
            MoveOutcome::Checkmate { winner: mover }
        } else {
            self.side_to_move = opponent;
            if !opponent_can_move {
                self.status = GameStatus::Stalemate;
                MoveOutcome::Stalemate
            } else if opponent_in_check {
                MoveOutcome::Check {
                    side_to_move: opponent,
                }
            } else {
                MoveOutcome::Continued {
                    side_to_move: opponent,
                }
            }
        };
        log::debug!("{mover} played {} -> {outcome:?}", record.notation);

        self.emit(GameEvent::BoardChanged(self.board.clone()));
        self.emit(GameEvent::MoveRecorded {
            notation: record.notation.clone(),
            is_white_move: record.is_white_move(),
            move_number: record.move_number,
        });
        match outcome {
            MoveOutcome::Checkmate { winner } => self.emit(GameEvent::Checkmate { winner }),
            MoveOutcome::Check { side_to_move } => {
                self.emit(GameEvent::SideToMoveChanged(side_to_move));
                self.emit(GameEvent::Check(side_to_move));
            }
            MoveOutcome::Continued { side_to_move } => {
                self.emit(GameEvent::SideToMoveChanged(side_to_move));
            }
            MoveOutcome::Stalemate => {
                self.emit(GameEvent::SideToMoveChanged(opponent));
                self.emit(GameEvent::Stalemate);
            }
        }

        Ok(MoveReport {
            mv,
            notation: record.notation,
            outcome,
        })
    }

    fn validate(&self, from: Square, to: Square) -> Result<ColoredPiece, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if !from.is_on_board() {
            return Err(MoveError::NoPieceAt { square: from });
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAt { square: from })?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongSide {
                square: from,
                color: piece.color,
            });
        }
        if !self.board.legal_moves(from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }
        Ok(piece)
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board.to_fen())
            .field("side_to_move", &self.side_to_move)
            .field("in_check", &self.in_check)
            .field("log", &self.log.entries())
            .field("status", &self.status)
            .field("observers", &self.observers.len())
            .finish()
    }
}
