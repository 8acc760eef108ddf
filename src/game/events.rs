//! Outbound events for the presentation layer.

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameEvent {
    /// The board after an accepted move or a reset.
    BoardChanged(Board),
    SideToMoveChanged(Color),
    MoveRecorded {
        notation: String,
        is_white_move: bool,
        move_number: u32,
    },
    Check(Color),
    Checkmate { winner: Color },
    Stalemate,
    GameReset,
}

pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Forwards events to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::BoardChanged(board) => log::trace!("board now {}", board.to_fen()),
            GameEvent::SideToMoveChanged(color) => log::info!("{color} to move"),
            GameEvent::MoveRecorded {
                notation,
                move_number,
                ..
            } => log::info!("move {move_number}: {notation}"),
            GameEvent::Check(color) => log::info!("{color} is in check"),
            GameEvent::Checkmate { winner } => log::info!("checkmate, {winner} wins"),
            GameEvent::Stalemate => log::info!("stalemate"),
            GameEvent::GameReset => log::info!("new game"),
        }
    }
}

/// Keeps every event it sees. Clones share the same buffer, so one handle
/// can be registered with a game while another is read.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl GameObserver for EventRecorder {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
