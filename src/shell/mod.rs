//! Line-oriented terminal front end.
//!
//! Reads commands, hands moves to a `Game`, and prints whatever events the
//! game emits. Promotion choices are read from the same input stream.

mod command;

use std::io::{self, BufRead, Write};

pub use command::{parse_shell_command, ShellCommand};

use crate::board::{Color, Piece, Square};
use crate::game::{parse_promotion_answer, EventRecorder, Game, GameEvent, LogObserver};

const HELP: &str = "commands: e2e4 | e2 e4 | moves e2 | board | log | new | help | quit";

/// Run the shell on stdin/stdout until `quit` or end of input.
pub fn run_shell_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_shell(stdin.lock(), &mut stdout)
}

pub fn run_shell<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    run_game(Game::new(), input, out)
}

/// Run the shell on an already set-up game. `new` still resets to the
/// standard starting arrangement.
pub fn run_game<R: BufRead, W: Write>(mut game: Game, input: R, out: &mut W) -> io::Result<()> {
    let recorder = EventRecorder::new();
    game.add_observer(Box::new(recorder.clone()));
    game.add_observer(Box::new(LogObserver));

    writeln!(out, "{}", game.board())?;
    writeln!(out, "Current turn: {}", game.side_to_move())?;

    let mut lines = input.lines();
    while let Some(line) = lines.next() {
        let line = line?;
        let Some(cmd) = parse_shell_command(&line) else {
            continue;
        };

        match cmd {
            ShellCommand::Quit => break,
            ShellCommand::Help => writeln!(out, "{HELP}")?,
            ShellCommand::Board => writeln!(out, "{}", game.board())?,
            ShellCommand::Log => writeln!(out, "{}", game.log())?,
            ShellCommand::New => game.reset_game(),
            ShellCommand::Moves(from) => {
                let targets = game.legal_moves(from);
                writeln!(out, "{}", game.board().render_highlighted(&targets))?;
            }
            ShellCommand::Move { from, to } => {
                let mut ask = |color: Color, square: Square| -> Option<Piece> {
                    // The prompt has to be visible before blocking on input
                    let _ = writeln!(
                        out,
                        "{color} pawn promotes on {square}. Choose q/r/b/n (default queen):"
                    );
                    let _ = out.flush();
                    let answer = lines.next()?.ok()?;
                    parse_promotion_answer(&answer)
                };
                if let Err(err) = game.attempt_move(from, to, &mut ask) {
                    writeln!(out, "{err}")?;
                }
            }
            ShellCommand::Unknown(text) => writeln!(out, "Unknown command '{text}'. {HELP}")?,
        }

        for event in recorder.drain() {
            print_event(out, &event)?;
        }
        out.flush()?;
    }
    Ok(())
}

fn print_event<W: Write>(out: &mut W, event: &GameEvent) -> io::Result<()> {
    match event {
        GameEvent::BoardChanged(board) => writeln!(out, "{board}"),
        GameEvent::SideToMoveChanged(color) => writeln!(out, "Current turn: {color}"),
        GameEvent::MoveRecorded {
            notation,
            is_white_move,
            move_number,
        } => {
            if *is_white_move {
                writeln!(out, "{move_number}. {notation}")
            } else {
                writeln!(out, "{move_number}... {notation}")
            }
        }
        GameEvent::Check(color) => writeln!(out, "{color} is in check!"),
        GameEvent::Checkmate { winner } => {
            writeln!(out, "Checkmate! {winner} wins. Type 'new' to play again.")
        }
        GameEvent::Stalemate => writeln!(out, "Stalemate. The game is drawn."),
        GameEvent::GameReset => writeln!(out, "New game."),
    }
}
