use crate::board::Square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `e2e4` or `e2 e4`
    Move { from: Square, to: Square },
    /// `moves e2`: legal destinations of one piece
    Moves(Square),
    Board,
    Log,
    New,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_shell_command(line: &str) -> Option<ShellCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let unknown = || ShellCommand::Unknown(trimmed.to_string());

    let cmd = match parts.as_slice() {
        ["quit"] | ["exit"] => ShellCommand::Quit,
        ["new"] => ShellCommand::New,
        ["log"] => ShellCommand::Log,
        ["board"] => ShellCommand::Board,
        ["help"] => ShellCommand::Help,
        ["moves", square] => square.parse::<Square>().map_or_else(|_| unknown(), ShellCommand::Moves),
        [from, to] => match (from.parse::<Square>(), to.parse::<Square>()) {
            (Ok(from), Ok(to)) => ShellCommand::Move { from, to },
            _ => unknown(),
        },
        [coords] if coords.len() == 4 && coords.is_ascii() => {
            match (coords[..2].parse::<Square>(), coords[2..].parse::<Square>()) {
                (Ok(from), Ok(to)) => ShellCommand::Move { from, to },
                _ => unknown(),
            }
        }
        _ => unknown(),
    };

    Some(cmd)
}
