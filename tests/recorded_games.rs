use serde::Deserialize;

use chess_rules::board::{Color, Square};
use chess_rules::game::{parse_promotion_answer, FixedChoice, Game, GameStatus};

#[derive(Deserialize)]
struct GameSet {
    games: Vec<RecordedGame>,
}

#[derive(Deserialize)]
struct RecordedGame {
    name: String,
    #[serde(default)]
    start: Option<String>,
    moves: String,
    log: Vec<String>,
    status: String,
}

/// Split `e2e4` / `a7a8r` into squares and an optional promotion letter.
fn parse_move(text: &str) -> (Square, Square, Option<String>) {
    let from = text[0..2].parse().expect("bad source square");
    let to = text[2..4].parse().expect("bad destination square");
    let promo = (text.len() > 4).then(|| text[4..].to_string());
    (from, to, promo)
}

fn expected_status(status: &str) -> GameStatus {
    match status {
        "ongoing" => GameStatus::Ongoing,
        "white_wins" => GameStatus::Checkmate {
            winner: Color::White,
        },
        "black_wins" => GameStatus::Checkmate {
            winner: Color::Black,
        },
        "stalemate" => GameStatus::Stalemate,
        other => panic!("unknown status '{other}'"),
    }
}

fn load_games() -> Vec<RecordedGame> {
    let data = include_str!("data/games.json");
    let set: GameSet = serde_json::from_str(data).expect("invalid games.json");
    set.games
}

fn replay(game: &RecordedGame, mut after_each: impl FnMut(&Game)) -> Game {
    let mut live = match &game.start {
        Some(fen) => Game::from_fen(fen).expect("invalid start position"),
        None => Game::new(),
    };
    for text in game.moves.split_whitespace() {
        let (from, to, promo) = parse_move(text);
        let mut chooser = FixedChoice(promo.as_deref().and_then(parse_promotion_answer));
        if let Err(err) = live.attempt_move(from, to, &mut chooser) {
            panic!("{}: move {} rejected: {}", game.name, text, err);
        }
        after_each(&live);
    }
    live
}

#[test]
fn recorded_games_replay() {
    for recorded in load_games() {
        let game = replay(&recorded, |_| {});
        assert_eq!(game.log().entries(), recorded.log, "{}", recorded.name);
        assert_eq!(
            game.status(),
            expected_status(&recorded.status),
            "{}",
            recorded.name
        );
    }
}

#[test]
fn recorded_games_keep_check_flags_in_sync() {
    for recorded in load_games() {
        replay(&recorded, |game| {
            for color in [Color::White, Color::Black] {
                assert_eq!(
                    game.in_check(color),
                    game.board().is_in_check(color),
                    "{}: stale check flag for {}",
                    recorded.name,
                    color
                );
            }
        });
    }
}

#[test]
fn recorded_games_never_gain_pieces() {
    for recorded in load_games() {
        let mut count = match &recorded.start {
            Some(fen) => Game::from_fen(fen).unwrap().board().piece_count(),
            None => 32,
        };
        replay(&recorded, |game| {
            let now = game.board().piece_count();
            assert!(now <= count, "{}: piece count grew", recorded.name);
            assert!(count - now <= 1, "{}: lost more than one piece", recorded.name);
            count = now;
        });
    }
}

#[test]
fn finished_games_have_no_legal_reply() {
    for recorded in load_games() {
        let game = replay(&recorded, |_| {});
        if game.is_over() {
            let stuck = match game.status() {
                GameStatus::Checkmate { winner } => winner.opponent(),
                _ => game.side_to_move(),
            };
            assert!(
                game.board().all_legal_moves(stuck).is_empty(),
                "{}",
                recorded.name
            );
        }
    }
}
