//! xboard/CECP front-end and command loop.
//!
//! Keeps one `Game`, forwards `usermove` commands to `Game::commit`, lets a
//! `MoveSource` answer for the engine's side and reports results. Diagnostic
//! output is written as `#` comment lines, which GUIs ignore.

use std::io::{self, BufRead, Write};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Color;
use crate::game_state::game::{Game, GamePhase};
use crate::game_state::game_options::GameOptions;
use crate::protocol::move_source::{MoveSource, RandomMoveSource};
use crate::utils::long_algebraic::{parse_coordinate_move, CoordinateMove};

const XBOARD_ENGINE_NAME: &str = "plum_rules";

/// Commands that are valid protocol input but need no action here.
const IGNORED_COMMANDS: &[&str] = &[
    "accepted", "rejected", "random", "hard", "easy", "post", "nopost", "computer", "level",
    "st", "sd", "time", "otim", "result", "name", "rating", "ics",
];

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = XboardSession::new(RandomMoveSource::new());

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

/// Read a `move <coordinate>` line produced by an external engine.
/// Returns `None` for any other line.
pub fn parse_engine_reply(line: &str) -> Option<Result<CoordinateMove, ChessErrors>> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("move") => Some(
            parts
                .next()
                .ok_or_else(|| ChessErrors::InvalidCoordinateMove(line.trim().to_owned()))
                .and_then(parse_coordinate_move),
        ),
        _ => None,
    }
}

pub struct XboardSession<S: MoveSource> {
    game: Game,
    options: GameOptions,
    source: S,
    /// Side the move source plays; `None` in force mode.
    engine_color: Option<Color>,
    result_reported: bool,
    debug_mode: bool,
}

impl<S: MoveSource> XboardSession<S> {
    pub fn new(source: S) -> Self {
        let options = GameOptions::default();
        Self {
            game: Game::new_game(options),
            options,
            source,
            engine_color: None,
            result_reported: false,
            debug_mode: false,
        }
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    #[inline]
    pub fn engine_color(&self) -> Option<Color> {
        self.engine_color
    }

    /// Handle one protocol line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "xboard" => {
                self.debug_line(out, "xboard mode")?;
            }
            "protover" => {
                writeln!(
                    out,
                    "feature myname=\"{XBOARD_ENGINE_NAME}\" usermove=1 setboard=0 ping=1 sigint=0 \
                     option=\"clock_minutes -spin 15 1 180\" \
                     option=\"rules -combo *standard /// relaxed\" done=1"
                )?;
            }
            "ping" => {
                writeln!(out, "pong {}", parts.next().unwrap_or_default())?;
            }
            "new" => {
                self.game = Game::new_game(self.options);
                self.game.start();
                self.source.new_game();
                self.engine_color = Some(Color::Black);
                self.result_reported = false;
                self.debug_line(
                    out,
                    &format!(
                        "new game, {} rules, {} ms per side, {} plays black",
                        self.options.rule_mode,
                        self.options.initial_clock_ms,
                        self.source.name()
                    ),
                )?;
            }
            "force" => {
                self.engine_color = None;
            }
            "go" => {
                self.engine_color = Some(self.game.current_color());
                self.play_engine_move(out)?;
            }
            "usermove" => match parts.next() {
                Some(text) => self.handle_usermove(text, out)?,
                None => writeln!(out, "Error (missing move): usermove")?,
            },
            "option" => {
                let setting = parts.collect::<Vec<_>>().join(" ");
                self.handle_option(&setting, out)?;
            }
            "debug" => {
                let mode = parts.next().unwrap_or_default();
                self.debug_mode = mode.eq_ignore_ascii_case("on");
            }
            "quit" => {
                return Ok(true);
            }
            _ if IGNORED_COMMANDS.contains(&cmd) => {}
            _ => {
                writeln!(out, "Error (unknown command): {cmd}")?;
            }
        }

        Ok(false)
    }

    fn handle_usermove(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        let mv = match parse_coordinate_move(text) {
            Ok(mv) => mv,
            Err(err) => {
                writeln!(out, "Illegal move ({err}): {text}")?;
                return Ok(());
            }
        };

        match self.game.commit(mv.from, mv.to, mv.promotion) {
            Ok(record) => {
                self.debug_line(out, &format!("{} played {}", record.color, record.long_algebraic()))?;
            }
            Err(rejection) => {
                writeln!(out, "Illegal move ({rejection}): {text}")?;
                return self.report_result(out);
            }
        }

        self.report_result(out)?;
        if self.engine_color == Some(self.game.current_color()) {
            self.play_engine_move(out)?;
        }
        Ok(())
    }

    fn handle_option(&mut self, setting: &str, out: &mut impl Write) -> io::Result<()> {
        let Some((name, value)) = setting.split_once('=') else {
            writeln!(out, "Error (bad option): {setting}")?;
            return Ok(());
        };
        match self.options.set_option(name.trim(), value.trim()) {
            Ok(()) => self.debug_line(out, &format!("{} applies from the next game", name.trim())),
            Err(err) => writeln!(out, "Error ({err}): option"),
        }
    }

    fn play_engine_move(&mut self, out: &mut impl Write) -> io::Result<()> {
        if !self.game.is_active() {
            return self.report_result(out);
        }
        let Some(mv) = self.source.choose_move(&self.game) else {
            return self.debug_line(out, &format!("{} has no move", self.source.name()));
        };
        match self.game.commit(mv.from, mv.to, mv.promotion) {
            Ok(_) => writeln!(out, "move {mv}")?,
            Err(rejection) => {
                self.debug_line(out, &format!("{} proposed {mv}: {rejection}", self.source.name()))?
            }
        }
        self.report_result(out)
    }

    fn report_result(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.result_reported {
            return Ok(());
        }
        if let Some(line) = result_line(&self.game) {
            self.result_reported = true;
            writeln!(out, "{line}")?;
            if self.debug_mode {
                for row in self.game.board().to_string().lines() {
                    writeln!(out, "# {row}")?;
                }
            }
        }
        Ok(())
    }

    fn debug_line(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        if self.debug_mode {
            writeln!(out, "# {message}")?;
        }
        Ok(())
    }
}

/// PGN-style result line for a finished game.
pub fn result_line(game: &Game) -> Option<String> {
    let score = |winner: Option<Color>| match winner {
        Some(Color::White) => "1-0",
        Some(Color::Black) => "0-1",
        None => "1/2-1/2",
    };
    let winner = game.winner();
    let reason = match (game.phase(), winner) {
        (GamePhase::CheckMate, Some(Color::White)) => "White mates".to_owned(),
        (GamePhase::CheckMate, Some(Color::Black)) => "Black mates".to_owned(),
        (GamePhase::StaleMate, _) => "Stalemate".to_owned(),
        (GamePhase::TimeOut, Some(color)) => format!("{} loses on time", title(color.opposite())),
        (GamePhase::KingCapture, Some(color)) => format!("{} captures the king", title(color)),
        _ => return None,
    };
    Some(format!("{} {{{reason}}}", score(winner)))
}

fn title(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_options::RuleMode;

    /// Plays a fixed script of moves for the engine side.
    struct ScriptedSource {
        moves: Vec<&'static str>,
    }

    impl MoveSource for ScriptedSource {
        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_move(&mut self, _game: &Game) -> Option<CoordinateMove> {
            if self.moves.is_empty() {
                return None;
            }
            parse_coordinate_move(self.moves.remove(0)).ok()
        }
    }

    fn run<S: MoveSource>(session: &mut XboardSession<S>, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            session
                .handle_command(line, &mut out)
                .expect("writing to a Vec cannot fail");
        }
        String::from_utf8(out).expect("output is UTF-8")
    }

    #[test]
    fn handshake_and_unknown_commands() {
        let mut session = XboardSession::new(RandomMoveSource::seeded(1));
        let output = run(&mut session, &["xboard", "protover 2", "ping 7", "frobnicate"]);
        assert!(output.contains("feature myname=\"plum_rules\""));
        assert!(output.contains("done=1"));
        assert!(output.contains("pong 7"));
        assert!(output.contains("Error (unknown command): frobnicate"));

        let mut out = Vec::new();
        assert!(session.handle_command("quit", &mut out).expect("quit"));
    }

    #[test]
    fn engine_replies_to_user_moves() {
        let mut session = XboardSession::new(RandomMoveSource::seeded(3));
        let output = run(&mut session, &["new", "usermove e2e4"]);
        let reply = output
            .lines()
            .find_map(parse_engine_reply)
            .expect("engine should answer")
            .expect("reply should parse");
        assert_eq!(session.game().history().len(), 2);
        assert_eq!(session.game().last_move().map(|m| m.long_algebraic()), Some(reply.to_string()));
    }

    #[test]
    fn illegal_user_moves_are_reported() {
        let mut session = XboardSession::new(RandomMoveSource::seeded(3));
        let output = run(&mut session, &["new", "usermove e2e5", "usermove e9e4"]);
        assert!(output.contains("Illegal move (destination e5 is not a legal move): e2e5"));
        assert!(output.contains("Illegal move (invalid coordinate move: e9e4): e9e4"));
        assert!(session.game().history().is_empty());
    }

    #[test]
    fn force_mode_plays_both_sides_and_reports_mate() {
        let mut session = XboardSession::new(RandomMoveSource::seeded(3));
        let output = run(
            &mut session,
            &[
                "new",
                "force",
                "usermove f2f3",
                "usermove e7e5",
                "usermove g2g4",
                "usermove d8h4",
            ],
        );
        assert!(!output.contains("move "));
        assert!(output.contains("0-1 {Black mates}"));
        assert!(session.game().check_mate());
    }

    #[test]
    fn go_hands_the_side_to_move_to_the_source() {
        let mut session = XboardSession::new(ScriptedSource {
            moves: vec!["e2e4", "e7e5"],
        });
        let output = run(&mut session, &["new", "force", "go"]);
        assert_eq!(session.engine_color(), Some(Color::White));
        assert!(output.contains("move e2e4"));
    }

    #[test]
    fn options_apply_to_the_next_game() {
        let mut session = XboardSession::new(RandomMoveSource::seeded(5));
        let output = run(
            &mut session,
            &["option rules=relaxed", "option clock_minutes=3", "option rules=chaos", "new"],
        );
        assert!(output.contains("Error (invalid option rules=chaos): option"));
        assert_eq!(session.options().rule_mode, RuleMode::Relaxed);
        assert!(session.game().options().is_relaxed());
        assert_eq!(session.game().remaining_ms(Color::White), 180_000);
    }

    #[test]
    fn debug_mode_emits_comment_lines() {
        let mut session = XboardSession::new(ScriptedSource { moves: vec![] });
        let output = run(&mut session, &["debug on", "new", "usermove d2d4"]);
        assert!(output.contains("# new game, standard rules"));
        assert!(output.contains("# white played d2d4"));
        assert!(output.contains("# scripted has no move"));
    }

    #[test]
    fn engine_reply_parsing() {
        assert_eq!(parse_engine_reply("feature done=1"), None);
        let mv = parse_engine_reply("move e7e8q")
            .expect("move line")
            .expect("valid move");
        assert_eq!(mv.to_string(), "e7e8q");
        assert!(matches!(parse_engine_reply("move"), Some(Err(_))));
    }
}
