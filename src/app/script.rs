use super::{import::*, error::{Error as E}};
use crate::token;
use crate::util::string::split_head;
use chrono::Duration;

/// The longest a single `wait` may advance the clock, one day
pub const MAX_WAIT_MS: i64 = 24 * 60 * 60 * 1000;

pub mod names {
    pub const TYPE: &'static str = "type";
    pub const PASTE: &'static str = "paste";
    pub const BACKSPACE: &'static str = "backspace";
    pub const FOCUS: &'static str = "focus";
    pub const BLUR: &'static str = "blur";
    pub const CLICK: &'static str = "click";
    pub const DELETE: &'static str = "delete";
    pub const RENAME: &'static str = "rename";
    pub const WAIT: &'static str = "wait";
    pub const RENDER: &'static str = "render";
}

/// Picks a chip by position or by its tag's name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Index(usize),
    Name(String),
}

impl Selector {
    fn parse(s: &str) -> Self {
        match s.parse::<usize>() {
            Ok(i) => Selector::Index(i),
            Err(_) => Selector::Name(s.into()),
        }
    }
}

/// A single scripted interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Type(String),
    Paste(String),
    Backspace,
    Focus,
    Blur,
    Click,
    Delete(Selector),
    Rename(String, String),
    Wait(i64),
    Render,
}

impl Command {

    /// Parse one line. Blank lines and comments yield nothing.
    pub fn parse(line: &str) -> Res<Option<Self>> {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            return Ok(None)
        }
        let (head, rest) = split_head(line);
        /*
         * NOTE: Our helper functions work on reversed inputs.
         */
        let mut args: Vec<&str> = rest.map(|r| r.split_whitespace().rev().collect()).unwrap_or_default();
        let command = match head {
            names::TYPE => { Command::Type(text(rest)?) }
            names::PASTE => { Command::Paste(text(rest)?) }
            names::BACKSPACE => { Command::Backspace }
            names::FOCUS => { Command::Focus }
            names::BLUR => { Command::Blur }
            names::CLICK => { Command::Click }
            names::DELETE => { Command::Delete(Selector::parse(one(&mut args)?)) }
            names::RENAME => { Command::Rename(one(&mut args)?.into(), one(&mut args)?.into()) }
            names::WAIT => { Command::Wait(wait(one(&mut args)?)?) }
            names::RENDER => { Command::Render }
            unknown => { return Err(E::UnknownCommand { command: unknown.into() }.into()) }
        };
        match command {
            Command::Type(_) | Command::Paste(_) => Ok(Some(command)),
            _ if args.is_empty() => Ok(Some(command)),
            _ => Err(E::ScriptError { message: "trailing arguments".into() }.into()),
        }
    }
}

use core::fmt::{Display, Formatter, Error as FmtError};
impl Display for Command {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        match self {
            Command::Type(s) => write!(f, "{} {}", names::TYPE, s),
            Command::Paste(s) => write!(f, "{} {}", names::PASTE, s),
            Command::Backspace => write!(f, "{}", names::BACKSPACE),
            Command::Focus => write!(f, "{}", names::FOCUS),
            Command::Blur => write!(f, "{}", names::BLUR),
            Command::Click => write!(f, "{}", names::CLICK),
            Command::Delete(Selector::Index(i)) => write!(f, "{} {}", names::DELETE, i),
            Command::Delete(Selector::Name(n)) => write!(f, "{} {}", names::DELETE, n),
            Command::Rename(a, b) => write!(f, "{} {} {}", names::RENAME, a, b),
            Command::Wait(ms) => write!(f, "{} {}", names::WAIT, ms),
            Command::Render => write!(f, "{}", names::RENDER),
        }
    }
}

/// The raw text argument of `type` and `paste`
fn text(rest: Option<&str>) -> Res<String> {
    match rest {
        Some(s) if !s.is_empty() => Ok(s.into()),
        _ => Err(E::ScriptError { message: "expected text".into() }.into()),
    }
}

/// Parse the milliseconds of a `wait`, time never runs backwards
fn wait(arg: &str) -> Res<i64> {
    let ms = arg.parse::<i64>()?;
    match ms {
        0..=MAX_WAIT_MS => Ok(ms),
        _ => Err(E::InvalidWait { ms }.into()),
    }
}

/// Pop an argument or complain
fn one<'a>(v: &mut Vec<&'a str>) -> Res<&'a str> {
    v.pop().ok_or(E::ScriptError {
        message: "unexpected end of input".into()
    }.into())
}

/// A parsed list of commands
#[derive(Debug, Clone, Default)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {

    pub fn parse(text: &str) -> Res<Self> {
        let mut commands = Vec::new();
        for (n, line) in text.lines().enumerate() {
            let command = Command::parse(line).map_err(|e| E::ScriptLine {
                line: n + 1,
                message: e.to_string(),
            })?;
            commands.extend(command);
        }
        Ok(Self { commands })
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

/// An editor driven by scripts against a manual clock.
/// Time only passes on `wait`.
pub struct Session<M: Measure = FontMetrics> {
    view: TagEditorView<M>,
    clock: ManualClock,
    delay: Duration,
}

impl Session<FontMetrics> {
    pub fn new(options: EditorOptions) -> Self {
        Self::with_metrics(options, FontMetrics::default())
    }
}

impl<M: Measure> Session<M> {

    /// Create a session around a freshly rendered editor
    pub fn with_metrics(options: EditorOptions, metrics: M) -> Self {
        let clock = ManualClock::new();
        let delay = options.measure_delay;
        let mut view = TagEditorView::with_parts(options, metrics, Box::new(clock.clone()));
        view.render();
        Self { view, clock, delay }
    }

    pub fn view(&self) -> &TagEditorView<M> {
        &self.view
    }

    /// Run all commands, then let pending measurements land
    pub fn run(&mut self, script: &Script) -> Res<()> {
        for command in script.commands() {
            self.step(command)?;
        }
        self.settle();
        Ok(())
    }

    pub fn step(&mut self, command: &Command) -> Res<()> {
        trace!("{}", command);
        match command {
            Command::Type(s) => self.view.type_text(s),
            Command::Paste(s) => self.view.paste(s),
            Command::Backspace => { self.view.press(Key::Backspace); },
            Command::Focus => self.view.focus(),
            Command::Blur => self.view.blur(),
            Command::Click => self.view.click(Target::Field),
            Command::Delete(selector) => {
                let index = self.resolve(selector)?;
                self.view.delete(index);
            },
            Command::Rename(from, to) => {
                if self.view.collection().find_by_name(from).is_none() {
                    return Err(E::UnknownTag { tag: from.clone() }.into())
                }
                if !token::is_token(to) {
                    return Err(E::InvalidTagName { tag: to.clone() }.into())
                }
                if !self.view.rename(from, to) {
                    return Err(E::DuplicateTag { tag: to.clone() }.into())
                }
            },
            Command::Wait(ms) => {
                if !self.clock.advance_ms(*ms) {
                    return Err(E::InvalidWait { ms: *ms }.into())
                }
                self.view.tick();
            },
            Command::Render => { self.view.render(); },
        }
        Ok(())
    }

    /// Advance past the measurement delay
    pub fn settle(&mut self) {
        if self.view.is_measure_pending() {
            self.clock.advance(self.delay);
            self.view.tick();
        }
    }

    fn resolve(&self, selector: &Selector) -> Res<usize> {
        match selector {
            Selector::Index(i) if *i < self.view.chips().len() => Ok(*i),
            Selector::Index(i) => Err(E::InvalidIndex { index: *i }.into()),
            Selector::Name(name) => self.view.collection().position(name)
                .ok_or(E::UnknownTag { tag: name.clone() }.into()),
        }
    }
}

#[cfg(test)]
pub mod suite {
    use super::*;

    fn session(tags: &[&str]) -> Session {
        Session::new(EditorOptions {
            tags: tags.iter().map(|s| s.to_string()).collect(),
            ..EditorOptions::default()
        })
    }

    fn run(tags: &[&str], script: &str) -> Vec<String> {
        let mut s = session(tags);
        s.run(&Script::parse(script).unwrap()).unwrap();
        s.view().names().into_iter().map(String::from).collect()
    }

    #[test]
    fn check_parse_type_keeps_spaces() {
        assert_eq!(Command::parse("type a b ").unwrap(), Some(Command::Type("a b ".into())));
        assert_eq!(Command::parse("type  ").unwrap(), Some(Command::Type(" ".into())));
    }

    #[test]
    fn check_parse_arguments() {
        assert_eq!(Command::parse("delete 2").unwrap(), Some(Command::Delete(Selector::Index(2))));
        assert_eq!(Command::parse("delete red").unwrap(), Some(Command::Delete(Selector::Name("red".into()))));
        assert_eq!(Command::parse("rename a b").unwrap(), Some(Command::Rename("a".into(), "b".into())));
        assert_eq!(Command::parse("wait 50").unwrap(), Some(Command::Wait(50)));
    }

    #[test]
    fn check_parse_skips_comments() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   # blur").unwrap(), None);
        let script = Script::parse("# setup\n\ntype a,\nblur\n").unwrap();
        assert_eq!(script.commands(), &[Command::Type("a,".into()), Command::Blur]);
    }

    #[test]
    fn check_display_round_trip() {
        let line = "rename a b";
        assert_eq!(Command::parse(line).unwrap().unwrap().to_string(), line);
    }

    #[test]
    #[should_panic(expected = "UnknownCommand")]
    fn check_parse_unknown() {
        Command::parse("shout").unwrap();
    }

    #[test]
    #[should_panic(expected = "ScriptError")]
    fn check_parse_trailing() {
        Command::parse("blur now").unwrap();
    }

    #[test]
    #[should_panic(expected = "ScriptError")]
    fn check_parse_missing() {
        Command::parse("rename a").unwrap();
    }

    #[test]
    #[should_panic(expected = "ScriptLine")]
    fn check_script_line_number() {
        Script::parse("type a\nwait soon\n").unwrap();
    }

    #[test]
    fn check_examples() {
        assert_eq!(run(&["red", "blue"], "type green,green,"), vec!["red", "blue", "green"]);
        assert_eq!(run(&[], "type a b\nblur"), vec!["a", "b"]);
        assert_eq!(run(&["x", "y", "z"], "click\nbackspace"), vec!["x", "y"]);
    }

    #[test]
    fn check_delete_and_rename() {
        assert_eq!(run(&["x", "y", "z"], "delete y\ndelete 0\nrename z w"), vec!["w"]);
    }

    #[test]
    #[should_panic(expected = "UnknownTag")]
    fn check_delete_unknown() {
        session(&["x"]).step(&Command::Delete(Selector::Name("y".into()))).unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidIndex")]
    fn check_delete_out_of_range() {
        session(&["x"]).step(&Command::Delete(Selector::Index(1))).unwrap();
    }

    #[test]
    #[should_panic(expected = "DuplicateTag")]
    fn check_rename_to_existing() {
        let mut s = session(&["a", "b"]);
        let result = s.step(&Command::Rename("a".into(), "b".into()));
        assert_eq!(s.view().names(), vec!["a", "b"]);
        result.unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidTagName")]
    fn check_rename_to_several() {
        let mut s = session(&["a"]);
        let result = s.step(&Command::Rename("a".into(), "b,c".into()));
        assert_eq!(s.view().names(), vec!["a"]);
        result.unwrap();
    }

    #[test]
    fn check_wait_bounds() {
        assert_eq!(Command::parse("wait 0").unwrap(), Some(Command::Wait(0)));
        assert!(Command::parse("wait -1").is_err());
        assert!(Command::parse("wait 9223372036854775807").is_err());
        assert!(Script::parse("focus\nwait 9223372036854775807").is_err());
    }

    #[test]
    #[should_panic(expected = "InvalidWait")]
    fn check_wait_past_calendar() {
        let mut s = session(&[]);
        s.step(&Command::Wait(i64::max_value())).unwrap();
    }

    #[test]
    fn check_settle_applies_width() {
        let mut s = session(&[]);
        s.run(&Script::parse("focus\ntype abc").unwrap()).unwrap();
        assert!(!s.view().is_measure_pending());
        assert!(s.view().input_width() > 0);
    }
}
