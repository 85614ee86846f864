//! The terminal side of a live table: a shared console, an [`EventSink`] that renders
//! the hand as it happens, and a [`DecisionMaker`] that asks a person on stdin.
//!
//! The renderer and the human prompt both write to the same output stream, so they
//! hold it through one `Rc<RefCell<Console>>`. Write failures are kept and reported
//! after the hand, since neither trait can return an error.

use std::cell::{Cell, RefCell};
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use tablestakes_engine::decision::{Decision, DecisionMaker, DecisionRequest};
use tablestakes_engine::events::{EventSink, HandEvent};
use tablestakes_engine::player::ActionKind;

use crate::formatters::{Visibility, format_board, format_event};
use crate::io_utils::read_stdin_line;
use crate::validation::{ParseResult, parse_player_action, resolve_input};

pub type SharedConsole<'a> = Rc<RefCell<Console<'a>>>;

pub struct Console<'a> {
    out: &'a mut dyn Write,
    error: Option<io::Error>,
}

impl<'a> Console<'a> {
    pub fn shared(out: &'a mut dyn Write) -> SharedConsole<'a> {
        Rc::new(RefCell::new(Self { out, error: None }))
    }

    pub fn line(&mut self, text: &str) {
        let result = writeln!(self.out, "{}", text);
        self.record(result);
    }

    /// Writes without a newline and flushes, for prompts.
    pub fn prompt(&mut self, text: &str) {
        let result = write!(self.out, "{}", text).and_then(|_| self.out.flush());
        self.record(result);
    }

    /// The first write error since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result
            && self.error.is_none()
        {
            self.error = Some(e);
        }
    }
}

/// Prints every event through [`format_event`].
pub struct ConsoleRenderer<'a> {
    console: SharedConsole<'a>,
    visibility: Visibility,
}

impl<'a> ConsoleRenderer<'a> {
    pub fn new(console: SharedConsole<'a>, visibility: Visibility) -> Self {
        Self {
            console,
            visibility,
        }
    }
}

impl EventSink for ConsoleRenderer<'_> {
    fn emit(&mut self, event: &HandEvent) {
        if let Some(text) = format_event(event, self.visibility) {
            self.console.borrow_mut().line(&text);
        }
    }
}

/// A person at the keyboard. Re-prompts on anything the table would reject.
///
/// Typing `q` or closing stdin sets the shared quit flag; from then on the seat folds
/// every decision so the hand can finish.
pub struct HumanPolicy<'a> {
    console: SharedConsole<'a>,
    input: &'a mut dyn BufRead,
    quit: Rc<Cell<bool>>,
}

impl<'a> HumanPolicy<'a> {
    pub fn new(console: SharedConsole<'a>, input: &'a mut dyn BufRead, quit: Rc<Cell<bool>>) -> Self {
        Self {
            console,
            input,
            quit,
        }
    }

    fn quit_and_fold(&self) -> Decision {
        self.quit.set(true);
        Decision::fold()
    }
}

impl DecisionMaker for HumanPolicy<'_> {
    fn decide(&mut self, req: &DecisionRequest) -> Decision {
        if self.quit.get() {
            return Decision::fold();
        }
        loop {
            {
                let mut console = self.console.borrow_mut();
                console.line(&describe_turn(req));
                console.prompt(&format!("Enter action ({}/q): ", legal_hint(req)));
            }
            let Some(line) = read_stdin_line(&mut *self.input) else {
                return self.quit_and_fold();
            };
            let problem = match parse_player_action(&line) {
                ParseResult::Quit => return self.quit_and_fold(),
                ParseResult::Invalid(msg) => msg,
                ParseResult::Action(input) => match resolve_input(input, req) {
                    Ok(decision) => return decision,
                    Err(msg) => msg,
                },
            };
            self.console.borrow_mut().line(&format!("Error: {}", problem));
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

fn describe_turn(req: &DecisionRequest) -> String {
    format!(
        "seat {} to act: hole {} board {} pot {} to call {} stack {}",
        req.seat,
        format_board(&req.hole_cards),
        format_board(&req.board),
        req.pot,
        req.amount_to_call,
        req.stack
    )
}

fn legal_hint(req: &DecisionRequest) -> String {
    req.legal_actions
        .iter()
        .map(|&kind| match kind {
            ActionKind::Bet | ActionKind::Raise => format!(
                "{} {}-{}",
                kind,
                req.min_raise_to,
                req.all_in_total()
            ),
            _ => kind.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}
