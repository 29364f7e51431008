//! Console command pipeline: read an action, process it, display output.
//!
//! The pipeline keeps its three responsibilities apart: [`InputHandler`]
//! produces command text, [`CommandProcessor`] interprets it, and
//! [`OutputHandler`] renders result lines. Raw text is parsed into a typed
//! [`Action`] before dispatch; the parse failure stays inside the
//! processor, which reports it as an `Unknown action.` line.

use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ActionError;

/// The fixed command text the input handler produces.
const START_CAR: &str = "Start Car";

/// A command the pipeline understands.
///
/// # Examples
///
/// ```
/// use fleetkit::Action;
///
/// assert_eq!(Action::parse("START CAR").unwrap(), Action::StartCar);
/// assert!(Action::parse("fly").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Start the car.
    StartCar,
}

impl Action {
    /// Parses command text into an action.
    ///
    /// Matching is a case-insensitive equality check; no other
    /// normalization is applied.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownAction`] for any text that is not a
    /// known action.
    pub fn parse(input: &str) -> Result<Self, ActionError> {
        if input.eq_ignore_ascii_case(START_CAR) {
            Ok(Self::StartCar)
        } else {
            Err(ActionError::UnknownAction {
                input: input.to_string(),
            })
        }
    }

    /// Returns a human-readable action name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::StartCar => "start_car",
        }
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Produces command text for the pipeline.
///
/// The showcase sequence has no interactive input; the handler always
/// yields the fixed text `"Start Car"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates an input handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the command text to process.
    #[must_use]
    pub fn read_action(&self) -> String {
        START_CAR.to_string()
    }
}

/// Interprets command text and reports what it is doing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProcessor;

impl CommandProcessor {
    /// Creates a command processor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Processes command text, writing one status line to `out`.
    ///
    /// Recognized actions report their processing step; anything else
    /// reports `Unknown action.`.
    pub fn process(&self, input: &str, out: &mut dyn Write) -> io::Result<()> {
        match Action::parse(input) {
            Ok(Action::StartCar) => writeln!(out, "Processing car startup."),
            Err(_) => writeln!(out, "Unknown action."),
        }
    }
}

/// Renders result lines with the `Output: ` prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputHandler;

impl OutputHandler {
    /// Creates an output handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Writes `text` to `out`, prefixed with `Output: `.
    pub fn display(&self, text: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Output: {text}")
    }
}
