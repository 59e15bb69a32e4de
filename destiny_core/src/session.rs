//! Replay loop around collect → calculate → print.
//!
//! Two states: `Running` plays one full session and asks whether to go again;
//! `Done` prints the farewell. Only an answer of `yes` (any case) keeps the
//! loop going.

use crate::config::DisplayConfig;
use crate::prompt::{collect_inputs, Console};
use crate::{report, PredictionSession, Result};
use std::io::{BufRead, Write};

pub const WELCOME: &str = "****** Welcome to the Advanced Destiny Predictor Simulator! ******";
pub const REPLAY_PROMPT: &str = "\nDo you want to predict another destiny (yes/no)? ";
pub const FAREWELL: &str = "\nThank you for using the Destiny Predictor. Goodbye!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Done,
}

/// Drives repeated prediction sessions over one console
pub struct SessionLoop<R, W> {
    console: Console<R, W>,
    display: DisplayConfig,
    state: LoopState,
    completed: usize,
}

impl<R: BufRead, W: Write> SessionLoop<R, W> {
    pub fn new(input: R, output: W, display: DisplayConfig) -> Self {
        Self {
            console: Console::new(input, output),
            display,
            state: LoopState::Running,
            completed: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of sessions printed so far
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Run until the user declines another reading.
    ///
    /// Returns the number of completed sessions.
    pub fn run(&mut self) -> Result<usize> {
        self.console.say(WELCOME)?;

        while self.state == LoopState::Running {
            self.state = self.step()?;
        }

        self.console.say(FAREWELL)?;
        tracing::debug!(sessions = self.completed, "Session loop finished");
        Ok(self.completed)
    }

    /// One pass through the Running state
    fn step(&mut self) -> Result<LoopState> {
        let inputs = collect_inputs(&mut self.console)?;
        let session = PredictionSession::from_inputs(inputs)?;
        self.show(&session)?;
        self.completed += 1;

        let next = if self.console.ask_yes(REPLAY_PROMPT)? {
            LoopState::Running
        } else {
            LoopState::Done
        };
        tracing::debug!(?next, "Replay answer received");
        Ok(next)
    }

    fn show(&mut self, session: &PredictionSession) -> Result<()> {
        let text = report::render(session, &self.display);
        // `say` appends a newline; the rendered banner already ends with one.
        self.console.say(text.trim_end_matches('\n'))
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }
}

/// Convenience wrapper for running the loop over arbitrary streams
pub fn play<R: BufRead, W: Write>(input: R, output: W, display: &DisplayConfig) -> Result<usize> {
    SessionLoop::new(input, output, display.clone()).run()
}
