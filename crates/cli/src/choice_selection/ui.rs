use std::collections::VecDeque;
use std::io::{self, stdout, Write};

use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event};
use crossterm::style::Print;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{queue, ExecutableCommand};
use itertools::Itertools;
use log::debug;
use unicode_width::UnicodeWidthStr;

use super::types::{ChoiceSelector, Selection};
use super::{DELIMITER, HELP_TEXT};
use choice_prompt_core::error::{Error, Result};

/// Supplies terminal events to the run loop, one at a time.
pub trait EventSource {
    /// Blocks until the next event is available.
    ///
    /// # Errors
    ///
    /// Returns an error when no further input can be read.
    fn next_event(&mut self) -> Result<Event>;
}

/// Receives each rendered frame of the prompt.
pub trait FrameSink {
    /// Replaces whatever frame was drawn before with `frame`.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be written.
    fn draw(&mut self, frame: &str) -> Result<()>;
}

/// Reads events from the real terminal.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

/// A scripted event stream. Running out of events reads as a detached input.
impl EventSource for VecDeque<Event> {
    fn next_event(&mut self) -> Result<Event> {
        self.pop_front().ok_or_else(|| {
            Error::Terminal(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no more input events",
            ))
        })
    }
}

/// Records every frame, for inspecting what a run drew.
impl FrameSink for Vec<String> {
    fn draw(&mut self, frame: &str) -> Result<()> {
        self.push(frame.to_string());
        Ok(())
    }
}

/// Draws frames in place below the current output.
///
/// Each draw moves back up over the rows of the previous frame and clears to
/// the end of the screen before printing, so drawing an empty frame erases
/// the prompt. Lines are ended with `\r\n` because raw mode disables the
/// implicit carriage return.
///
/// With a known terminal width, lines wider than the terminal are counted by
/// the rows they wrap onto.
pub struct InlineTerminal<W: Write> {
    out: W,
    width: Option<u16>,
    previous_rows: u16,
}

impl<W: Write> InlineTerminal<W> {
    /// A sink that assumes every line fits on one row.
    pub fn new(out: W) -> Self {
        Self {
            out,
            width: None,
            previous_rows: 0,
        }
    }

    /// A sink for a terminal `width` columns wide.
    pub fn with_width(out: W, width: u16) -> Self {
        Self {
            out,
            width: Some(width),
            previous_rows: 0,
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn rows_for(&self, line: &str) -> u16 {
        let Some(width) = self.width.filter(|&width| width > 0) else {
            return 1;
        };

        let visible = strip_ansi_codes(line).width();
        let rows = visible.div_ceil(usize::from(width)).max(1);
        u16::try_from(rows).unwrap_or(u16::MAX)
    }
}

impl<W: Write> FrameSink for InlineTerminal<W> {
    fn draw(&mut self, frame: &str) -> Result<()> {
        if self.previous_rows > 0 {
            queue!(self.out, MoveUp(self.previous_rows))?;
        }
        queue!(self.out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;

        let mut rows: u16 = 0;
        for line in frame.split_inclusive('\n') {
            match line.strip_suffix('\n') {
                Some(content) => {
                    queue!(self.out, Print(content), Print("\r\n"))?;
                    rows = rows.saturating_add(self.rows_for(content));
                }
                None => {
                    // The cursor stays on the last row of an unterminated line
                    queue!(self.out, Print(line))?;
                    rows = rows.saturating_add(self.rows_for(line) - 1);
                }
            }
        }

        self.previous_rows = rows;
        self.out.flush()?;
        Ok(())
    }
}

/// Removes CSI escape sequences, leaving the text that takes up columns.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final letter
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        result.push(c);
    }

    result
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Restore the terminal however the run ended
        let _ = disable_raw_mode();
        let _ = stdout().execute(Show);
    }
}

impl<T> ChoiceSelector<T> {
    /// Renders the current frame.
    ///
    /// A pending prompt is drawn as the optional prompt text, the labels on
    /// one line separated by [`DELIMITER`] with the cursor's label
    /// highlighted, then the help line. A resolved prompt renders as an
    /// empty frame.
    pub fn render(&self) -> String {
        if self.is_resolved() {
            return String::new();
        }

        let mut frame = String::new();

        if !self.prompt.is_empty() {
            frame.push_str(&self.style.prompt.apply(self.prompt.as_str()).to_string());
            frame.push(' ');
        }

        let labels = self
            .choices
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                let style = if i == self.cursor {
                    self.style.highlight
                } else {
                    self.style.normal
                };
                style.apply(choice.label.as_str())
            })
            .join(DELIMITER);

        frame.push_str(&labels);
        frame.push('\n');
        frame.push_str(&self.style.help.apply(HELP_TEXT).to_string());
        frame.push('\n');

        frame
    }

    /// Runs the prompt on the terminal until the user confirms or cancels.
    ///
    /// Raw mode is enabled for the duration of the run and restored on
    /// every exit path. The prompt is erased from the screen once resolved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Terminal`] if reading input or drawing fails.
    pub fn run(self) -> Result<Selection<T>> {
        enable_raw_mode()?;
        let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode is disabled

        let (width, _) = terminal::size()?;
        let mut terminal = InlineTerminal::with_width(stdout(), width);
        terminal.out.execute(Hide)?;

        self.run_with(&mut TerminalEvents, &mut terminal)
    }

    /// Runs the render/read/apply loop against the given input and output.
    ///
    /// The final, empty frame is drawn before returning.
    ///
    /// # Errors
    ///
    /// Returns the first error from `events` or `frames`.
    pub fn run_with<E, F>(mut self, events: &mut E, frames: &mut F) -> Result<Selection<T>>
    where
        E: EventSource + ?Sized,
        F: FrameSink + ?Sized,
    {
        loop {
            frames.draw(&self.render())?;

            if self.is_resolved() {
                break;
            }

            let event = events.next_event()?;
            self.handle_event(&event);
        }

        debug!("Prompt resolved: {:?}", self.resolution);
        Ok(self.into_selection())
    }
}
