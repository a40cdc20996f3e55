//! Interactive capture of a journal entry.
//!
//! A reader thread turns input lines into [`InputEvent`]s on a channel. The
//! Ctrl+C handler feeds the same channel, so an interrupt ends the capture
//! the same way end-of-input does and whatever was typed so far is kept.

use std::{
    io::{self, BufRead, Write},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use log::{debug, warn};

/// One step of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A complete input line, without its line terminator.
    Line(String),
    /// Input ended: end of file or an interrupt.
    Closed,
}

/// Channel endpoints for interactive input.
#[derive(Debug)]
pub struct InputChannel {
    tx: Sender<InputEvent>,
    rx: Receiver<InputEvent>,
}

impl InputChannel {
    /// Starts a thread that forwards the lines of `reader` as events.
    ///
    /// The thread sends [`InputEvent::Closed`] at end of input or on a read
    /// error. It may outlive the capture if it is still blocked on a read
    /// when the capture ends; it stops once the receiver is gone.
    pub fn spawn<R>(reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let lines_tx = tx.clone();

        thread::spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if lines_tx.send(InputEvent::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(err) => {
                        warn!(err:%; "Failed to read input line");
                        break;
                    }
                }
            }
            let _ = lines_tx.send(InputEvent::Closed);
        });

        Self { tx, rx }
    }

    /// Returns a sender that can close the capture, e.g. from a signal
    /// handler.
    pub fn closer(&self) -> Sender<InputEvent> {
        self.tx.clone()
    }

    /// Collects lines until the input is closed.
    ///
    /// `prompt` is written to `out` before every line. Each received line is
    /// kept with a trailing newline; an input closed before any line yields
    /// an empty string.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be written.
    pub fn capture<W: Write>(self, out: &mut W, prompt: &str) -> io::Result<String> {
        let Self { tx, rx } = self;
        // Only the reader thread and external closers keep the channel open.
        drop(tx);

        let mut buffer = String::new();
        write_prompt(out, prompt)?;

        while let Ok(event) = rx.recv() {
            match event {
                InputEvent::Line(line) => {
                    buffer.push_str(&line);
                    buffer.push('\n');
                    write_prompt(out, prompt)?;
                }
                InputEvent::Closed => break,
            }
        }

        debug!(bytes = buffer.len(); "Input captured");
        Ok(buffer)
    }
}

fn write_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    out.write_all(prompt.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn capture(input: &str) -> (String, String) {
        let channel = InputChannel::spawn(Cursor::new(input.to_string()));
        let mut out = Vec::new();
        let captured = channel.capture(&mut out, "> ").expect("capture succeeds");
        (captured, String::from_utf8(out).expect("prompt is utf-8"))
    }

    #[test]
    fn test_single_line() {
        let (captured, prompts) = capture("a single line");
        assert_eq!(captured, "a single line\n");
        assert_eq!(prompts, "> > ");
    }

    #[test]
    fn test_multiple_lines() {
        let (captured, _) = capture("line1\nline2");
        assert_eq!(captured, "line1\nline2\n");
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let (captured, _) = capture("\nfoo\n\n");
        assert_eq!(captured, "\nfoo\n\n");
    }

    #[test]
    fn test_no_input() {
        let (captured, prompts) = capture("");
        assert_eq!(captured, "");
        assert_eq!(prompts, "> ");
    }

    #[test]
    fn test_closer_ends_capture_with_buffered_text() {
        let (tx, rx) = mpsc::channel();
        let channel = InputChannel { tx, rx };
        let closer = channel.closer();

        closer.send(InputEvent::Line("typed so far".to_string())).unwrap();
        closer.send(InputEvent::Closed).unwrap();
        closer.send(InputEvent::Line("never read".to_string())).unwrap();

        let mut out = Vec::new();
        let captured = channel.capture(&mut out, "").unwrap();
        assert_eq!(captured, "typed so far\n");
    }
}
