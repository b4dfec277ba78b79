use std::io::{self, BufRead, Lines};

const EXIT_COMMAND: &str = "exit";

/// Lines typed at the prompt, one source text each.
/// Stops when stdin closes (CTRL+D) or when the user types `exit`.
pub struct PromptLines<T: BufRead> {
    lines: Lines<T>,
    finished: bool,
}

impl<T: BufRead> PromptLines<T> {
    pub fn new(input: T) -> PromptLines<T> {
        PromptLines {
            lines: input.lines(),
            finished: false,
        }
    }
}

impl<T: BufRead> Iterator for PromptLines<T> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.lines.next() {
            Some(Ok(line)) if line.trim() == EXIT_COMMAND => {
                self.finished = true;
                None
            }
            None => {
                self.finished = true;
                None
            }
            // read errors are handed to the caller, it decides whether to keep going
            other => other,
        }
    }
}
