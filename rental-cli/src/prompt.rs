use rental_booking::Confirmation;
use std::cell::RefCell;
use std::io::{BufRead, Write};

/// Asks on `output` and reads a yes/no line from `input`.
pub struct LinePrompt<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }
}

impl<R: BufRead, W: Write> Confirmation for LinePrompt<R, W> {
    fn confirm(&self, question: &str) -> bool {
        let mut output = self.output.borrow_mut();
        if write!(output, "{} [y/N] ", question).and_then(|_| output.flush()).is_err() {
            return false;
        }

        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(_) => is_yes(&line),
            Err(_) => false,
        }
    }
}

/// Accepts `y`, `yes` and `ya`, case-insensitively.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes" | "ya")
}

/// Confirms without asking, for `--yes`.
pub struct AssumeYes;

impl Confirmation for AssumeYes {
    fn confirm(&self, _question: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_answer() {
        let prompt = LinePrompt::new(Cursor::new("ya\n"), Vec::new());
        assert!(prompt.confirm("Hapus?"));
        assert_eq!(prompt.output.into_inner(), b"Hapus? [y/N] ".to_vec());
    }

    #[test]
    fn test_prompt_defaults_to_no() {
        let prompt = LinePrompt::new(Cursor::new("\n"), Vec::new());
        assert!(!prompt.confirm("Hapus?"));

        // closed input
        let prompt = LinePrompt::new(Cursor::new(""), Vec::new());
        assert!(!prompt.confirm("Hapus?"));
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes(" Y "));
        assert!(is_yes("YES"));
        assert!(!is_yes("tidak"));
    }
}
