//! Line sources for the shell
//!
//! The shell reads every menu choice and field value through [`LineReader`].
//! Interactive terminals get [`ReedlineLines`] (line editing and history);
//! piped input gets [`BufReadLines`].

use reedline::{
    FileBackedHistory, Prompt, PromptEditMode, PromptHistorySearch, Reedline, Signal,
};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Maximum number of history entries kept by [`ReedlineLines`]
const HISTORY_CAPACITY: usize = 500;

/// Outcome of reading one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A line of input, without its line terminator
    Line(String),
    /// The user pressed Ctrl-C
    Interrupted,
    /// Input ended (Ctrl-D or end of stream)
    Closed,
}

/// Source of prompted input lines
pub trait LineReader {
    /// Show `prompt` and read one line
    fn read_line(&mut self, prompt: &str) -> io::Result<LineEvent>;
}

impl<T: LineReader + ?Sized> LineReader for Box<T> {
    fn read_line(&mut self, prompt: &str) -> io::Result<LineEvent> {
        (**self).read_line(prompt)
    }
}

/// Reads lines from any buffered reader, echoing prompts to a writer.
pub struct BufReadLines<R: BufRead, W: Write> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> BufReadLines<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineReader for BufReadLines<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<LineEvent> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(LineEvent::Closed);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(LineEvent::Line(line))
    }
}

/// Prompt that renders the field label verbatim
struct FieldPrompt<'a>(&'a str);

impl Prompt for FieldPrompt<'_> {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.0)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("::: ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        Cow::Owned(format!("(search: {}) ", history_search.term))
    }
}

/// Create the parent directory of `path`, logging a failure.
///
/// Returns whether the directory exists afterwards.
fn ensure_history_dir(path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return true;
    };
    match std::fs::create_dir_all(parent) {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not create history directory {}: {}", parent.display(), e);
            false
        }
    }
}

/// Interactive line editor backed by reedline
pub struct ReedlineLines {
    editor: Reedline,
}

impl ReedlineLines {
    /// Create an editor, with file-backed history when `history` is set.
    ///
    /// A history file that cannot be opened is logged and skipped.
    pub fn new(history: Option<PathBuf>) -> Self {
        let mut editor = Reedline::create();

        if let Some(path) = history {
            ensure_history_dir(&path);
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => {
                    debug!("Using history file {}", path.display());
                    editor = editor.with_history(Box::new(history));
                }
                Err(e) => warn!("Could not open history file {}: {}", path.display(), e),
            }
        }

        Self { editor }
    }
}

impl LineReader for ReedlineLines {
    fn read_line(&mut self, prompt: &str) -> io::Result<LineEvent> {
        match self.editor.read_line(&FieldPrompt(prompt))? {
            Signal::Success(line) => Ok(LineEvent::Line(line)),
            Signal::CtrlC => Ok(LineEvent::Interrupted),
            Signal::CtrlD => Ok(LineEvent::Closed),
            #[allow(unreachable_patterns)]
            _ => Ok(LineEvent::Interrupted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_buf_read_lines_strips_terminators() {
        let mut reader = BufReadLines::new(Cursor::new("first\r\nsecond\n"), io::sink());
        assert_eq!(
            reader.read_line("> ").unwrap(),
            LineEvent::Line("first".to_string())
        );
        assert_eq!(
            reader.read_line("> ").unwrap(),
            LineEvent::Line("second".to_string())
        );
        assert_eq!(reader.read_line("> ").unwrap(), LineEvent::Closed);
    }

    #[test]
    fn test_buf_read_lines_keeps_inner_whitespace() {
        let mut reader = BufReadLines::new(Cursor::new("  CSC 101 , ENG 201  \n"), io::sink());
        assert_eq!(
            reader.read_line("").unwrap(),
            LineEvent::Line("  CSC 101 , ENG 201  ".to_string())
        );
    }

    #[test]
    fn test_buf_read_lines_echoes_prompt() {
        let mut echoed = Vec::new();
        {
            let mut reader = BufReadLines::new(Cursor::new("x\n"), &mut echoed);
            reader.read_line("First Name: ").unwrap();
        }
        assert_eq!(String::from_utf8(echoed).unwrap(), "First Name: ");
    }

    #[test]
    fn test_final_line_without_newline() {
        let mut reader = BufReadLines::new(Cursor::new("6"), io::sink());
        assert_eq!(
            reader.read_line("").unwrap(),
            LineEvent::Line("6".to_string())
        );
        assert_eq!(reader.read_line("").unwrap(), LineEvent::Closed);
    }

    #[test]
    fn test_history_dir_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("history.txt");
        assert!(ensure_history_dir(&path));
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_history_dir_failure_is_reported() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        assert!(!ensure_history_dir(&blocker.join("history.txt")));
    }
}
