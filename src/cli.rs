use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

/// Raw-markup flag token, matched case-insensitively anywhere in the
/// trailing arguments.
const RAW_FLAG: &str = "-html";

/// Extract EPUB chapter text for reading or translation workflows
#[derive(Parser, Debug)]
#[command(name = "chapterclip", version, about, after_help = "\
Examples:
  chapterclip book.epub            List filtered chapters
  chapterclip book.epub 3          Print chapter 3 as plain text, copy to clipboard
  chapterclip book.epub -html 3    Print chapter 3 as raw HTML, copy to clipboard")]
pub struct Cli {
    /// Path to the EPUB file. On its own, lists the filtered chapter titles.
    pub input: Option<PathBuf>,

    /// A 1-based chapter number, optionally with the `-html` token (any
    /// order, any case) to emit raw markup instead of stripped text
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub selection: Vec<String>,
}

/// What to do once the book is loaded.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    List,
    Extract { index: usize, raw_html: bool },
}

impl Mode {
    /// Interpret the trailing arguments: an empty list selects list mode;
    /// otherwise any token may be the raw-markup flag and the first
    /// remaining token must be a positive chapter number.
    pub fn from_selection(selection: &[String]) -> Result<Self> {
        if selection.is_empty() {
            return Ok(Mode::List);
        }

        let raw_html = selection.iter().any(|arg| arg.eq_ignore_ascii_case(RAW_FLAG));
        let index = selection
            .iter()
            .find(|arg| !arg.eq_ignore_ascii_case(RAW_FLAG))
            .and_then(|arg| arg.parse::<usize>().ok())
            .filter(|&n| n >= 1);

        match index {
            Some(index) => Ok(Mode::Extract { index, raw_html }),
            None => bail!("Invalid chapter number."),
        }
    }
}
