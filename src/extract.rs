use crate::book::Book;
use crate::cli::{Cli, Mode};
use crate::clipboard;
use crate::content;
use crate::nav;
use anyhow::{bail, Result};
use clap::CommandFactory;

pub fn run(cli: &Cli) -> Result<()> {
    let Some(input) = &cli.input else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Checked up front so a missing file reports plainly instead of as a
    // container parse error.
    if !input.exists() {
        bail!("File '{}' does not exist.", input.display());
    }

    let book = Book::open(input)?;
    if book.navigation.is_empty() {
        bail!("No chapters or navigation found in this EPUB.");
    }

    let flat = nav::flatten(&book.navigation);
    let chapters = nav::filter_chapters(&flat);
    if chapters.is_empty() {
        println!("No chapters contain numbers in their titles.");
        return Ok(());
    }

    match Mode::from_selection(&cli.selection)? {
        Mode::List => {
            println!("Title: {}", book.title.as_deref().unwrap_or_default());
            println!("Filtered Chapters (title contains a digit):");
            for (i, chapter) in chapters.iter().enumerate() {
                println!("{}. {}", i + 1, chapter.title);
            }
        }
        Mode::Extract { index, raw_html } => {
            if index > chapters.len() {
                bail!("Invalid chapter number.");
            }

            let Some(file) = content::resolve(&book, chapters[index - 1]) else {
                bail!("Chapter content not found in EPUB.");
            };

            let output = if raw_html {
                content::raw_markup(&file.markup)
            } else {
                content::plain_text(&file.markup)
            };

            println!("{output}");
            clipboard::copy(&output);
        }
    }

    Ok(())
}
