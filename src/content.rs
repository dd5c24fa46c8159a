use crate::book::{Book, ContentFile, NavEntry};
use scraper::{Html, Selector};

/// Find the reading-order file backing a navigation entry. EPUBs are
/// inconsistent about separators and casing between the toc and the spine,
/// so both sides are normalized before comparing.
pub fn resolve<'a>(book: &'a Book, entry: &NavEntry) -> Option<&'a ContentFile> {
    let link = entry.link.as_deref()?;
    let wanted = normalize_path(link);

    book.reading_order
        .iter()
        .find(|file| normalize_path(&file.path) == wanted)
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/").to_lowercase()
}

/// Inner text of the document body, tags stripped and the result trimmed.
/// A document without a body renders as the empty string.
pub fn plain_text(markup: &str) -> String {
    let document = Html::parse_document(markup);
    let body = Selector::parse("body").unwrap();

    match document.select(&body).next() {
        Some(element) => element.text().collect::<String>().trim().to_string(),
        None => String::new(),
    }
}

/// Raw markup, untouched except for trimming.
pub fn raw_markup(markup: &str) -> String {
    markup.trim().to_string()
}
