use anyhow::{Context, Result};
use epub::doc::{EpubDoc, NavPoint};
use std::path::Path;

/// Everything the pipeline needs from an EPUB, loaded once and read-only
/// afterwards.
pub struct Book {
    pub title: Option<String>,
    /// Navigation forest as declared in the table of contents.
    pub navigation: Vec<NavEntry>,
    /// Spine content in reading order.
    pub reading_order: Vec<ContentFile>,
}

/// One table-of-contents node.
pub struct NavEntry {
    pub title: String,
    /// Container-internal path of the backing content file, fragment stripped.
    pub link: Option<String>,
    pub children: Vec<NavEntry>,
}

/// One spine entry: container-internal path plus its raw markup.
pub struct ContentFile {
    pub path: String,
    pub markup: String,
}

impl Book {
    pub fn open(path: &Path) -> Result<Self> {
        let mut doc = EpubDoc::new(path)
            .with_context(|| format!("Failed to read EPUB: {}", path.display()))?;

        let title = doc.get_title();
        let navigation: Vec<NavEntry> = doc.toc.iter().map(nav_entry).collect();

        let mut reading_order = Vec::new();
        for chapter in 0..doc.get_num_chapters() {
            doc.set_current_chapter(chapter);
            let Some(path) = doc.get_current_path() else {
                continue;
            };
            // Spine entries whose content cannot be read (e.g. broken
            // manifest hrefs) are skipped rather than failing the whole book.
            let Some((markup, _mime)) = doc.get_current_str() else {
                continue;
            };
            reading_order.push(ContentFile {
                path: path.to_string_lossy().into_owned(),
                markup,
            });
        }

        Ok(Self {
            title,
            navigation,
            reading_order,
        })
    }
}

fn nav_entry(point: &NavPoint) -> NavEntry {
    // Toc links may carry a #fragment; reading-order paths never do.
    let raw = point.content.to_string_lossy();
    let link = raw.split('#').next().unwrap_or_default().to_string();

    NavEntry {
        title: point.label.clone(),
        link: (!link.is_empty()).then_some(link),
        children: point.children.iter().map(nav_entry).collect(),
    }
}
