use std::path::{Path, PathBuf};

use lopdf::Document;
use tracing::info;

use crate::error::{Error, Result};

/// Resolve a user id to its stored resume: `<dir>/<user_id>_resume.pdf`.
pub fn resume_path(dir: &Path, user_id: &str) -> PathBuf {
    dir.join(format!("{}_resume.pdf", user_id))
}

/// Load a resume PDF and return its page texts concatenated in page-number
/// order, with nothing inserted between pages. A field that spans a page
/// boundary may not survive this flattening; the extractor downstream does
/// not correct for it.
pub fn load_resume_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::ResumeNotFound(path.to_path_buf()));
    }

    info!("Reading resume: {}", path.display());
    let doc = Document::load(path)?;

    let mut text = String::new();
    for (page_number, _) in doc.get_pages() {
        text.push_str(&doc.extract_text(&[page_number])?);
    }
    Ok(text)
}
