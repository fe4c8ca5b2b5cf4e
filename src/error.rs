use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure values for both pipelines. A field pattern that matches nothing
/// is not a failure and never appears here; it surfaces as the per-field
/// "Not Found" sentinel instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network-level failure while acquiring a markup source.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Failure while serializing harvested records.
    #[error("table write failure: {0}")]
    Table(#[from] csv::Error),

    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),

    /// The resume identifier resolved to a path with no file behind it.
    #[error("resume not found: {}", .0.display())]
    ResumeNotFound(PathBuf),

    /// The resume file exists but its text could not be extracted.
    #[error("resume read failure: {0}")]
    ResumeRead(#[from] lopdf::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_path() {
        let err = Error::ResumeNotFound(PathBuf::from("resumes/42_resume.pdf"));
        assert_eq!(err.to_string(), "resume not found: resumes/42_resume.pdf");
    }

    #[test]
    fn variants_carry_nonempty_messages() {
        let err = Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert!(err.to_string().contains("disk full"));
    }
}
