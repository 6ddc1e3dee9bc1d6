use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Error indicating the page template and the mount call disagree:
    /// the document contains no element matching the requested anchor.
    /// This is a fatal startup condition, there is nothing to recover to.
    #[error("no element matching '{0}' in the current document")]
    AnchorNotFound(String),

    #[error("'{0}' is not a valid selector")]
    InvalidSelector(String),
}
