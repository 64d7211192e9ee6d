//! Locate raw imaging files for an acquisition session.
//!
//! A session's files live in `<imaging root>/<session_dir>`, where the root
//! comes from configuration and `session_dir` from the pipeline's directory
//! store.  [`ScanFileResolver`] joins the two and lists the files of one
//! [`ScanFormat`].

pub mod error;
pub mod format;
pub mod resolver;

pub use error::LocateError;
pub use format::{ParseScanFormatError, ScanFormat};
pub use resolver::ScanFileResolver;
