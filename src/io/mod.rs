pub mod artifact;
pub mod source;

pub use artifact::{artifact_bytes, save_artifact};
pub use source::WorkbookSource;
