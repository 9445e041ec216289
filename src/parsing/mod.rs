pub mod extractor;
pub mod recovery;

pub use extractor::{extract_span, strip_code_fence};
pub use recovery::{parse_with_recovery, repair, ParseError};
