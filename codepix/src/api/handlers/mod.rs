pub mod explain;
pub mod generate;
pub mod optimize;
pub mod status;
pub mod translate;

pub use explain::explain;
pub use generate::generate;
pub use optimize::optimize;
pub use status::status;
pub use translate::translate;

use std::time::Instant;

use crate::error::{CodePixError, Result};

/// Pull a required string field out of a request body, rejecting both a
/// missing key and a present-but-blank value before anything is dispatched.
pub(crate) fn required_field<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str> {
    let Some(value) = value else {
        return Err(CodePixError::Validation(format!(
            "Missing \"{name}\" in request body"
        )));
    };

    if value.trim().is_empty() {
        return Err(CodePixError::Validation(format!(
            "\"{name}\" must be a non-empty string"
        )));
    }

    Ok(value)
}

pub(crate) fn format_elapsed(start: Instant) -> String {
    format!("{:.2} seconds", start.elapsed().as_secs_f64())
}
