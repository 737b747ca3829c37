//! Reading source files.

use oak_diagnostic::DiagnosticQueue;
use tracing::debug;

use crate::problem::file_read_error;

/// Read `path` as UTF-8 text.
///
/// On failure an `E0001` diagnostic is pushed to `queue` and `None` is
/// returned; the caller decides when to report it.
pub fn read_source(path: &str, queue: &mut DiagnosticQueue) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!(path, bytes = content.len(), "read source");
            Some(content)
        }
        Err(err) => {
            queue.push(file_read_error(path, &err));
            None
        }
    }
}
