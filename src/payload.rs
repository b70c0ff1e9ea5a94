//! Builds the JSON envelope accepted by the Pyxis project endpoint.

use serde::Serialize;

/// Hard cap on the repository description, matching the remote field limit.
pub const MAX_DESCRIPTION_CHARS: usize = 32_768;

/// Request body for the PATCH: `{"container": {"repository_description": ..}}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePayload {
    pub container: ContainerPatch,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContainerPatch {
    pub repository_description: String,
}

impl UpdatePayload {
    /// Wraps the description HTML, truncated to [`MAX_DESCRIPTION_CHARS`]
    /// characters.
    pub fn new(description: &str) -> Self {
        Self {
            container: ContainerPatch {
                repository_description: truncate_chars(description, MAX_DESCRIPTION_CHARS)
                    .to_string(),
            },
        }
    }
}

// Truncation counts characters, not bytes, so a multi-byte character is
// never split.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
