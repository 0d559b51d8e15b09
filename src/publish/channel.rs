//! Release channel resolution.
//!
//! How the channel is computed (tag parsing, branch mapping) is somebody
//! else's job; this module only receives the result, from the command line
//! or from the `CHANNEL` environment variable.

/// Resolve the release channel, if one was determined.
///
/// An explicit argument wins over the environment. Whitespace-only values
/// count as undetermined.
pub fn resolve_channel(arg: Option<&str>) -> Option<String> {
    let raw = match arg {
        Some(value) => value.to_string(),
        None => std::env::var("CHANNEL").unwrap_or_default(),
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
