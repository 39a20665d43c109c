//! Helpers for handling errors.

/// Format an error, including its chain of sources.
///
/// Always use this when displaying an error to the UI, especially `anyhow::Error`.
pub fn format(error: impl AsRef<dyn std::error::Error>) -> String {
    format_ref(error.as_ref())
}

/// Format an error, including its chain of sources.
///
/// Sources are joined with `": "`, the same as anyhow's `{:#}`.
pub fn format_ref(error: &dyn std::error::Error) -> String {
    let mut string = error.to_string();
    for source in std::iter::successors(error.source(), |error| error.source()) {
        string.push_str(": ");
        string.push_str(&source.to_string());
    }
    string
}
