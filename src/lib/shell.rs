//! POSIX shell quoting for printing a planned command.

use shell_escape::unix::escape;

/// Quote one token so a POSIX shell reads it back verbatim.
pub fn quote(token: &str) -> String {
    escape(token.into()).into_owned()
}

/// Join tokens into a single copy-pasteable line.
pub fn join(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|token| quote(token))
        .collect::<Vec<_>>()
        .join(" ")
}
