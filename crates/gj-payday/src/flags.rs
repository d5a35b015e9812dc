//! View flags read from a page query string.

/// Presentation toggles.
///
/// Both are presence-only flags: `?verbose&debug` switches both on, and any
/// value given (`debug=0`) is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewFlags {
    /// Add explanatory phrasing and the "today is …" line.
    pub verbose: bool,
    /// Append the raw statistics record as pretty JSON.
    pub debug: bool,
}

impl ViewFlags {
    /// Parse flags from a query string, with or without the leading `?`.
    /// Unknown keys are ignored; keys are case-sensitive.
    pub fn from_query(query: &str) -> Self {
        let mut flags = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let key = pair.split_once('=').map_or(pair, |(key, _)| key);
            match key {
                "verbose" => flags.verbose = true,
                "debug" => flags.debug = true,
                _ => {}
            }
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_only() {
        assert_eq!(ViewFlags::from_query(""), ViewFlags::default());
        assert_eq!(
            ViewFlags::from_query("?verbose&debug"),
            ViewFlags { verbose: true, debug: true }
        );
        assert_eq!(
            ViewFlags::from_query("debug=0&lang=id"),
            ViewFlags { verbose: false, debug: true }
        );
        assert_eq!(ViewFlags::from_query("?Verbose"), ViewFlags::default());
    }
}
