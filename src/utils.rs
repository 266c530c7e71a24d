use chrono::{DateTime, FixedOffset};

/// Trim `s` and keep it only if something is left.
pub(crate) fn non_empty<S: AsRef<str>>(s: S) -> Option<String> {
    let s = s.as_ref().trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

pub(crate) fn get_now() -> DateTime<FixedOffset> {
    let now = chrono::offset::Local::now();
    now.with_timezone(now.offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  Remote \n"), Some("Remote".to_string()));
        assert_eq!(non_empty(" \t\n"), None);
        assert_eq!(non_empty(String::new()), None);
    }
}
