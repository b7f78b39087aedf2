//! Maps optional profile fields onto an available/unavailable state.

/// Placeholder shown for most missing fields.
pub const UNAVAILABLE_TEXT: &str = "Not Available";

/// A profile attribute after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Available(String),
    Unavailable,
}

impl Field {
    /// Back to the optional form, so the normalizer can be applied again.
    #[must_use]
    pub fn as_option(&self) -> Option<&str> {
        match self {
            Field::Available(value) => Some(value),
            Field::Unavailable => None,
        }
    }
}

/// Normalizes a raw field. `None` and `""` become [`Field::Unavailable`];
/// every other value passes through untouched, whitespace included.
#[must_use]
pub fn normalize<S: AsRef<str>>(value: Option<S>) -> Field {
    match value {
        Some(v) if !v.as_ref().is_empty() => Field::Available(v.as_ref().to_owned()),
        _ => Field::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_and_empty_are_unavailable() {
        assert_eq!(normalize(None::<&str>), Field::Unavailable);
        assert_eq!(normalize(Some("")), Field::Unavailable);
        assert_eq!(normalize(Some(String::new())), Field::Unavailable);
    }

    #[test]
    fn values_pass_through_unchanged() {
        assert_eq!(
            normalize(Some("San Francisco")),
            Field::Available("San Francisco".to_string())
        );
        assert_eq!(normalize(Some("  ")), Field::Available("  ".to_string()));
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [None, Some(""), Some(" "), Some("Acme"), Some("@acme")];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(once.as_option());
            assert_eq!(once, twice, "input {input:?}");
        }
    }
}
