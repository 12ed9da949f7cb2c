use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeocodeMode {
    FreeText,
    PostalCode,
}

impl fmt::Display for GeocodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeMode::FreeText => write!(f, "free_text"),
            GeocodeMode::PostalCode => write!(f, "postal_code"),
        }
    }
}

/// A non-empty location string paired with the geocoding mode it routes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub value: String,
    pub mode: GeocodeMode,
}

impl LocationQuery {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(input: &str) -> Option<Self> {
        let value = input.trim();
        if value.is_empty() {
            return None;
        }

        let mode = if is_postal_code(value) {
            GeocodeMode::PostalCode
        } else {
            GeocodeMode::FreeText
        };

        Some(Self {
            value: value.to_string(),
            mode,
        })
    }
}

/// US ZIP code: exactly five ASCII digits.
fn is_postal_code(value: &str) -> bool {
    value.len() == 5 && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_digits_route_to_postal_code() {
        let query = LocationQuery::parse("60601").unwrap();
        assert_eq!(query.mode, GeocodeMode::PostalCode);
        assert_eq!(query.value, "60601");
    }

    #[test]
    fn test_other_inputs_route_to_free_text() {
        for input in ["6060", "606011", "60a01", "Hyde Park", "60601-1234", "６０６０１"] {
            let query = LocationQuery::parse(input).unwrap();
            assert_eq!(query.mode, GeocodeMode::FreeText, "input: {input}");
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let query = LocationQuery::parse("  60614 ").unwrap();
        assert_eq!(query.mode, GeocodeMode::PostalCode);
        assert_eq!(query.value, "60614");
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert!(LocationQuery::parse("").is_none());
        assert!(LocationQuery::parse("   \t\n").is_none());
    }
}
