//! Parsing of path-style entity identifiers.

use uuid::Uuid;

use crate::error::{HomeError, HomeResult};

/// Parse a UUID-formatted identifier for `entity`.
///
/// Malformed input is a validation failure, never a lookup miss.
pub fn parse_id(entity: &str, raw: &str) -> HomeResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| HomeError::validation(format!("invalid {entity} ID: {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hyphenated_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id("room", &id.to_string()).unwrap(), id);
    }

    #[test]
    fn rejects_garbage_as_validation() {
        let err = parse_id("metric", "not-a-uuid").unwrap_err();
        assert!(matches!(err, HomeError::Validation { .. }));
        assert!(err.to_string().contains("invalid metric ID"));
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        let padded = format!(" {} ", Uuid::new_v4());
        assert!(matches!(
            parse_id("room", &padded),
            Err(HomeError::Validation { .. })
        ));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            parse_id("room", ""),
            Err(HomeError::Validation { .. })
        ));
    }
}
