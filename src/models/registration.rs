//! Accepted sign-up payload.

use serde::Serialize;

/// A validated volunteer registration.
///
/// Produced only by a passing validation pass and handed to a
/// registration sink as a flat record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub phone: String,
    pub age: u32,
    pub availability: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_flat_record() {
        let registration = Registration {
            name: "Maria Silva".to_string(),
            phone: "11933334444".to_string(),
            age: 34,
            availability: "weekends".to_string(),
        };
        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Maria Silva",
                "phone": "11933334444",
                "age": 34,
                "availability": "weekends",
            })
        );
    }
}
