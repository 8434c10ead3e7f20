use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(name: String) -> Result<Self, String> {
        if name.is_empty() {
            return Err("Display name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_name() {
        assert!(DisplayName::new(String::new()).is_err());
    }

    #[test]
    fn keeps_name_verbatim() {
        let name = DisplayName::new("Dr. Doe".to_string()).unwrap();
        assert_eq!(name.as_str(), "Dr. Doe");
    }

    #[test]
    fn accepts_arbitrarily_long_names() {
        let long = "a".repeat(1000);
        let name = DisplayName::new(long.clone()).unwrap();
        assert_eq!(name.as_str(), long);
    }
}
