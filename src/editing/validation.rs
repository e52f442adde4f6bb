use serde::Serialize;

/// Outcome of checking submitted form data. Invalid results always
/// carry at least one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        ValidationResult { valid: true, errors: Vec::new() }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ValidationResult { valid: false, errors: vec![message.into()] }
    }

    /// Valid iff `errors` is empty.
    pub fn from_errors(errors: Vec<String>) -> Self {
        ValidationResult { valid: errors.is_empty(), errors }
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self.valid = false;
        self
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn errors_as_string(&self, separator: &str) -> String {
        self.errors.join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_validation_result() {
        assert!(ValidationResult::valid().is_valid());
        assert!(ValidationResult::from_errors(vec![]).is_valid());
        let r = ValidationResult::invalid("a").with_error("b");
        assert!(!r.is_valid());
        assert_eq!(r.errors_as_string(", "), "a, b");
        assert_eq!(ValidationResult::from_errors(vec!["x".into()]), ValidationResult::invalid("x"));
        assert_eq!(serde_json::to_string(&r).ok().as_deref(),
                   Some("{\"valid\":false,\"errors\":[\"a\",\"b\"]}"));
    }
}
