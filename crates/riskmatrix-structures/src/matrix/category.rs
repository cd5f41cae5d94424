use crate::{MatrixResult, RiskMatrixError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A named classification bucket that coordinates map into.
///
/// Colors are opaque display strings (typically hexadecimal codes) consumed
/// by rendering layers; the core only requires them to be non-empty.
/// Categories carry no ordering among themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Short unique code, e.g. "HIG"
    pub code: String,
    /// Longer description, e.g. "High risk"
    pub description: String,
    /// Display text color
    pub foreground_color: String,
    /// Display fill color
    pub background_color: String,
}

impl Category {
    /// Create a category with validation.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if any field is empty.
    pub fn new(
        code: &str,
        description: &str,
        foreground_color: &str,
        background_color: &str,
    ) -> MatrixResult<Self> {
        let fields = [
            ("code", code),
            ("description", description),
            ("foreground_color", foreground_color),
            ("background_color", background_color),
        ];
        for (field, content) in fields {
            if content.trim().is_empty() {
                return Err(RiskMatrixError::Configuration(format!(
                    "category {} cannot be empty",
                    field
                )));
            }
        }

        Ok(Self {
            code: code.to_string(),
            description: description.to_string(),
            foreground_color: foreground_color.to_string(),
            background_color: background_color.to_string(),
        })
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category({})", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let category = Category::new("HIG", "High risk", "#ffffff", "#ff0000").unwrap();
        assert_eq!(category.code, "HIG");
        assert_eq!(category.description, "High risk");
        assert_eq!(format!("{}", category), "Category(HIG)");
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(Category::new("", "High risk", "#ffffff", "#ff0000").is_err());
        assert!(Category::new("HIG", "", "#ffffff", "#ff0000").is_err());
        assert!(Category::new("HIG", "High risk", " ", "#ff0000").is_err());
        assert!(Category::new("HIG", "High risk", "#ffffff", "").is_err());
    }
}
