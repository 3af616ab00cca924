use std::fmt;

use serde::Serialize;

/// Coarse category a template uses to pick, e.g., an HTML input type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    Number,
    Date,
    Text,
}

impl TypeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeCategory::Number => "number",
            TypeCategory::Date => "date",
            TypeCategory::Text => "text",
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collapse a SQLite declared type into a [`TypeCategory`].
///
/// Substring tests on the uppercased input, first match wins: `INT`, then
/// `REAL`/`DECIMAL`/`FLOAT`, then `DATE`. Anything else is text.
pub fn classify(declared_type: &str) -> TypeCategory {
    let t = declared_type.to_uppercase();

    if t.contains("INT") {
        return TypeCategory::Number;
    }
    if t.contains("REAL") || t.contains("DECIMAL") || t.contains("FLOAT") {
        return TypeCategory::Number;
    }
    if t.contains("DATE") {
        return TypeCategory::Date;
    }
    TypeCategory::Text
}

/// String form of [`classify`], registered as `map_type` in templates.
pub fn map_type(declared_type: &str) -> &'static str {
    classify(declared_type).as_str()
}
