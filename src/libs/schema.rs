// schema.rs
use serde::Serialize;

/// One row of `PRAGMA table_info`, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub declared_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    pub is_primary_key: bool,
    pub ordinal: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableMetadata {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl TableMetadata {
    /// Columns that are not part of the primary key, order preserved.
    pub fn without_primary_key(&self) -> Vec<&ColumnDescriptor> {
        self.columns.iter().filter(|c| !c.is_primary_key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, ordinal: i64, pk: bool) -> ColumnDescriptor {
        ColumnDescriptor {
            name: name.into(),
            declared_type: "TEXT".into(),
            not_null: false,
            default_value: None,
            is_primary_key: pk,
            ordinal,
        }
    }

    #[test]
    fn without_primary_key_keeps_order() {
        let table = TableMetadata {
            name: "users".into(),
            columns: vec![column("id", 0, true), column("b", 1, false), column("a", 2, false)],
        };
        let names: Vec<_> = table.without_primary_key().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(table.columns.len(), 3);
    }
}
