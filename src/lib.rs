//! Generate text (forms, model classes, ...) from a `CREATE TABLE` statement
//! and a user-editable Jinja template.
//!
//! The SQL runs against a throwaway in-memory SQLite database, the table is
//! described with `PRAGMA table_info`, and the result is handed to the
//! template as `table`, `columns` and `columns_no_pk`, together with a
//! `map_type` function that buckets declared types into number/date/text.

pub mod libs;

pub use libs::*;
