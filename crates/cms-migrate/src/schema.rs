//! JSON Schema generation for the staged migration file.
//!
//! Downstream tooling (review scripts, the import side of the pipeline)
//! consumes `contentful-migration.json`; the schema documents that format
//! without anyone having to read serde derives.

use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::domain::BlogRecord;

/// Schema of the staged migration file: an array of blog records.
pub fn migration_file_schema() -> RootSchema {
    schema_for!(Vec<BlogRecord>)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mentions_record_fields() {
        let schema = migration_file_schema();
        let json = serde_json::to_string(&schema).unwrap();

        assert!(json.contains("blogText"));
        assert!(json.contains("embeddedAssets"));
        assert!(json.contains("publishedDate"));
    }
}
