/// Arrow schema of the proposition export table.
pub mod propositions {
    use arrow::datatypes::{DataType, Field, Schema};

    /// Column order of every export; one per field of
    /// [`PropositionMatch`](crate::PropositionMatch).
    pub const COLUMNS: [&str; 6] = [
        "doc_id",
        "title",
        "url",
        "proposition",
        "citation",
        "pattern_matched",
    ];

    /// One non-null Utf8 column per entry of [`COLUMNS`].
    pub fn schema() -> Schema {
        Schema::new(
            COLUMNS
                .iter()
                .map(|name| Field::new(*name, DataType::Utf8, false))
                .collect::<Vec<_>>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::propositions;

    #[test]
    fn proposition_schema_has_expected_fields() {
        let schema = propositions::schema();
        assert_eq!(schema.fields().len(), 6);
        assert_eq!(schema.field(0).name(), "doc_id");
        assert_eq!(schema.field(5).name(), "pattern_matched");
        assert!(schema.field_with_name("proposition").is_ok());
        assert!(schema.fields().iter().all(|f| !f.is_nullable()));
    }
}
