pub mod query_autocomplete;
