pub mod document;
pub mod query_match;
pub mod vector_record;
