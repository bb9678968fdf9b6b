pub mod data_file;
pub mod embeddings;
pub mod index;
pub mod memory;
pub mod sqlite;
