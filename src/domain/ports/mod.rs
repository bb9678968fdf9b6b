pub mod embedding_port;
pub mod similarity_index;
pub mod vector_store;
