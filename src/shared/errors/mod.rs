mod collection_error;

pub use collection_error::CollectionError;
