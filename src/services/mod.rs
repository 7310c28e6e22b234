pub mod blog;
pub mod gallery;
pub mod ingest;
pub mod inquiry;
pub mod media;
pub mod reconcile;
pub mod variants;
