pub mod blog;
pub mod gallery;
pub mod inquiry;
pub mod media;
pub mod meta;
