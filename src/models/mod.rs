mod blog;
mod gallery;
mod inquiry;
mod locale;
mod media;
mod user;

pub use blog::*;
pub use gallery::*;
pub use inquiry::*;
pub use locale::*;
pub use media::*;
pub use user::*;
