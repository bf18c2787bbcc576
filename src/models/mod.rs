mod ad;
mod comment;
mod fav;
pub mod user;

pub use ad::*;
pub use comment::*;
pub use fav::*;
pub use user::*;
