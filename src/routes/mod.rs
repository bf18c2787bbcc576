pub(crate) mod ad;
pub(crate) mod comment;
pub(crate) mod fav;
pub mod health_checks;

pub use health_checks::*;
