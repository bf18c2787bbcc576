pub mod ad;
pub mod comment;
pub mod fav;
