pub mod ad;
pub mod comment;
pub mod user;

pub use ad::Ad;
pub use comment::Comment;
pub use user::UserForm;
