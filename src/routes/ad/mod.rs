pub mod add;
pub mod delete;
pub mod get;
pub mod picture;
pub mod update;
