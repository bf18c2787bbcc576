mod add;
mod delete;

pub use add::*;
pub use delete::*;
