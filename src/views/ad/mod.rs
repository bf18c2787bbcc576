mod detail;
mod listing;

pub use detail::Detail;
pub use listing::Listing;
