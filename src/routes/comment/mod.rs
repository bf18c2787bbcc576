use actix_web::{http::header, HttpResponse};

pub mod add;
pub mod delete;

pub use add::*;
pub use delete::*;

/// `303 See Other` back to the ad detail page.
fn redirect_to_ad(ad_id: i32) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/ads/{}", ad_id)))
        .finish()
}
