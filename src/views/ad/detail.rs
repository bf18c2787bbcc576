use crate::models;
use crate::views;
use serde::Serialize;

/// An ad together with its comments, newest first.
#[derive(Debug, Serialize, Default)]
pub struct Detail {
    #[serde(flatten)]
    pub ad: views::ad::Listing,
    pub comments: Vec<views::comment::Comment>,
}

impl From<(models::Ad, Vec<models::Comment>)> for Detail {
    fn from((ad, comments): (models::Ad, Vec<models::Comment>)) -> Self {
        Self {
            ad: ad.into(),
            comments: comments.into_iter().map(Into::into).collect(),
        }
    }
}
