use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Comment {
    #[validate(min_length = 3)]
    #[validate(max_length = 500)]
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_length_bounds() {
        let short = Comment { comment: "ok".to_string() };
        let fine = Comment { comment: "nice bike".to_string() };
        let long = Comment { comment: "x".repeat(501) };

        assert!(short.validate().is_err());
        assert!(fine.validate().is_ok());
        assert!(long.validate().is_err());
    }
}
