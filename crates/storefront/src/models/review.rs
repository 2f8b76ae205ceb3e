//! Customer review models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use urban_elephant_core::ReviewId;

/// A persisted customer review.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: ReviewId,
    pub name: String,
    pub email: String,
    /// Star rating, 1 to 5.
    pub rating: i32,
    pub comment: String,
    /// Product slug the review refers to, if any.
    pub product: Option<String>,
    /// Set manually after the purchase is confirmed; always starts false.
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Validation failures for a submitted review.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewValidationError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
}

/// A review submission, before it gets an id and timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub product: Option<String>,
}

impl NewReview {
    /// Check required fields and the rating range.
    ///
    /// # Errors
    ///
    /// Returns `MissingFields` when any required field is blank and
    /// `RatingOutOfRange` when the rating falls outside 1..=5.
    pub fn validate(&self) -> Result<(), ReviewValidationError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.comment.trim().is_empty()
            || self.rating == 0
        {
            return Err(ReviewValidationError::MissingFields);
        }
        if !(1..=5).contains(&self.rating) {
            return Err(ReviewValidationError::RatingOutOfRange);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn submission() -> NewReview {
        NewReview {
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
            rating: 5,
            comment: "Beautiful craftsmanship.".to_string(),
            product: Some("elephant-2ft-mahogany".to_string()),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(submission().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        for field in ["name", "email", "comment"] {
            let mut review = submission();
            match field {
                "name" => review.name = "  ".to_string(),
                "email" => review.email = String::new(),
                _ => review.comment = String::new(),
            }
            assert_eq!(
                review.validate(),
                Err(ReviewValidationError::MissingFields),
                "blank {field} should be rejected"
            );
        }
    }

    #[test]
    fn test_out_of_range_ratings_are_rejected() {
        for rating in [-1, 6, 100] {
            let mut review = submission();
            review.rating = rating;
            assert_eq!(
                review.validate(),
                Err(ReviewValidationError::RatingOutOfRange)
            );
        }
    }

    #[test]
    fn test_zero_rating_reads_as_missing() {
        // A zero rating is what an untouched form submits, so it is reported
        // as a missing field rather than an out-of-range value.
        let mut review = submission();
        review.rating = 0;
        assert_eq!(review.validate(), Err(ReviewValidationError::MissingFields));
    }

    #[test]
    fn test_product_is_optional() {
        let mut review = submission();
        review.product = None;
        assert!(review.validate().is_ok());
    }

    #[test]
    fn test_deserializes_with_defaults_for_missing_fields() {
        let review: NewReview = serde_json::from_str("{}").unwrap();
        assert_eq!(review.validate(), Err(ReviewValidationError::MissingFields));
    }
}
