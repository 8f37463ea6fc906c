//! Rating records and mean computation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::teacher::TeacherId;

/// A single numeric feedback score tied to one teacher.
///
/// Ratings are append-only: there is no update or delete operation. Deleting
/// the owning teacher cascades to its ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Rating {
    /// Auto-incrementing identifier assigned by the store.
    pub id: i64,
    /// Owning teacher.
    pub teacher_id: TeacherId,
    /// Score; no bound is enforced server-side.
    pub rating: f64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Arithmetic mean of a rating list, `None` when the list is empty.
///
/// The empty case deliberately matches the stored `average_rating`
/// convention: a teacher with no ratings has no average, not an average of
/// zero.
///
/// # Examples
/// ```
/// use tutordesk::domain::rating::mean;
///
/// assert_eq!(mean(&[]), None);
/// assert_eq!(mean(&[4.0, 5.0, 3.0]), Some(4.0));
/// ```
#[must_use]
pub fn mean(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    #[expect(clippy::cast_precision_loss, reason = "rating counts stay small")]
    let count = scores.len() as f64;
    Some(scores.iter().sum::<f64>() / count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn mean_recomputes_after_each_append() {
        let mut scores = Vec::new();
        scores.push(4.0);
        assert_eq!(mean(&scores), Some(4.0));
        scores.push(5.0);
        assert_eq!(mean(&scores), Some(4.5));
        scores.push(3.0);
        assert_eq!(mean(&scores), Some(4.0));
    }
}
