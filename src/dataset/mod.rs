use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{HistoryEntry, UserId},
};

pub mod catalog;
pub mod export;

pub use catalog::ServiceCatalog;

/// One row of the interaction dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: UserId,
    pub service: String,
    pub interaction_type: String,
    pub rating: f64,
}

/// In-memory interaction dataset
///
/// Loaded once at startup. Row order is authoritative: a user's history is
/// served in exactly the order the rows appear in the file.
#[derive(Debug, Clone)]
pub struct Dataset {
    interactions: Vec<Interaction>,
}

impl Dataset {
    /// Loads the dataset from a JSON file of interaction rows
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Dataset(format!("cannot read {}: {}", path.display(), e))
        })?;
        let interactions: Vec<Interaction> = serde_json::from_str(&raw)?;
        if interactions.is_empty() {
            return Err(AppError::Dataset(format!(
                "{} contains no interactions",
                path.display()
            )));
        }
        Ok(Self { interactions })
    }

    pub fn from_interactions(interactions: Vec<Interaction>) -> Self {
        Self { interactions }
    }

    /// All known user identifiers, sorted for the selector list
    ///
    /// The source data keys users by integer id, so numeric identifiers sort
    /// numerically; anything non-numeric falls back to string order.
    pub fn users(&self) -> Vec<UserId> {
        let unique: BTreeSet<&UserId> = self.interactions.iter().map(|i| &i.user_id).collect();
        let mut users: Vec<UserId> = unique.into_iter().cloned().collect();
        users.sort_by(selector_order);
        users
    }

    /// The user's past interactions, in dataset order
    ///
    /// Unknown users get an empty history, never an error.
    pub fn history_for(&self, user: &UserId) -> Vec<HistoryEntry> {
        self.interactions
            .iter()
            .filter(|i| &i.user_id == user)
            .map(|i| HistoryEntry {
                service: i.service.clone(),
                interaction_type: i.interaction_type.clone(),
                rating: i.rating,
            })
            .collect()
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }
}

fn selector_order(a: &UserId, b: &UserId) -> Ordering {
    match (a.as_str().parse::<u64>(), b.as_str().parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

#[cfg(test)]
pub(crate) fn sample_interactions() -> Vec<Interaction> {
    vec![
        Interaction {
            user_id: UserId::new("2"),
            service: "S3".to_string(),
            interaction_type: "view".to_string(),
            rating: 4.0,
        },
        Interaction {
            user_id: UserId::new("10"),
            service: "EC2".to_string(),
            interaction_type: "deploy".to_string(),
            rating: 5.0,
        },
        Interaction {
            user_id: UserId::new("2"),
            service: "Lambda".to_string(),
            interaction_type: "invoke".to_string(),
            rating: 3.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_sorted_numerically() {
        let dataset = Dataset::from_interactions(sample_interactions());
        assert_eq!(dataset.users(), vec![UserId::new("2"), UserId::new("10")]);
    }

    #[test]
    fn test_history_preserves_dataset_order() {
        let dataset = Dataset::from_interactions(sample_interactions());
        let history = dataset.history_for(&UserId::new("2"));

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].service, "S3");
        assert_eq!(history[0].interaction_type, "view");
        assert_eq!(history[0].rating, 4.0);
        assert_eq!(history[1].service, "Lambda");
    }

    #[test]
    fn test_unknown_user_has_empty_history() {
        let dataset = Dataset::from_interactions(sample_interactions());
        assert!(dataset.history_for(&UserId::new("404")).is_empty());
    }

    #[test]
    fn test_load_rejects_empty_dataset() {
        let dir = std::env::temp_dir();
        let path = dir.join("service-advisor-empty-dataset.json");
        fs::write(&path, "[]").unwrap();

        let result = Dataset::load(&path);
        assert!(matches!(result, Err(AppError::Dataset(_))));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_round_trips_rows() {
        let dir = std::env::temp_dir();
        let path = dir.join("service-advisor-dataset.json");
        fs::write(
            &path,
            serde_json::to_string(&sample_interactions()).unwrap(),
        )
        .unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.interactions()[1].service, "EC2");

        fs::remove_file(&path).ok();
    }
}
