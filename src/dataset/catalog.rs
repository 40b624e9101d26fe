use std::collections::{BTreeSet, HashMap};

use super::Interaction;

/// Bidirectional service-name / service-id mapping
///
/// The scoring engine ranks items by id; panels show names. Ids are assigned
/// by enumerating the sorted unique service names, so a given dataset always
/// produces the same mapping.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    name_to_id: HashMap<String, String>,
    id_to_name: HashMap<String, String>,
}

impl ServiceCatalog {
    /// Derives the catalog from the interaction dataset
    pub fn from_interactions(interactions: &[Interaction]) -> Self {
        let names: BTreeSet<&str> = interactions.iter().map(|i| i.service.as_str()).collect();

        let mut name_to_id = HashMap::new();
        let mut id_to_name = HashMap::new();
        for (idx, name) in names.into_iter().enumerate() {
            let id = idx.to_string();
            name_to_id.insert(name.to_string(), id.clone());
            id_to_name.insert(id, name.to_string());
        }

        Self {
            name_to_id,
            id_to_name,
        }
    }

    pub fn id_for(&self, name: &str) -> Option<&str> {
        self.name_to_id.get(name).map(String::as_str)
    }

    pub fn name_for(&self, id: &str) -> Option<&str> {
        self.id_to_name.get(id).map(String::as_str)
    }

    /// Name to show for an item id, with the fallback used when the engine
    /// returns an id the catalog has never seen
    pub fn display_name(&self, id: &str) -> String {
        match self.name_for(id) {
            Some(name) => name.to_string(),
            None => format!("Unknown Service ({})", id),
        }
    }

    pub fn len(&self) -> usize {
        self.id_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_name.is_empty()
    }
}
