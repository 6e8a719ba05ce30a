//! Learning-map topic catalog

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::ConfigError;
use crate::ids::TopicId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
}

impl Topic {
    pub fn new(id: TopicId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Read-only topic lookup, iterated in id order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicCatalog {
    topics: BTreeMap<TopicId, Topic>,
}

impl TopicCatalog {
    pub fn new(topics: Vec<Topic>) -> Result<Self, ConfigError> {
        let mut map = BTreeMap::new();
        for topic in topics {
            let id = topic.id;
            if map.insert(id, topic).is_some() {
                return Err(ConfigError::DuplicateTopic { id });
            }
        }
        Ok(Self { topics: map })
    }

    pub fn get(&self, id: TopicId) -> Option<&Topic> {
        self.topics.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.topics.values()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tid(n: u16) -> TopicId {
        TopicId::new(n).unwrap()
    }

    #[test]
    fn test_lookup_and_order() {
        let catalog = TopicCatalog::new(vec![
            Topic::new(tid(2), "Stocks"),
            Topic::new(tid(1), "Markets"),
        ])
        .unwrap();
        assert_eq!(catalog.get(tid(1)).unwrap().title, "Markets");
        assert!(catalog.get(tid(3)).is_none());
        let ids: Vec<u16> = catalog.iter().map(|t| t.id.value()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = TopicCatalog::new(vec![
            Topic::new(tid(1), "a"),
            Topic::new(tid(1), "b"),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateTopic { id: tid(1) });
    }
}
