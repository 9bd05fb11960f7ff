use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType defines type of event for catalog changes and notices
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Rejected,
    Info,
}

// DomainEvent abstracts one line of the catalog transcript together with the data behind it
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub message: String,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, group: &str, key: &str, message: String, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, group, key, DomainEventType::Added, message, json))
    }

    pub fn updated<T: Serialize>(name: &str, group: &str, key: &str, message: String, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, group, key, DomainEventType::Updated, message, json))
    }

    pub fn rejected<T: Serialize>(name: &str, group: &str, key: &str, message: String, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, group, key, DomainEventType::Rejected, message, json))
    }

    pub fn info(name: &str, group: &str, key: &str, message: String) -> Self {
        Self::build(name, group, key, DomainEventType::Info, message, "null".to_string())
    }

    fn build(name: &str, group: &str, key: &str, kind: DomainEventType, message: String, json: String) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            message,
            json_data: json,
            created_at: Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};

    #[test]
    fn test_should_build_added() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::added("name", "group", "key", "added".to_string(), &data).expect("build event");
        assert_eq!("name", event.name.as_str());
        assert_eq!("key", event.key.as_str());
        assert_eq!("added", event.message.as_str());
        assert_eq!(DomainEventType::Added, event.kind);
    }

    #[test]
    fn test_should_build_updated() {
        let event = DomainEvent::updated("name", "group", "key", "updated".to_string(), &12.5).expect("build event");
        assert_eq!("12.5", event.json_data.as_str());
        assert_eq!(DomainEventType::Updated, event.kind);
    }

    #[test]
    fn test_should_build_rejected() {
        let event = DomainEvent::rejected("name", "group", "key", "rejected".to_string(), &"key").expect("build event");
        assert_eq!("\"key\"", event.json_data.as_str());
        assert_eq!(DomainEventType::Rejected, event.kind);
    }

    #[test]
    fn test_should_build_info_with_unique_ids() {
        let first = DomainEvent::info("name", "group", "", "header".to_string());
        let second = DomainEvent::info("name", "group", "", "header".to_string());
        assert_eq!(DomainEventType::Info, first.kind);
        assert_ne!(first.event_id, second.event_id);
    }
}
