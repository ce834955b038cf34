use crate::api::resource::Resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Custom deserializer: treats an explicit `null` the same as a missing field
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

// Storage models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Storage {
    pub object_uuid: String,
    pub name: String,
    /// Size in GB
    pub capacity: u32,
    pub change_time: DateTime<Utc>,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    pub status: String,
    #[serde(default)]
    pub location_uuid: Option<String>,
    #[serde(default)]
    pub storage_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub labels: Vec<String>,
}

impl Resource for Storage {
    const COLLECTION: &'static str = "storages";
    const ITEM_KEY: &'static str = "storage";
    type CreateRequest = StorageCreateRequest;
    type UpdateRequest = StorageUpdateRequest;
}

#[derive(Debug, Clone, Serialize)]
pub struct StorageCreateRequest {
    pub name: String,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

/// Partial update: fields left as `None` are not sent and stay untouched remotely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StorageUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl StorageUpdateRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.capacity.is_none()
    }
}

/// Returned by the API for every create call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResponse {
    pub object_uuid: String,
    #[serde(default)]
    pub request_uuid: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_deserialization() {
        let json = r#"{
            "object_uuid": "b3ec341c-1732-45b3-bc45-9a7fcebb363e",
            "name": "data",
            "capacity": 20,
            "change_time": "2020-05-04T10:11:12Z",
            "create_time": "2020-05-01T08:00:00Z",
            "status": "active",
            "location_uuid": "45ed677b-3702-4b36-be2a-a2eab9827950",
            "storage_type": "storage",
            "labels": ["db", "prod"]
        }"#;
        let storage: Storage = serde_json::from_str(json).unwrap();
        assert_eq!(storage.object_uuid, "b3ec341c-1732-45b3-bc45-9a7fcebb363e");
        assert_eq!(storage.capacity, 20);
        assert_eq!(storage.status, "active");
        assert_eq!(storage.labels, vec!["db".to_string(), "prod".to_string()]);
        assert_eq!(storage.change_time.to_rfc3339(), "2020-05-04T10:11:12+00:00");
    }

    #[test]
    fn test_storage_null_labels_and_missing_optionals() {
        let json = r#"{
            "object_uuid": "u1",
            "name": "data",
            "capacity": 10,
            "change_time": "2020-05-04T10:11:12Z",
            "status": "active",
            "labels": null
        }"#;
        let storage: Storage = serde_json::from_str(json).unwrap();
        assert!(storage.labels.is_empty());
        assert!(storage.create_time.is_none());
        assert!(storage.location_uuid.is_none());
    }

    #[test]
    fn test_update_request_only_serializes_set_fields() {
        let request = StorageUpdateRequest {
            name: Some("renamed".to_string()),
            capacity: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "renamed" }));

        let request = StorageUpdateRequest {
            name: None,
            capacity: Some(9),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "capacity": 9 }));
    }

    #[test]
    fn test_update_request_is_empty() {
        assert!(StorageUpdateRequest::default().is_empty());
        let request = StorageUpdateRequest {
            name: None,
            capacity: Some(1),
        };
        assert!(!request.is_empty());
    }

    #[test]
    fn test_create_request_omits_empty_optionals() {
        let request = StorageCreateRequest {
            name: "data".to_string(),
            capacity: 10,
            location_uuid: None,
            storage_type: None,
            labels: vec![],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "data", "capacity": 10 }));
    }
}
