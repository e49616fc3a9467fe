//! Properties validation
//!
//! Validation rules:
//! - `connector.user_id`, `connector.publish_key`, `connector.subscribe_key`,
//!   `connector.secret_key` are required and non-empty
//! - `connector.error_log_capacity`, when present, parses as usize > 0
//! - unrecognized keys are legal and passed through in `params`

use std::collections::HashMap;

use contracts::{ConnectorError, ConnectorSettings, Secret};

/// Recognized property keys
pub mod keys {
    pub const USER_ID: &str = "connector.user_id";
    pub const PUBLISH_KEY: &str = "connector.publish_key";
    pub const SUBSCRIBE_KEY: &str = "connector.subscribe_key";
    pub const SECRET_KEY: &str = "connector.secret_key";
    pub const ROUTER: &str = "connector.router";
    pub const ERROR_LOG_CAPACITY: &str = "connector.error_log_capacity";
}

/// Default capacity of the recent-errors ring
pub const DEFAULT_ERROR_LOG_CAPACITY: usize = 256;

const RECOGNIZED: [&str; 6] = [
    keys::USER_ID,
    keys::PUBLISH_KEY,
    keys::SUBSCRIBE_KEY,
    keys::SECRET_KEY,
    keys::ROUTER,
    keys::ERROR_LOG_CAPACITY,
];

/// Build validated settings from a flat properties map
///
/// Returns the first validation error encountered, or the settings.
pub fn build(properties: &HashMap<String, String>) -> Result<ConnectorSettings, ConnectorError> {
    let user_id = required(properties, keys::USER_ID)?;
    let publish_key = required(properties, keys::PUBLISH_KEY)?;
    let subscribe_key = required(properties, keys::SUBSCRIBE_KEY)?;
    let secret_key = Secret::new(required(properties, keys::SECRET_KEY)?);

    let router = properties
        .get(keys::ROUTER)
        .filter(|name| !name.is_empty())
        .cloned();

    let error_log_capacity = match properties.get(keys::ERROR_LOG_CAPACITY) {
        Some(raw) => parse_capacity(raw)?,
        None => DEFAULT_ERROR_LOG_CAPACITY,
    };

    let params = properties
        .iter()
        .filter(|(key, _)| !RECOGNIZED.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(ConnectorSettings {
        user_id,
        publish_key,
        subscribe_key,
        secret_key,
        router,
        error_log_capacity,
        params,
    })
}

fn required(properties: &HashMap<String, String>, key: &str) -> Result<String, ConnectorError> {
    match properties.get(key) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        Some(_) => Err(ConnectorError::config_validation(key, "must not be empty")),
        None => Err(ConnectorError::config_validation(key, "missing required key")),
    }
}

fn parse_capacity(raw: &str) -> Result<usize, ConnectorError> {
    let capacity: usize = raw.parse().map_err(|_| {
        ConnectorError::config_validation(
            keys::ERROR_LOG_CAPACITY,
            format!("expected a positive integer, got '{raw}'"),
        )
    })?;
    if capacity == 0 {
        return Err(ConnectorError::config_validation(
            keys::ERROR_LOG_CAPACITY,
            "must be > 0",
        ));
    }
    Ok(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_properties() -> HashMap<String, String> {
        HashMap::from([
            (keys::USER_ID.to_string(), "demo".to_string()),
            (keys::PUBLISH_KEY.to_string(), "pub-k".to_string()),
            (keys::SUBSCRIBE_KEY.to_string(), "sub-k".to_string()),
            (keys::SECRET_KEY.to_string(), "sec-k".to_string()),
        ])
    }

    #[test]
    fn test_build_minimal() {
        let settings = build(&minimal_properties()).unwrap();
        assert_eq!(settings.user_id, "demo");
        assert_eq!(settings.secret_key.expose(), "sec-k");
        assert!(settings.router.is_none());
        assert_eq!(settings.error_log_capacity, DEFAULT_ERROR_LOG_CAPACITY);
        assert!(settings.params.is_empty());
    }

    #[test]
    fn test_build_missing_required_key() {
        let mut props = minimal_properties();
        props.remove(keys::SUBSCRIBE_KEY);
        let err = build(&props).unwrap_err();
        assert!(err.to_string().contains(keys::SUBSCRIBE_KEY));
    }

    #[test]
    fn test_build_empty_secret_key() {
        let mut props = minimal_properties();
        props.insert(keys::SECRET_KEY.to_string(), String::new());
        let err = build(&props).unwrap_err();
        assert!(matches!(err, ConnectorError::ConfigValidation { .. }));
    }

    #[test]
    fn test_build_router_override() {
        let mut props = minimal_properties();
        props.insert(keys::ROUTER.to_string(), "key".to_string());
        let settings = build(&props).unwrap();
        assert_eq!(settings.router.as_deref(), Some("key"));
    }

    #[test]
    fn test_build_capacity_rejects_zero_and_garbage() {
        let mut props = minimal_properties();
        props.insert(keys::ERROR_LOG_CAPACITY.to_string(), "0".to_string());
        assert!(build(&props).is_err());

        props.insert(keys::ERROR_LOG_CAPACITY.to_string(), "many".to_string());
        assert!(build(&props).is_err());

        props.insert(keys::ERROR_LOG_CAPACITY.to_string(), "64".to_string());
        assert_eq!(build(&props).unwrap().error_log_capacity, 64);
    }

    #[test]
    fn test_build_passes_through_unrecognized_keys() {
        let mut props = minimal_properties();
        props.insert("mock.fail_channels".to_string(), "alerts".to_string());
        let settings = build(&props).unwrap();
        assert_eq!(settings.params.get("mock.fail_channels").unwrap(), "alerts");
    }
}
