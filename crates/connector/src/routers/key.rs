//! KeyRouter - routes by record key when present

use contracts::{ChannelAndMessage, ConnectorError, Router, SinkRecord};

/// Routes to the record key as channel, falling back to the source topic for
/// keyless records. Message is the record value unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyRouter;

impl Router for KeyRouter {
    fn name(&self) -> &str {
        "key"
    }

    fn route(&self, record: &SinkRecord) -> Result<ChannelAndMessage, ConnectorError> {
        let channel = match record.key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ if !record.topic.is_empty() => record.topic.as_str(),
            _ => {
                return Err(ConnectorError::route(
                    &record.topic,
                    record.offset,
                    "record has neither key nor topic",
                ))
            }
        };
        Ok(ChannelAndMessage::new(channel, record.value.clone()))
    }
}
