//! TopicRouter - default pass-through mapping

use contracts::{ChannelAndMessage, ConnectorError, Router, SinkRecord};

/// Default router: channel = source topic, message = record value unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct TopicRouter;

impl Router for TopicRouter {
    fn name(&self) -> &str {
        "topic"
    }

    fn route(&self, record: &SinkRecord) -> Result<ChannelAndMessage, ConnectorError> {
        if record.topic.is_empty() {
            return Err(ConnectorError::route(
                &record.topic,
                record.offset,
                "record has an empty topic",
            ));
        }
        Ok(ChannelAndMessage::new(
            record.topic.clone(),
            record.value.clone(),
        ))
    }
}
