//! # Integration Tests
//!
//! End-to-end scenarios for the sink connector task:
//! - batch dispatch through router and transport
//! - failure reporting (error log + errant-record reporter)
//! - lifecycle edge cases (failed start, idempotent stop)

#[cfg(test)]
mod config_tests {
    use config_loader::{ConfigFormat, ConfigLoader};

    /// A file-loaded configuration produces the same settings the host's
    /// flat properties map would.
    #[test]
    fn test_settings_loaded_from_toml() {
        let content = r#"
"connector.user_id" = "it-user"
"connector.publish_key" = "pub-k"
"connector.subscribe_key" = "sub-k"
"connector.secret_key" = "sec-k"
"connector.router" = "key"
"mock.fail_channels" = "alerts"
"#;
        let settings = ConfigLoader::load_from_str(content, ConfigFormat::Toml).unwrap();
        assert_eq!(settings.user_id, "it-user");
        assert_eq!(settings.router.as_deref(), Some("key"));
        assert_eq!(settings.params.get("mock.fail_channels").unwrap(), "alerts");
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use connector::SinkTask;
    use contracts::{ConnectorError, ErrantRecordReporter, SinkRecord};
    use serde_json::json;
    use tokio::time::sleep;
    use transport::InMemoryTransport;

    /// Reporter capturing every reported record for assertions
    #[derive(Default)]
    struct CapturingReporter {
        reports: Mutex<Vec<(String, i64, String)>>,
    }

    impl CapturingReporter {
        fn reports(&self) -> Vec<(String, i64, String)> {
            self.reports.lock().unwrap().clone()
        }
    }

    impl ErrantRecordReporter for CapturingReporter {
        fn report(&self, record: &SinkRecord, cause: &ConnectorError) {
            self.reports.lock().unwrap().push((
                record.topic.clone(),
                record.offset,
                cause.to_string(),
            ));
        }
    }

    fn properties() -> HashMap<String, String> {
        HashMap::from([
            ("connector.user_id".to_string(), "it-user".to_string()),
            ("connector.publish_key".to_string(), "pub-k".to_string()),
            ("connector.subscribe_key".to_string(), "sub-k".to_string()),
            ("connector.secret_key".to_string(), "sec-k".to_string()),
        ])
    }

    /// Batch of three records on topics a/a/b
    fn batch() -> Vec<SinkRecord> {
        vec![
            SinkRecord::new("a", 4, json!({"n": 1})),
            SinkRecord::new("a", 5, json!({"n": 2, "marker": "poison"})),
            SinkRecord::new("b", 9, json!({"n": 3})),
        ]
    }

    async fn drain(task: &SinkTask<InMemoryTransport>) {
        for _ in 0..200 {
            if task.metrics().in_flight() == 0 {
                return;
            }
            sleep(Duration::from_millis(5)).await;
        }
        panic!("publish outcomes never drained");
    }

    /// Scenario: all publishes succeed. Three successes, the error log stays
    /// empty, the reporter is never called.
    #[tokio::test]
    async fn test_all_success_batch() {
        let reporter = Arc::new(CapturingReporter::default());

        let mut task: SinkTask<InMemoryTransport> = SinkTask::new();
        task.initialize(Some(reporter.clone()));
        task.start(&properties()).await.unwrap();

        task.put(batch());
        drain(&task).await;

        let metrics = task.metrics().snapshot();
        assert_eq!(metrics.submitted, 3);
        assert_eq!(metrics.succeeded, 3);
        assert_eq!(metrics.failed, 0);

        let transport = task.transport().unwrap();
        assert_eq!(transport.published("a").len(), 2);
        assert_eq!(transport.published("b").len(), 1);

        assert!(task.errors().is_empty());
        assert!(reporter.reports().is_empty());

        task.stop().await;
    }

    /// Scenario: record (a, offset 5) fails with cause "network-timeout". The
    /// error log holds exactly that cause, the reporter fires once with the
    /// original record, and the other two records succeed independently.
    #[tokio::test]
    async fn test_single_failure_is_isolated_and_reported() {
        let reporter = Arc::new(CapturingReporter::default());

        let mut props = properties();
        props.insert(
            "mock.fail_message_contains".to_string(),
            "poison".to_string(),
        );
        props.insert("mock.fail_cause".to_string(), "network-timeout".to_string());

        let mut task: SinkTask<InMemoryTransport> = SinkTask::new();
        task.initialize(Some(reporter.clone()));
        task.start(&props).await.unwrap();

        task.put(batch());
        drain(&task).await;

        let metrics = task.metrics().snapshot();
        assert_eq!(metrics.submitted, 3);
        assert_eq!(metrics.succeeded, 2);
        assert_eq!(metrics.failed, 1);

        let causes = task.errors().causes();
        assert_eq!(causes.len(), 1);
        assert!(causes[0].contains("network-timeout"));

        let reports = reporter.reports();
        assert_eq!(reports.len(), 1);
        let (topic, offset, cause) = &reports[0];
        assert_eq!(topic, "a");
        assert_eq!(*offset, 5);
        assert!(cause.contains("network-timeout"));

        // the failure did not block the healthy records
        let transport = task.transport().unwrap();
        assert_eq!(transport.publish_count(), 2);

        task.stop().await;
    }

    /// Scenario: failures without a configured reporter still accumulate and
    /// never escalate out of the completion path.
    #[tokio::test]
    async fn test_failures_without_reporter() {
        let mut props = properties();
        props.insert("mock.fail_channels".to_string(), "a".to_string());

        let mut task: SinkTask<InMemoryTransport> = SinkTask::new();
        task.start(&props).await.unwrap();

        task.put(batch());
        drain(&task).await;

        assert_eq!(task.metrics().failed(), 2);
        assert_eq!(task.errors().total(), 2);
        assert_eq!(task.metrics().succeeded(), 1);

        task.stop().await;
    }

    /// Scenario: start with an empty secret key fails; no transport is
    /// created and subsequent `put` calls are no-ops.
    #[tokio::test]
    async fn test_start_failure_empty_secret_key() {
        let mut props = properties();
        props.insert("connector.secret_key".to_string(), String::new());

        let mut task: SinkTask<InMemoryTransport> = SinkTask::new();
        let err = task.start(&props).await.unwrap_err();
        assert!(matches!(err, ConnectorError::ConfigValidation { .. }));
        assert!(task.transport().is_none());

        task.put(batch());
        assert_eq!(task.metrics().submitted(), 0);
        assert_eq!(task.metrics().skipped(), 3);

        // stop is safe even though start never completed
        task.stop().await;
        task.stop().await;
    }

    /// Scenario: transport connection construction fails at start, once,
    /// with no retry.
    #[tokio::test]
    async fn test_start_failure_connect_rejected() {
        let mut props = properties();
        props.insert("mock.fail_connect".to_string(), "true".to_string());

        let mut task: SinkTask<InMemoryTransport> = SinkTask::new();
        let err = task.start(&props).await.unwrap_err();
        assert!(matches!(err, ConnectorError::Connect { .. }));
        assert!(task.transport().is_none());
    }

    /// Scenario: an enormous `connector.error_log_capacity` is accepted at
    /// start without allocating for it up front; failures still accumulate.
    #[tokio::test]
    async fn test_huge_error_log_capacity_starts_cleanly() {
        let mut props = properties();
        props.insert(
            "connector.error_log_capacity".to_string(),
            usize::MAX.to_string(),
        );
        props.insert("mock.fail_channels".to_string(), "a".to_string());

        let mut task: SinkTask<InMemoryTransport> = SinkTask::new();
        task.start(&props).await.unwrap();

        task.put(batch());
        drain(&task).await;

        assert_eq!(task.errors().total(), 2);
        assert_eq!(task.metrics().succeeded(), 1);

        task.stop().await;
    }

    /// Scenario: the configured router override changes the mapping; the key
    /// router publishes keyed records to their key channel.
    #[tokio::test]
    async fn test_router_override_from_config() {
        let mut props = properties();
        props.insert("connector.router".to_string(), "key".to_string());

        let mut task: SinkTask<InMemoryTransport> = SinkTask::new();
        task.start(&props).await.unwrap();
        assert_eq!(task.router().name(), "key");

        task.put(vec![
            SinkRecord::new("topic-a", 0, json!("v1")).with_key("host-1"),
            SinkRecord::new("topic-a", 1, json!("v2")),
        ]);
        drain(&task).await;

        let transport = task.transport().unwrap();
        assert_eq!(transport.published("host-1").len(), 1);
        assert_eq!(transport.published("topic-a").len(), 1);

        task.stop().await;
    }

    /// Larger batches across several `put` calls each yield exactly one
    /// outcome per record.
    #[tokio::test]
    async fn test_multiple_batches_exactly_one_outcome_per_record() {
        let mut task: SinkTask<InMemoryTransport> = SinkTask::new();
        task.start(&properties()).await.unwrap();

        for batch_no in 0..10 {
            let records: Vec<SinkRecord> = (0..20)
                .map(|i| SinkRecord::new("bulk", batch_no * 20 + i, json!({"i": i})))
                .collect();
            task.put(records);
        }
        drain(&task).await;

        let metrics = task.metrics().snapshot();
        assert_eq!(metrics.submitted, 200);
        assert_eq!(metrics.succeeded + metrics.failed, 200);
        assert_eq!(task.transport().unwrap().published("bulk").len(), 200);

        task.stop().await;
    }
}
