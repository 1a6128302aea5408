use proptest::prelude::*;
use consul_sentinel::config::{parse_config, Config, RawConfig, RawServiceConfig, WatchMode};
use consul_sentinel::handlers::AlertHandler;
use consul_sentinel_test_utils::builders::{ConfigDocBuilder, ServiceBlockBuilder};

fn watch_mode() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("local".to_string())),
        Just(Some("global".to_string())),
    ]
}

fn raw_service() -> impl Strategy<Value = RawServiceConfig> {
    ("[a-z]{1,8}", proptest::option::of(0u32..500), proptest::option::of(any::<bool>())).prop_map(
        |(name, change_threshold, distinct_tags)| RawServiceConfig {
            name,
            change_threshold,
            distinct_tags,
            ignored_tags: vec![],
        },
    )
}

fn raw_config() -> impl Strategy<Value = RawConfig> {
    (
        proptest::option::of("[a-z0-9.:]{0,16}"),
        watch_mode(),
        watch_mode(),
        proptest::option::of(0u32..1000),
        proptest::option::of(prop_oneof![Just(String::new()), Just("debug".to_string())]),
        proptest::collection::vec(raw_service(), 0..4),
    )
        .prop_map(
            |(consul_address, node_watch, service_watch, change_threshold, log_level, services)| {
                RawConfig {
                    consul_address,
                    node_watch,
                    service_watch,
                    change_threshold,
                    log_level,
                    services,
                    ..Default::default()
                }
            },
        )
}

proptest! {
    #[test]
    fn resolving_defaults_is_idempotent(raw in raw_config()) {
        let once = raw.resolve_defaults();
        let twice = once.clone().resolve_defaults();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn resolved_config_keeps_invariants(raw in raw_config()) {
        let config = Config::try_from(raw.clone()).unwrap();

        prop_assert!(!config.consul_address.is_empty());
        prop_assert!(config.change_threshold > 0);

        let expected_global = raw.change_threshold.filter(|t| *t != 0).unwrap_or(60);
        prop_assert_eq!(config.change_threshold, expected_global);

        for (raw_service, service) in raw.services.iter().zip(config.services.iter()) {
            let expected = raw_service
                .change_threshold
                .filter(|t| *t != 0)
                .unwrap_or(expected_global);
            prop_assert_eq!(service.change_threshold, expected);
        }

        // A validated config resolves to itself.
        let again = Config::try_from(RawConfig::from(config.clone())).unwrap();
        prop_assert_eq!(again, config);
    }

    #[test]
    fn missing_service_threshold_follows_global(
        global in proptest::option::of(1u32..1000),
        names in proptest::collection::vec("[a-z]{1,6}", 1..5),
    ) {
        let mut doc = ConfigDocBuilder::new();
        if let Some(global) = global {
            doc = doc.with_change_threshold(global);
        }
        for name in names.iter() {
            doc = doc.with_service(ServiceBlockBuilder::new(name));
        }

        let loaded = parse_config(&doc.build()).unwrap();
        let expected = global.unwrap_or(60);
        for service in loaded.config.services.iter() {
            prop_assert_eq!(service.change_threshold, expected);
        }
    }

    #[test]
    fn invalid_watch_modes_are_rejected(mode in "[a-z]{1,10}") {
        prop_assume!(mode != "local" && mode != "global");

        let doc = ConfigDocBuilder::new().with_str("node_watch", &mode).build();
        let err = parse_config(&doc).unwrap_err();
        prop_assert!(err.is_validation());
        prop_assert!(err.to_string().contains("node_watch"));

        let doc = ConfigDocBuilder::new().with_str("service_watch", &mode).build();
        let err = parse_config(&doc).unwrap_err();
        prop_assert!(err.to_string().contains("service_watch"));
    }

    #[test]
    fn handler_order_is_stdout_email_pagerduty(kinds in proptest::collection::vec(0u8..3, 0..8)) {
        let mut doc = ConfigDocBuilder::new();
        for kind in kinds.iter() {
            doc = match kind {
                0 => doc.with_stdout(Some("info")),
                1 => doc.with_email(&["ops@example.com"]),
                _ => doc.with_pagerduty("key"),
            };
        }

        let loaded = parse_config(&doc.build()).unwrap();
        let rank = |h: &AlertHandler| match h {
            AlertHandler::Stdout(_) => 0u8,
            AlertHandler::Email(_) => 1,
            AlertHandler::PagerDuty(_) => 2,
        };
        let ranks: Vec<u8> = loaded.handlers.iter().map(rank).collect();

        let mut expected = kinds.clone();
        expected.sort();
        prop_assert_eq!(ranks, expected);
        prop_assert_eq!(loaded.events.len(), loaded.handlers.len());
    }
}

#[test]
fn default_watch_modes_are_local() {
    let config = Config::try_from(RawConfig::default()).unwrap();
    assert_eq!(config.node_watch, WatchMode::Local);
    assert_eq!(config.service_watch, WatchMode::Local);
}
