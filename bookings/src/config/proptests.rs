//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, FormsConfig, RoomConfig, SessionConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;

// Distinct positive ids with non-blank names
fn rooms_strategy() -> impl Strategy<Value = Vec<RoomConfig>> {
    prop::collection::btree_set(1i64..1000, 1..6).prop_map(|ids| {
        ids.into_iter()
            .map(|id| RoomConfig {
                id,
                name: format!("Room {id}"),
            })
            .collect()
    })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(rooms_strategy()),
        prop::option::of(1u64..=720),
        prop::option::of(1usize..=20),
        prop::option::of(1u64..=120),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(rooms, hours, min_length, lock_wait, autoinit)| Config {
            rooms,
            session: hours.map(|h| SessionConfig {
                lifetime_hours: Some(h),
            }),
            forms: min_length.map(|n| FormsConfig {
                first_name_min_length: Some(n),
            }),
            maximum_lock_wait_seconds: lock_wait,
            disable_autoinit: autoinit,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Merging preserves non-None values from higher precedence
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(
            result.maximum_lock_wait_seconds,
            high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds)
        );
        prop_assert_eq!(result.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));
        prop_assert_eq!(&result.rooms, &high.rooms.clone().or(low.rooms.clone()));
        prop_assert_eq!(
            result.session_lifetime(),
            if high.session.is_some() { high.session_lifetime() } else { low.session_lifetime() }
        );
    }

    // Empty config is identity element for merge
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merging is associative
    #[test]
    fn config_merge_associative(
        a in config_strategy(),
        b in config_strategy(),
        c in config_strategy()
    ) {
        let mut left = a.clone();
        ConfigMerger::merge_into(&mut left, &b);
        ConfigMerger::merge_into(&mut left, &c);

        let mut b_merge_c = b;
        ConfigMerger::merge_into(&mut b_merge_c, &c);
        let mut right = a;
        ConfigMerger::merge_into(&mut right, &b_merge_c);

        prop_assert_eq!(left, right);
    }

    // Generated configs are valid and stay valid after merge
    #[test]
    fn valid_configs_stay_valid_after_merge(a in config_strategy(), b in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&a).is_ok());
        let mut merged = a;
        ConfigMerger::merge_into(&mut merged, &b);
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }

    // Any repeated room id is rejected
    #[test]
    fn duplicate_room_ids_rejected(rooms in rooms_strategy(), pick in any::<prop::sample::Index>()) {
        let mut rooms = rooms;
        let duplicate = rooms[pick.index(rooms.len())].clone();
        rooms.push(duplicate);
        let config = Config { rooms: Some(rooms), ..Default::default() };
        prop_assert!(ConfigValidator::validate(&config).is_err());
    }

    // YAML round trip preserves the config
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
