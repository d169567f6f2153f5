//! Serialization round trips
//!
//! Run with: cargo test --package sentinel-core --test roundtrip_tests

use serde::de::DeserializeSeed;
use serde::{Deserialize, Serialize};
use sentinel_core::{create_sentinel, RegistryConfig, Sentinel, SentinelSeed, Valued};
use sentinel_test_utils::{fresh_registry, fresh_registry_with, unique_name};

#[derive(Debug, Serialize, Deserialize)]
struct Job {
    id: u32,
    deadline: Valued<u64>,
    state: Sentinel,
}

#[test]
fn json_round_trip_returns_same_instance() {
    let name = unique_name("roundtrip");
    let original = create_sentinel(&name, None).unwrap();

    let json = serde_json::to_string(&original).unwrap();
    assert_eq!(json, format!("\"{name}\""));

    let back: Sentinel = serde_json::from_str(&json).unwrap();
    assert!(back.is(&original));
    assert!(back.is(&create_sentinel(&name, None).unwrap()));
}

#[test]
fn clone_is_the_copy_operation() {
    let original = create_sentinel(&unique_name("copy"), Some("copied")).unwrap();
    let copy = original.clone();
    assert!(copy.is(&original));
    assert_eq!(copy.repr(), "copied");
}

#[test]
fn unknown_name_fails_to_deserialize() {
    let name = unique_name("never_registered");
    let err = serde_json::from_str::<Sentinel>(&format!("\"{name}\"")).unwrap_err();
    assert!(err.to_string().contains("no sentinel registered"));
}

#[test]
fn nested_structures_keep_identity() {
    let not_started = create_sentinel(&unique_name("not_started"), None).unwrap();
    let no_deadline = create_sentinel(&unique_name("no_deadline"), None).unwrap();

    let job = Job {
        id: 7,
        deadline: Valued::Marker(no_deadline.clone()),
        state: not_started.clone(),
    };

    let json = serde_json::to_string(&job).unwrap();
    let back: Job = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, 7);
    assert!(back.deadline.is(&no_deadline));
    assert!(back.state.is(&not_started));
}

#[test]
fn valued_value_round_trip() {
    let slot: Valued<u64> = 30.into();
    let json = serde_json::to_string(&slot).unwrap();
    let back: Valued<u64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, slot);
}

#[test]
fn seed_round_trip_against_injected_registry() {
    let registry = fresh_registry();
    let marker = registry.create("batch.EMPTY", None).unwrap();

    let json = serde_json::to_string(&marker).unwrap();
    let mut de = serde_json::Deserializer::from_str(&json);
    let back = SentinelSeed::new(&registry).deserialize(&mut de).unwrap();

    assert!(back.is(&marker));
}

#[test]
fn seed_does_not_see_other_registries() {
    let owner = fresh_registry();
    let other = fresh_registry();
    let marker = owner.create("batch.EMPTY", None).unwrap();

    let json = serde_json::to_string(&marker).unwrap();
    let mut de = serde_json::Deserializer::from_str(&json);
    assert!(SentinelSeed::new(&other).deserialize(&mut de).is_err());
}

#[test]
fn fresh_registry_can_create_on_resolve() {
    let registry = fresh_registry_with(RegistryConfig::new().with_create_on_resolve(true));

    let mut de = serde_json::Deserializer::from_str("\"restored.MARKER\"");
    let first = SentinelSeed::new(&registry).deserialize(&mut de).unwrap();
    let mut de = serde_json::Deserializer::from_str("\"restored.MARKER\"");
    let second = SentinelSeed::new(&registry).deserialize(&mut de).unwrap();

    assert!(first.is(&second));
    assert_eq!(first.repr(), "<MARKER>");
}

#[test]
fn restore_then_declare_keeps_identity_and_takes_custom_repr() {
    let registry = fresh_registry_with(RegistryConfig::new().with_create_on_resolve(true));

    let mut de = serde_json::Deserializer::from_str("\"jobs.NOT_STARTED\"");
    let restored = SentinelSeed::new(&registry).deserialize(&mut de).unwrap();
    assert_eq!(restored.repr(), "<NOT_STARTED>");

    let declared = registry.create("jobs.NOT_STARTED", Some("<not started>")).unwrap();

    assert!(declared.is(&restored));
    assert_eq!(declared.repr(), "<not started>");
    assert_eq!(restored.to_string(), "<not started>");
    assert_eq!(registry.len(), 1);

    let mut de = serde_json::Deserializer::from_str("\"jobs.NOT_STARTED\"");
    assert!(SentinelSeed::new(&registry).deserialize(&mut de).unwrap().is(&declared));
}
