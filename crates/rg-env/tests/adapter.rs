mod common;

use common::ScriptedEngine;
use rg_env::{Action, EngineError, EnvError, EpisodePhase, RogueEnv};
use serde_json::json;

fn scripted(payload: Option<&str>) -> RogueEnv<ScriptedEngine> {
    RogueEnv::with_payload(Some(7), payload).unwrap()
}

#[test]
fn constructor_refreshes_cache() {
    let env = scripted(None);
    assert_eq!(env.result().gold().unwrap(), 0);
    assert_eq!(env.status_text(), "Gold:0 Keys:");
    assert_eq!(env.session().engine().resets, 0);
}

#[test]
fn reward_is_gold_delta() {
    let mut env = scripted(None);
    let mut previous = env.result().gold().unwrap();
    for (keys, expected) in [("$", 10), ("$$", 20), ("-", -5), ("x", 0), ("$-", 5)] {
        let outcome = env.step(keys).unwrap();
        assert_eq!(outcome.reward, expected, "keys {keys:?}");
        let current = outcome.result.gold().unwrap();
        assert_eq!(outcome.reward, current - previous);
        previous = current;
    }
}

#[test]
fn keys_applied_in_order() {
    let mut env = scripted(None);
    let outcome = env.step("hh>").unwrap();
    assert_eq!(outcome.result.screen(), &[b"hh>".to_vec()]);
    assert_eq!(outcome.feature_map[[0, 0, 0]], 3.0);
    assert_eq!(env.session().engine().reacts, 3);
}

#[test]
fn partial_failure_keeps_previous_snapshot() {
    let mut env = scripted(Some(r#"{"fail_on_react": 2}"#));
    let before = env.result().clone();

    let err = env.step("$$$").err().unwrap();
    assert!(matches!(err, EnvError::EngineFatal(EngineError::Fatal(_))));
    assert!(!err.is_recoverable());

    // the cache is the last complete snapshot, not a mix
    assert_eq!(env.result(), &before);
    assert_eq!(env.result().gold().unwrap(), 0);

    // the engine kept the prefix that was applied
    let engine = env.session().engine();
    assert_eq!(engine.applied, vec!['$' as u32]);
    assert_eq!(engine.gold, 10);
}

#[test]
fn unknown_index_never_reaches_engine() {
    let mut env = scripted(None);
    env.step("$").unwrap();
    let before = env.result().clone();

    let err = env.step(99usize).err().unwrap();
    assert!(matches!(
        err,
        EnvError::UnknownActionIndex { index: 99, count: 10 }
    ));
    assert_eq!(env.result(), &before);
    assert_eq!(env.result().gold().unwrap(), 10);
    assert_eq!(env.session().engine().reacts, 1);
}

#[test]
fn invalid_action_type_rejected_before_engine() {
    let mut env = scripted(None);
    for value in [json!(null), json!(2.5), json!({"key": "h"}), json!(["h"])] {
        let err = Action::try_from(&value).unwrap_err();
        assert!(matches!(err, EnvError::InvalidActionType(_)));
    }
    assert_eq!(env.session().engine().reacts, 0);

    let action = Action::try_from(&json!(8)).unwrap();
    env.step(action).unwrap();
    assert_eq!(env.session().engine().applied, vec!['>' as u32]);
}

#[test]
fn missing_gold_is_fatal() {
    let mut env = scripted(Some(r#"{"omit_gold": true}"#));
    let err = env.step("h").err().unwrap();
    assert!(matches!(err, EnvError::MissingStatusField("gold")));
    assert_eq!(env.session().engine().reacts, 0);
}

#[test]
fn seed_deferred_until_reset() {
    let mut env = scripted(None);
    env.seed(99);
    env.step("$").unwrap();
    assert_eq!(env.session().engine().seed, 7);
    assert_eq!(env.session().pending_seed(), Some(99));

    env.reset().unwrap();
    let engine = env.session().engine();
    assert_eq!(engine.seeds_at_reset, vec![99]);
    assert_eq!(env.session().pending_seed(), None);

    // a later reset without a new seed keeps the last one
    env.reset().unwrap();
    assert_eq!(env.session().engine().seeds_at_reset, vec![99, 99]);
}

#[test]
fn reset_replaces_cache() {
    let mut env = scripted(None);
    env.step("$$").unwrap();
    assert_eq!(env.phase(), EpisodePhase::Stepping);

    env.reset().unwrap();
    assert_eq!(env.phase(), EpisodePhase::Ready);
    assert_eq!(env.result().gold().unwrap(), 0);
    assert!(env.get_screen()[0].is_empty());
}

#[test]
fn done_stays_false_without_game_over_field() {
    let mut env = scripted(None);
    for _ in 0..5 {
        assert!(!env.step("$").unwrap().done);
    }
}

#[test]
fn construction_error_is_engine_init() {
    let err = RogueEnv::<ScriptedEngine>::with_payload(None, Some("not json"))
        .err()
        .unwrap();
    assert!(matches!(err, EnvError::EngineInit(EngineError::InvalidConfig(_))));
}

#[test]
fn overflowing_gold_delta_is_engine_fatal() {
    let payload = format!(
        r#"{{"initial_gold": {}, "gold_after_react": {}}}"#,
        i64::MIN,
        i64::MAX
    );
    let mut env = scripted(Some(&payload));
    assert_eq!(env.result().gold().unwrap(), i64::MIN);

    let err = env.step("h").err().unwrap();
    assert!(matches!(err, EnvError::EngineFatal(EngineError::Fatal(_))));
    assert_eq!(env.phase(), EpisodePhase::Ready);
}

#[test]
fn large_gold_delta_within_range() {
    let payload = format!(r#"{{"initial_gold": -5, "gold_after_react": {}}}"#, i64::MAX - 5);
    let mut env = scripted(Some(&payload));
    assert_eq!(env.step("h").unwrap().reward, i64::MAX);
}

#[test]
fn reset_failure_is_engine_fatal() {
    let mut env = scripted(Some(r#"{"fail_on_reset": true}"#));
    env.seed(3);
    let err = env.reset().err().unwrap();
    assert!(matches!(err, EnvError::EngineFatal(EngineError::Fatal(_))));
    assert!(!err.is_recoverable());
}
