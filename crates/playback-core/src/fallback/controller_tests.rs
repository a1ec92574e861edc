use super::{FallbackError, PlaybackController, PlaybackStatus, PlaybackTransition};
use crate::ResolvedSource;

fn make_candidates(count: usize) -> Vec<ResolvedSource> {
    (0..count)
        .map(|i| ResolvedSource {
            provider_name: format!("Provider{}", i),
            url: format!("https://provider{}/embed/603", i),
        })
        .collect()
}

#[test]
fn should_be_idle_by_default() {
    let controller = PlaybackController::new();

    assert_eq!(PlaybackStatus::Idle, controller.status());
    assert_eq!(None, controller.current_source());
    assert_eq!(0, controller.attempt());
}

#[test]
fn should_start_loading_first_candidate_on_select() {
    let mut controller = PlaybackController::new();

    let transition = controller.select(make_candidates(3));

    assert_eq!(PlaybackTransition::Loading { index: 0 }, transition);
    assert_eq!(PlaybackStatus::Loading, controller.status());
    assert_eq!(
        Some("https://provider0/embed/603"),
        controller.current_source().map(|s| s.url.as_str())
    );
    assert_eq!(1, controller.attempt());
}

#[test]
fn should_play_after_load_success() {
    let mut controller = PlaybackController::new();
    controller.select(make_candidates(2));

    let transition = controller.on_load_success();

    assert_eq!(PlaybackTransition::Playing { index: 0 }, transition);
    assert_eq!(PlaybackStatus::Playing, controller.status());
}

#[test]
fn should_walk_through_all_candidates_before_exhaustion() {
    let count = 4;
    let mut controller = PlaybackController::new();
    controller.select(make_candidates(count));

    for expected_index in 1..count {
        let transition = controller.on_load_error();

        assert_eq!(
            PlaybackTransition::Loading {
                index: expected_index
            },
            transition
        );
        assert_eq!(PlaybackStatus::Loading, controller.status());
    }

    assert_eq!(count - 1, controller.current_index());
    assert_eq!(vec![0, 1, 2], controller.failed_indexes().to_vec());

    let transition = controller.on_load_error();

    assert_eq!(PlaybackTransition::Exhausted, transition);
    assert_eq!(PlaybackStatus::Exhausted, controller.status());
    assert_eq!(count - 1, controller.current_index());
    assert_eq!(None, controller.current_source());
    assert_eq!(vec![0, 1, 2, 3], controller.failed_indexes().to_vec());
}

#[test]
fn should_exhaust_single_candidate_on_first_error() {
    let mut controller = PlaybackController::new();
    controller.select(make_candidates(1));

    assert_eq!(PlaybackTransition::Exhausted, controller.on_load_error());
}

#[test]
fn should_exhaust_immediately_without_candidates() {
    let mut controller = PlaybackController::new();

    assert_eq!(PlaybackTransition::Exhausted, controller.select(vec![]));
    assert_eq!(PlaybackStatus::Exhausted, controller.status());
    assert_eq!(0, controller.attempt());
}

#[test]
fn should_reset_on_reselect_after_exhaustion() {
    let mut controller = PlaybackController::new();
    controller.select(make_candidates(2));
    controller.on_load_error();
    controller.on_load_error();
    assert_eq!(PlaybackStatus::Exhausted, controller.status());

    let transition = controller.select(make_candidates(2));

    assert_eq!(PlaybackTransition::Loading { index: 0 }, transition);
    assert_eq!(PlaybackStatus::Loading, controller.status());
    assert_eq!(0, controller.current_index());
    assert!(controller.failed_indexes().is_empty());
}

#[test]
fn should_reset_on_reselect_while_playing() {
    let mut controller = PlaybackController::new();
    controller.select(make_candidates(3));
    controller.on_load_error();
    controller.on_load_success();

    controller.select(make_candidates(3));

    assert_eq!(PlaybackStatus::Loading, controller.status());
    assert_eq!(0, controller.current_index());
}

#[test]
fn should_ignore_signals_that_do_not_apply() {
    let mut controller = PlaybackController::new();

    assert_eq!(
        PlaybackTransition::Ignored {
            status: PlaybackStatus::Idle
        },
        controller.on_load_success()
    );
    assert_eq!(
        PlaybackTransition::Ignored {
            status: PlaybackStatus::Idle
        },
        controller.on_load_error()
    );

    controller.select(make_candidates(2));
    controller.on_load_success();

    assert_eq!(
        PlaybackTransition::Ignored {
            status: PlaybackStatus::Playing
        },
        controller.on_load_error()
    );
    assert_eq!(0, controller.current_index());
}

#[test]
fn should_bump_attempt_on_every_loading_entry() {
    let mut controller = PlaybackController::new();
    controller.select(make_candidates(3));
    controller.on_load_error();
    controller.on_load_error();

    assert_eq!(3, controller.attempt());
}

#[test]
fn should_switch_to_chosen_candidate() {
    let mut controller = PlaybackController::new();
    controller.select(make_candidates(3));
    controller.on_load_error();
    controller.on_load_error();
    controller.on_load_error();

    let transition = controller.switch_to(1).expect("Expected switch to succeed");

    assert_eq!(PlaybackTransition::Loading { index: 1 }, transition);
    assert_eq!(PlaybackStatus::Loading, controller.status());
    assert_eq!(
        Some("Provider1"),
        controller.current_source().map(|s| s.provider_name.as_str())
    );
}

#[test]
fn should_reject_invalid_switch() {
    let mut controller = PlaybackController::new();

    assert_eq!(
        Err(FallbackError::NothingSelected),
        controller.switch_to(0)
    );

    controller.select(make_candidates(2));
    controller.on_load_success();

    assert_eq!(
        Err(FallbackError::IndexOutOfRange { index: 5, len: 2 }),
        controller.switch_to(5)
    );
    assert_eq!(PlaybackStatus::Playing, controller.status());
}

#[test]
fn should_skip_already_failed_sources_after_manual_switch() {
    let mut controller = PlaybackController::new();
    controller.select(make_candidates(3));
    controller.on_load_error();
    controller.on_load_error();
    controller.on_load_success();

    controller.switch_to(0).unwrap();
    let transition = controller.on_load_error();

    assert_eq!(PlaybackTransition::Loading { index: 2 }, transition);
    assert_eq!(vec![0, 1], controller.failed_indexes().to_vec());
}

#[test]
fn should_exhaust_when_only_failed_sources_remain_after_switch() {
    let mut controller = PlaybackController::new();
    controller.select(make_candidates(3));
    controller.on_load_error();
    controller.on_load_error();
    controller.on_load_error();
    assert_eq!(PlaybackStatus::Exhausted, controller.status());

    controller.switch_to(1).unwrap();
    let transition = controller.on_load_error();

    assert_eq!(PlaybackTransition::Exhausted, transition);
    assert_eq!(vec![0, 1, 2], controller.failed_indexes().to_vec());
}
