use super::*;

fn pointer_state() -> CarouselState {
    CarouselState::new(0.0, 1.2)
}

fn drag_through(
    state: CarouselState,
    samples: &[f64],
    settings: &CarouselSettings,
) -> CarouselState {
    let (first, rest) = samples.split_first().expect("at least one sample");
    let mut state = state.apply_drag(DragInput::Start { pointer_x: *first }, settings);
    for &x in rest {
        state = state.apply_drag(DragInput::Move { pointer_x: x }, settings);
    }
    state
}

#[test]
fn move_and_end_without_start_change_nothing() {
    let settings = CarouselSettings::default();
    let mut state = pointer_state();
    state.accumulated_offset = 4_000.0;
    state.last_pointer_x = 17.0;

    let moved = state.apply_drag(DragInput::Move { pointer_x: 500.0 }, &settings);
    assert_eq!(moved, state);

    let ended = state.apply_drag(DragInput::End, &settings);
    assert_eq!(ended, state, "end outside a drag must not rewrap");
}

#[test]
fn start_pauses_animation_and_records_pointer() {
    let settings = CarouselSettings::default();
    let state = pointer_state().apply_drag(DragInput::Start { pointer_x: 240.0 }, &settings);

    assert!(state.is_dragging);
    assert!(state.animation_paused);
    assert_eq!(state.drag_start_x, 240.0);
    assert_eq!(state.last_pointer_x, 240.0);
    assert_eq!(state.auto_position(1_000.0, &settings), None);
}

#[test]
fn pointer_drag_of_100px_adds_120() {
    let settings = CarouselSettings::default();
    let state = drag_through(pointer_state(), &[300.0, 400.0], &settings);
    assert_eq!(state.accumulated_offset, 120.0);
}

#[test]
fn incremental_deltas_telescope_regardless_of_sampling() {
    let settings = CarouselSettings::default();
    let coarse = drag_through(pointer_state(), &[100.0, 40.0], &settings);
    let fine_samples: Vec<f64> = (0..=60).map(|i| 100.0 - i as f64).collect();
    let fine = drag_through(pointer_state(), &fine_samples, &settings);
    let wobbly = drag_through(
        pointer_state(),
        &[100.0, 130.0, 90.0, 55.0, 70.0, 40.0],
        &settings,
    );

    let expected = 1.2 * (40.0 - 100.0);
    for state in [coarse, fine, wobbly] {
        assert!(
            (state.accumulated_offset - expected).abs() < 1e-9,
            "offset {} should equal {}",
            state.accumulated_offset,
            expected
        );
    }
}

#[test]
fn end_drag_rewraps_past_max_offset() {
    let settings = CarouselSettings::default();
    let mut state = pointer_state().apply_drag(DragInput::Start { pointer_x: 0.0 }, &settings);
    state.accumulated_offset = 4_000.0;

    let ended = state.apply_drag(DragInput::End, &settings);
    assert!(!ended.is_dragging);
    assert!(!ended.animation_paused);
    assert_eq!(ended.accumulated_offset, 960.0);
}

#[test]
fn rewrap_keeps_sign_of_offset() {
    let settings = CarouselSettings::default();
    let mut state = pointer_state();
    state.accumulated_offset = -7_000.0;
    assert_eq!(state.rewrapped(&settings).accumulated_offset, -920.0);
}

#[test]
fn end_drag_within_margin_keeps_offset() {
    let settings = CarouselSettings::default();
    let mut state = pointer_state().apply_drag(DragInput::Start { pointer_x: 0.0 }, &settings);
    state.accumulated_offset = 3_800.0;
    assert_eq!(
        state.apply_drag(DragInput::End, &settings).accumulated_offset,
        3_800.0
    );
}

#[test]
fn offset_stays_bounded_across_many_drag_sessions() {
    let settings = CarouselSettings::default();
    let mut state = pointer_state();
    for session in 0..200 {
        let direction = if session % 7 == 0 { -1.0 } else { 1.0 };
        let samples: Vec<f64> = (0..12).map(|i| direction * i as f64 * 45.0).collect();
        state = drag_through(state, &samples, &settings);
        state = state.apply_drag(DragInput::End, &settings);
        assert!(
            state.accumulated_offset.abs() <= settings.max_offset,
            "session {session}: offset {} escaped the margin",
            state.accumulated_offset
        );
    }
}

#[test]
fn rewrap_preserves_rendered_card() {
    let settings = CarouselSettings::default();
    let loop_distance = settings.loop_distance();
    for offset in [4_000.0, -4_000.0, 9_123.5, -12_160.0] {
        let mut state = pointer_state();
        state.accumulated_offset = offset;
        let rewrapped = state.rewrapped(&settings).accumulated_offset;
        let loops = (offset - rewrapped) / loop_distance;
        assert!(
            (loops - loops.round()).abs() < 1e-9,
            "{offset} -> {rewrapped} is not a whole number of loops"
        );
        for now in [0.0, 11_250.0, 30_000.0] {
            let before = settings.base_position(now) + offset;
            let after = settings.base_position(now) + rewrapped;
            let shift = (before - after) / loop_distance;
            assert!((shift - shift.round()).abs() < 1e-9);
        }
    }
}

#[test]
fn small_horizontal_wheel_passes_through() {
    let settings = CarouselSettings::default();
    let state = pointer_state();
    let (next, disposition) = state.apply_wheel(WheelInput::new(0.5, 40.0), &settings);
    assert_eq!(next, state);
    assert_eq!(disposition, EventDisposition::PassThrough);
}

#[test]
fn horizontal_wheel_moves_offset_against_delta() {
    let settings = CarouselSettings::default();
    let (next, disposition) = pointer_state().apply_wheel(WheelInput::new(30.0, 0.0), &settings);
    assert_eq!(next.accumulated_offset, -60.0);
    assert!(disposition.is_consumed());
}

#[test]
fn wheel_rewraps_when_enabled() {
    let settings = CarouselSettings::default();
    let mut state = pointer_state();
    state.accumulated_offset = -3_790.0;
    let (next, _) = state.apply_wheel(WheelInput::new(10.0, 0.0), &settings);
    assert_eq!(next.accumulated_offset, -770.0);
    assert!(next.accumulated_offset.abs() <= settings.max_offset);
}

#[test]
fn wheel_accumulates_without_bound_when_rewrap_disabled() {
    let settings = CarouselSettings::default().with_rewrap_on_wheel(false);
    let mut state = pointer_state();
    for _ in 0..100 {
        state = state.apply_wheel(WheelInput::new(50.0, 0.0), &settings).0;
    }
    assert_eq!(state.accumulated_offset, -10_000.0);
}

#[test]
fn auto_position_sums_clock_and_manual_terms() {
    let settings = CarouselSettings::default();
    let mut state = CarouselState::new(1_000.0, 1.2);
    assert_eq!(state.auto_position(1_000.0, &settings), Some(0.0));
    assert_eq!(state.auto_position(23_500.0, &settings), Some(-1520.0));

    state.accumulated_offset = 120.0;
    assert_eq!(state.auto_position(23_500.0, &settings), Some(-1400.0));
}
