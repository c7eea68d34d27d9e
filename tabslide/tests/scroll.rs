use std::time::Duration;

use tabslide::memory::{BODY, HTML, WINDOW};
use tabslide::{
    scroll_provider, AnimationRun, Axis, Dom, Easing, MemoryDom, ScrollAnimator, ScrollBehavior,
    ScrollError, ScrollOptions, ScrollProvider, ScrollTarget,
};

const FRAME: Duration = Duration::from_millis(16);

fn dom_with_box() -> MemoryDom {
    let mut dom = MemoryDom::new();
    dom.add_element(BODY, "box", &["scroller"]);
    dom
}

fn smooth() -> ScrollOptions {
    ScrollOptions::new().behavior(ScrollBehavior::Smooth)
}

fn run_to_completion(dom: &mut MemoryDom, animator: &mut ScrollAnimator) -> usize {
    dom.run_frames(FRAME, |dom| {
        animator.tick(dom);
    })
}

// =============================================================================
// Interpolation
// =============================================================================

#[test]
fn test_zero_duration_is_complete_immediately() {
    let start = MemoryDom::new().current_time();
    let run = AnimationRun::new(
        ScrollTarget::Page,
        Axis::Top,
        10.0,
        70.0,
        start,
        ScrollBehavior::Auto,
    );
    assert_eq!(run.progress(start), 1.0);
    assert_eq!(run.position_at(start), 70.0);
}

#[test]
fn test_progress_clamps_at_one() {
    let start = MemoryDom::new().current_time();
    let run = AnimationRun::new(
        ScrollTarget::Page,
        Axis::Top,
        0.0,
        100.0,
        start,
        ScrollBehavior::Smooth,
    );
    assert_eq!(run.easing, Easing::EaseInOut);
    assert_eq!(run.progress(start), 0.0);
    assert_eq!(run.progress(start + Duration::from_millis(150)), 0.5);
    assert_eq!(run.progress(start + Duration::from_secs(10)), 1.0);
    assert_eq!(run.position_at(start + Duration::from_millis(150)), 50.0);
    assert_eq!(run.position_at(start + Duration::from_secs(10)), 100.0);
}

#[test]
fn test_awkward_fractions_terminate_exactly() {
    let start = MemoryDom::new().current_time();
    let run = AnimationRun::new(
        ScrollTarget::Page,
        Axis::Left,
        0.1,
        0.3,
        start,
        ScrollBehavior::Smooth,
    );
    assert_eq!(run.position_at(start + Duration::from_millis(300)), 0.3);
}

#[test]
fn test_full_float_range_terminates() {
    for behavior in [ScrollBehavior::Auto, ScrollBehavior::Smooth] {
        let mut dom = dom_with_box();
        dom.preset_scroll("box", Axis::Top, -f64::MAX);
        let mut animator = ScrollAnimator::new();

        animator
            .animate(&mut dom, "box", &ScrollOptions::new().top(f64::MAX).behavior(behavior))
            .unwrap();
        let frames = run_to_completion(&mut dom, &mut animator);

        assert!(frames <= 19, "{behavior:?} took {frames} frames");
        assert_eq!(dom.writes_to("box", Axis::Top).last(), Some(&f64::MAX));
        assert!(!animator.is_animating());
    }
}

// =============================================================================
// Animator
// =============================================================================

#[test]
fn test_smooth_scroll_is_monotonic_and_ends_on_target() {
    let mut dom = dom_with_box();
    let mut animator = ScrollAnimator::new();

    animator.animate(&mut dom, "box", &smooth().top(100.0)).unwrap();
    assert!(dom.writes().is_empty(), "first step waits for a frame");

    let frames = run_to_completion(&mut dom, &mut animator);
    let writes = dom.writes_to("box", Axis::Top);

    assert!(writes.windows(2).all(|w| w[0] <= w[1]), "{writes:?}");
    assert_eq!(writes.last(), Some(&100.0));
    assert_eq!(writes.iter().filter(|&&v| v == 100.0).count(), 1);
    // 300ms at 16ms per frame
    assert_eq!(frames, 19);
    assert_eq!(writes.len(), frames);
    assert!(!animator.is_animating());
}

#[test]
fn test_smooth_scroll_downwards() {
    let mut dom = dom_with_box();
    dom.preset_scroll("box", Axis::Top, 400.0);
    let mut animator = ScrollAnimator::new();

    animator.animate(&mut dom, "box", &smooth().top(40.0)).unwrap();
    run_to_completion(&mut dom, &mut animator);

    let writes = dom.writes_to("box", Axis::Top);
    assert!(writes.windows(2).all(|w| w[0] >= w[1]), "{writes:?}");
    assert_eq!(writes.last(), Some(&40.0));
    assert_eq!(dom.scroll_offset("box", Axis::Top), 40.0);
}

#[test]
fn test_auto_scroll_writes_once() {
    let mut dom = dom_with_box();
    let mut animator = ScrollAnimator::new();

    animator
        .animate(&mut dom, "box", &ScrollOptions::new().left(50.0))
        .unwrap();
    let frames = run_to_completion(&mut dom, &mut animator);

    assert_eq!(frames, 1);
    assert_eq!(dom.writes_to("box", Axis::Left), [50.0]);
    assert!(dom.writes_to("box", Axis::Top).is_empty());
}

#[test]
fn test_no_writes_after_termination() {
    let mut dom = dom_with_box();
    let mut animator = ScrollAnimator::new();

    animator.animate(&mut dom, "box", &smooth().top(100.0)).unwrap();
    run_to_completion(&mut dom, &mut animator);
    let written = dom.writes().len();
    let requested = dom.frame_requests();

    for _ in 0..5 {
        dom.advance(FRAME);
        assert!(!animator.tick(&mut dom));
    }
    assert_eq!(dom.writes().len(), written);
    assert_eq!(dom.frame_requests(), requested);
    assert!(!dom.take_frame_request());
}

#[test]
fn test_frames_pause_when_host_stops_presenting() {
    let mut dom = dom_with_box();
    let mut animator = ScrollAnimator::new();

    animator.animate(&mut dom, "box", &smooth().top(100.0)).unwrap();
    dom.advance(FRAME);
    animator.tick(&mut dom);

    // Host goes idle for a long time without frames; nothing happens.
    dom.advance(Duration::from_secs(5));
    assert_eq!(dom.writes().len(), 1);
    assert!(animator.is_animating());

    // The next frame is past the duration and finishes the run.
    animator.tick(&mut dom);
    assert_eq!(dom.writes_to("box", Axis::Top).last(), Some(&100.0));
    assert!(!animator.is_animating());
}

#[test]
fn test_both_axes_animate_independently() {
    let mut dom = dom_with_box();
    dom.preset_scroll("box", Axis::Left, 200.0);
    let mut animator = ScrollAnimator::new();

    animator
        .animate(&mut dom, "box", &smooth().top(90.0).left(20.0))
        .unwrap();
    assert_eq!(animator.pending(), 2);
    run_to_completion(&mut dom, &mut animator);

    let top = dom.writes_to("box", Axis::Top);
    let left = dom.writes_to("box", Axis::Left);
    assert_eq!(top.last(), Some(&90.0));
    assert_eq!(left.last(), Some(&20.0));
    assert!(top.windows(2).all(|w| w[0] <= w[1]));
    assert!(left.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(top.len(), left.len());
}

#[test]
fn test_newer_request_supersedes_older_run() {
    let mut dom = dom_with_box();
    let mut animator = ScrollAnimator::new();

    animator.animate(&mut dom, "box", &smooth().top(100.0)).unwrap();
    dom.advance(FRAME);
    animator.tick(&mut dom);

    animator.animate(&mut dom, "box", &smooth().top(0.0)).unwrap();
    assert_eq!(animator.pending(), 2);
    dom.clear_writes();

    dom.advance(FRAME);
    animator.tick(&mut dom);
    assert_eq!(animator.pending(), 1, "stale run is dropped");
    assert_eq!(dom.writes().len(), 1, "only the newest run writes");

    run_to_completion(&mut dom, &mut animator);
    assert_eq!(dom.scroll_offset("box", Axis::Top), 0.0);
    assert!(dom.writes_to("box", Axis::Top).iter().all(|&v| v < 100.0));
}

#[test]
fn test_request_on_other_axis_does_not_supersede() {
    let mut dom = dom_with_box();
    let mut animator = ScrollAnimator::new();

    animator.animate(&mut dom, "box", &smooth().top(100.0)).unwrap();
    animator.animate(&mut dom, "box", &smooth().left(60.0)).unwrap();
    run_to_completion(&mut dom, &mut animator);

    assert_eq!(dom.scroll_offset("box", Axis::Top), 100.0);
    assert_eq!(dom.scroll_offset("box", Axis::Left), 60.0);
}

#[test]
fn test_no_axes_requests_no_frame() {
    let mut dom = dom_with_box();
    let mut animator = ScrollAnimator::new();

    animator.animate(&mut dom, "box", &smooth()).unwrap();
    assert!(!dom.take_frame_request());
    assert!(!animator.is_animating());
}

// =============================================================================
// Page Surrogate
// =============================================================================

#[test]
fn test_window_scrolls_body_and_root() {
    let mut dom = MemoryDom::new();
    let mut animator = ScrollAnimator::new();

    animator
        .animate(&mut dom, WINDOW, &ScrollOptions::new().top(300.0))
        .unwrap();
    run_to_completion(&mut dom, &mut animator);

    assert_eq!(dom.writes_to(BODY, Axis::Top), [300.0]);
    assert_eq!(dom.writes_to(HTML, Axis::Top), [300.0]);
}

#[test]
fn test_page_offset_falls_back_to_root_element() {
    let mut dom = MemoryDom::new();
    dom.preset_scroll(HTML, Axis::Top, 80.0);
    assert_eq!(ScrollTarget::Page.offset(&dom, Axis::Top), 80.0);

    dom.preset_scroll(BODY, Axis::Top, 30.0);
    assert_eq!(ScrollTarget::Page.offset(&dom, Axis::Top), 30.0);
}

#[test]
fn test_body_and_html_resolve_to_page() {
    let dom = MemoryDom::new();
    assert_eq!(ScrollTarget::resolve(&dom, BODY), Ok(ScrollTarget::Page));
    assert_eq!(ScrollTarget::resolve(&dom, HTML), Ok(ScrollTarget::Page));
    assert_eq!(ScrollTarget::resolve(&dom, WINDOW), Ok(ScrollTarget::Page));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_text_node_is_invalid_target() {
    let mut dom = MemoryDom::new();
    dom.add_text(BODY, "label");
    let mut animator = ScrollAnimator::new();

    let err = animator
        .animate(&mut dom, "label", &smooth().top(10.0))
        .unwrap_err();
    assert_eq!(
        err,
        ScrollError::InvalidTarget {
            target: "label".to_string()
        }
    );
    assert!(dom.writes().is_empty());
    assert!(!dom.take_frame_request());
}

#[test]
fn test_unknown_node_is_invalid_target() {
    let mut dom = MemoryDom::new();
    let mut animator = ScrollAnimator::new();

    let result = animator.animate(&mut dom, "missing", &smooth().top(10.0));
    assert!(matches!(result, Err(ScrollError::InvalidTarget { .. })));
    assert!(!animator.is_animating());
}

#[test]
fn test_non_finite_offset_is_rejected_before_any_run() {
    let mut dom = dom_with_box();
    let mut animator = ScrollAnimator::new();

    let result = animator.animate(&mut dom, "box", &smooth().top(10.0).left(f64::NAN));
    assert!(matches!(
        result,
        Err(ScrollError::NonFiniteOffset {
            axis: Axis::Left,
            ..
        })
    ));
    assert_eq!(animator.pending(), 0);
    assert!(dom.writes().is_empty());
}

#[test]
fn test_bad_behavior_is_rejected_with_supported_names() {
    let err = "bounce".parse::<ScrollBehavior>().unwrap_err();
    assert_eq!(
        err,
        ScrollError::UnsupportedEasing {
            name: "bounce".to_string(),
            supported: vec!["auto", "smooth"],
        }
    );
}

// =============================================================================
// Provider Selection
// =============================================================================

#[test]
fn test_native_scroll_used_when_available() {
    let mut dom = MemoryDom::new().with_native_smooth_scroll(true);
    dom.add_element(BODY, "box", &[]);
    let mut provider = scroll_provider(&dom);

    provider.scroll_to(&mut dom, "box", &smooth().top(42.0)).unwrap();

    assert_eq!(dom.native_calls().len(), 1);
    assert_eq!(dom.writes_to("box", Axis::Top), [42.0]);
    assert!(!provider.is_animating());
    assert!(!dom.take_frame_request());
}

#[test]
fn test_animator_installed_without_native_support() {
    let mut dom = dom_with_box();
    let mut provider = scroll_provider(&dom);

    provider.scroll_to(&mut dom, "box", &smooth().top(42.0)).unwrap();
    assert!(provider.is_animating());
    assert!(dom.native_calls().is_empty());

    dom.run_frames(FRAME, |dom| {
        provider.tick(dom);
    });
    assert_eq!(dom.scroll_offset("box", Axis::Top), 42.0);
}

#[test]
fn test_native_scroll_rejects_non_finite_offset() {
    let mut dom = MemoryDom::new().with_native_smooth_scroll(true);
    dom.add_element(BODY, "box", &[]);
    let mut provider = scroll_provider(&dom);

    let result = provider.scroll_to(&mut dom, "box", &smooth().left(f64::INFINITY));
    assert!(matches!(
        result,
        Err(ScrollError::NonFiniteOffset {
            axis: Axis::Left,
            ..
        })
    ));
    assert!(dom.native_calls().is_empty());
    assert!(dom.writes().is_empty());
}

#[test]
fn test_native_scroll_still_validates_target() {
    let mut dom = MemoryDom::new().with_native_smooth_scroll(true);
    dom.add_text(BODY, "label");
    let mut provider = scroll_provider(&dom);

    let result = provider.scroll_to(&mut dom, "label", &smooth().top(1.0));
    assert!(matches!(result, Err(ScrollError::InvalidTarget { .. })));
    assert!(dom.native_calls().is_empty());
}
