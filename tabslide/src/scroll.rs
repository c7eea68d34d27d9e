use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::dom::{Dom, NodeKind};
use crate::easing::Easing;
use crate::error::ScrollError;

/// How long a smooth scroll takes.
pub const SMOOTH_DURATION: Duration = Duration::from_millis(300);

/// One of the two scroll dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Vertical (`scrollTop`).
    Top,
    /// Horizontal (`scrollLeft`).
    Left,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Top => f.write_str("top"),
            Axis::Left => f.write_str("left"),
        }
    }
}

/// Public animation mode, named like the standard `behavior` option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScrollBehavior {
    /// Jump straight to the target.
    #[default]
    Auto,
    /// Ease in and out over [`SMOOTH_DURATION`].
    Smooth,
}

impl ScrollBehavior {
    pub const NAMES: [&'static str; 2] = ["auto", "smooth"];

    pub fn name(self) -> &'static str {
        match self {
            ScrollBehavior::Auto => "auto",
            ScrollBehavior::Smooth => "smooth",
        }
    }

    pub fn easing(self) -> Easing {
        match self {
            ScrollBehavior::Auto => Easing::Linear,
            ScrollBehavior::Smooth => Easing::EaseInOut,
        }
    }

    pub fn duration(self) -> Duration {
        match self {
            ScrollBehavior::Auto => Duration::ZERO,
            ScrollBehavior::Smooth => SMOOTH_DURATION,
        }
    }
}

impl FromStr for ScrollBehavior {
    type Err = ScrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ScrollBehavior::Auto),
            "smooth" => Ok(ScrollBehavior::Smooth),
            other => Err(ScrollError::UnsupportedEasing {
                name: other.to_string(),
                supported: Self::NAMES.to_vec(),
            }),
        }
    }
}

impl TryFrom<String> for ScrollBehavior {
    type Error = ScrollError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScrollBehavior> for String {
    fn from(behavior: ScrollBehavior) -> Self {
        behavior.name().to_string()
    }
}

/// Arguments of a scroll-to call. Offsets are absolute, not deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOptions {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub behavior: ScrollBehavior,
}

impl ScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, top: f64) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: f64) -> Self {
        self.left = Some(left);
        self
    }

    pub fn behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Set the target for one axis.
    pub fn axis(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Top => self.top = Some(value),
            Axis::Left => self.left = Some(value),
        }
        self
    }

    /// Reject offsets that no scroll position can ever equal.
    pub fn validate(&self) -> Result<(), ScrollError> {
        match self.targets().find(|(_, v)| !v.is_finite()) {
            Some((axis, value)) => Err(ScrollError::NonFiniteOffset { axis, value }),
            None => Ok(()),
        }
    }

    /// Requested axes with their targets, vertical first.
    pub fn targets(&self) -> impl Iterator<Item = (Axis, f64)> {
        [(Axis::Top, self.top), (Axis::Left, self.left)]
            .into_iter()
            .filter_map(|(axis, value)| value.map(|v| (axis, v)))
    }
}

/// A resolved scroll container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScrollTarget {
    /// The page itself, scrolled through `<body>` and `<html>`.
    Page,
    Element(String),
}

impl ScrollTarget {
    /// Resolve a node id, rejecting anything that cannot scroll.
    pub fn resolve(dom: &dyn Dom, id: &str) -> Result<Self, ScrollError> {
        match dom.node_kind(id) {
            Some(kind) if kind.is_page() => Ok(ScrollTarget::Page),
            Some(NodeKind::Element) => Ok(ScrollTarget::Element(id.to_string())),
            _ => Err(ScrollError::InvalidTarget {
                target: id.to_string(),
            }),
        }
    }

    /// Current offset. The page reads `<body>` first and falls back to
    /// `<html>` when the body reports zero.
    pub fn offset(&self, dom: &dyn Dom, axis: Axis) -> f64 {
        match self {
            ScrollTarget::Element(id) => dom.scroll_offset(id, axis),
            ScrollTarget::Page => {
                let body = dom.body().map(|id| dom.scroll_offset(&id, axis));
                match body {
                    Some(value) if value != 0.0 => value,
                    _ => dom
                        .document_element()
                        .map(|id| dom.scroll_offset(&id, axis))
                        .unwrap_or(0.0),
                }
            }
        }
    }

    /// Write an offset. The page writes both `<body>` and `<html>`.
    pub fn set_offset(&self, dom: &mut dyn Dom, axis: Axis, value: f64) {
        match self {
            ScrollTarget::Element(id) => dom.set_scroll_offset(id, axis, value),
            ScrollTarget::Page => {
                let roots: Vec<String> = dom.body().into_iter().chain(dom.document_element()).collect();
                if roots.is_empty() {
                    warn!("page scroll requested but document has no body or root element");
                }
                for id in roots {
                    dom.set_scroll_offset(&id, axis, value);
                }
            }
        }
    }
}

/// State of one in-flight interpolation along one axis.
#[derive(Debug, Clone)]
pub struct AnimationRun {
    pub target: ScrollTarget,
    pub axis: Axis,
    pub from: f64,
    pub to: f64,
    pub start: Instant,
    pub duration: Duration,
    pub easing: Easing,
    generation: u64,
}

impl AnimationRun {
    pub fn new(
        target: ScrollTarget,
        axis: Axis,
        from: f64,
        to: f64,
        start: Instant,
        behavior: ScrollBehavior,
    ) -> Self {
        Self {
            target,
            axis,
            from,
            to,
            start,
            duration: behavior.duration(),
            easing: behavior.easing(),
            generation: 0,
        }
    }

    /// Elapsed fraction, clamped to 1. A zero duration is complete at once.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Position the run should be at on a frame presented at `now`.
    pub fn position_at(&self, now: Instant) -> f64 {
        lerp(self.from, self.to, self.easing.apply(self.progress(now)))
    }
}

/// Interpolate from `from` to `to`. Full progress returns `to` exactly, even
/// when `to - from` overflows.
fn lerp(from: f64, to: f64, eased: f64) -> f64 {
    if eased >= 1.0 {
        return to;
    }
    to - (to - from) * (1.0 - eased)
}

/// Something that can carry out a scroll-to call.
pub trait ScrollProvider: fmt::Debug {
    fn scroll_to(
        &mut self,
        dom: &mut dyn Dom,
        target: &str,
        options: &ScrollOptions,
    ) -> Result<(), ScrollError>;

    /// Advance pending work by one frame. Returns true while work remains.
    fn tick(&mut self, _dom: &mut dyn Dom) -> bool {
        false
    }

    fn is_animating(&self) -> bool {
        false
    }
}

/// Delegates to the host's own smooth scrolling.
#[derive(Debug, Default)]
pub struct NativeScroll;

impl ScrollProvider for NativeScroll {
    fn scroll_to(
        &mut self,
        dom: &mut dyn Dom,
        target: &str,
        options: &ScrollOptions,
    ) -> Result<(), ScrollError> {
        ScrollTarget::resolve(dom, target)?;
        options.validate()?;
        dom.native_scroll_to(target, options)
    }
}

/// Frame-driven smooth scroll for hosts without native support.
///
/// Each call to [`animate`](ScrollAnimator::animate) queues one run per
/// requested axis and asks the host for a frame. The host calls
/// [`tick`](ScrollAnimator::tick) once per presented frame; runs that have
/// not reached their target stay queued and another frame is requested.
///
/// A newer request on the same target and axis supersedes the older run,
/// which is dropped on its next step without writing.
#[derive(Debug, Default)]
pub struct ScrollAnimator {
    runs: Vec<AnimationRun>,
    /// Latest generation per (target, axis). Runs with an older one are stale.
    latest: HashMap<(ScrollTarget, Axis), u64>,
    next_generation: u64,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating `target` towards the offsets in `options`.
    ///
    /// Nothing is written and nothing is queued if the target or an offset
    /// is rejected.
    pub fn animate(
        &mut self,
        dom: &mut dyn Dom,
        target: &str,
        options: &ScrollOptions,
    ) -> Result<(), ScrollError> {
        let target = ScrollTarget::resolve(dom, target)?;
        options.validate()?;

        let start = dom.now();
        let mut queued = false;
        for (axis, to) in options.targets() {
            let mut from = target.offset(dom, axis);
            if !from.is_finite() {
                warn!("{target:?} reported non-finite {axis} offset {from}, jumping to target");
                from = to;
            }

            let mut run = AnimationRun::new(target.clone(), axis, from, to, start, options.behavior);
            self.next_generation += 1;
            run.generation = self.next_generation;
            self.latest.insert((target.clone(), axis), run.generation);

            debug!(
                "scroll {target:?} {axis} {from} -> {to} ({}, {:?})",
                run.easing, run.duration
            );
            self.runs.push(run);
            queued = true;
        }

        if queued {
            dom.request_frame();
        }
        Ok(())
    }

    /// Step every pending run once. Returns true while runs remain.
    pub fn tick(&mut self, dom: &mut dyn Dom) -> bool {
        if self.runs.is_empty() {
            return false;
        }

        let now = dom.now();
        for run in std::mem::take(&mut self.runs) {
            let key = (run.target.clone(), run.axis);
            if self.latest.get(&key) != Some(&run.generation) {
                debug!("dropping superseded scroll of {:?} {}", run.target, run.axis);
                continue;
            }

            let position = run.position_at(now);
            if position == run.to {
                run.target.set_offset(dom, run.axis, run.to);
                self.latest.remove(&key);
                debug!("scroll of {:?} {} reached {}", run.target, run.axis, run.to);
            } else {
                run.target.set_offset(dom, run.axis, position);
                self.runs.push(run);
            }
        }

        let pending = !self.runs.is_empty();
        if pending {
            dom.request_frame();
        }
        pending
    }

    /// Returns true if any run is still pending.
    pub fn is_animating(&self) -> bool {
        !self.runs.is_empty()
    }

    /// Number of queued runs, including superseded ones not yet dropped.
    pub fn pending(&self) -> usize {
        self.runs.len()
    }
}

impl ScrollProvider for ScrollAnimator {
    fn scroll_to(
        &mut self,
        dom: &mut dyn Dom,
        target: &str,
        options: &ScrollOptions,
    ) -> Result<(), ScrollError> {
        self.animate(dom, target, options)
    }

    fn tick(&mut self, dom: &mut dyn Dom) -> bool {
        ScrollAnimator::tick(self, dom)
    }

    fn is_animating(&self) -> bool {
        ScrollAnimator::is_animating(self)
    }
}

/// Pick the host's native smooth scrolling when it has one, the animator
/// otherwise.
pub fn scroll_provider(dom: &dyn Dom) -> Box<dyn ScrollProvider> {
    if dom.supports_smooth_scroll() {
        debug!("host supports smooth scrolling natively");
        Box::new(NativeScroll)
    } else {
        debug!("host lacks smooth scrolling, installing animator");
        Box::new(ScrollAnimator::new())
    }
}
