// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The headless viewer model: display state, gesture coordination, and
//! animated corrections.

use alloc::string::ToString;

use hashbrown::HashMap;
use kurbo::{Affine, Point, Rect, Size, Vec2};
use smallvec::SmallVec;
use vantage_bounds::{BoundFlags, limit_scale, limit_scroll, settle_delta};
use vantage_gesture::rotation::RotationTracker;
use vantage_gesture::{PointerId, PointerSample};
use vantage_motion::{AnimationId, AnimationKind, AnimationTicket, Tween};
use vantage_transform::Similarity;

use crate::snapshot::{
    RestoreError, SnapshotValue, get_bool, get_float, get_int, get_matrix, get_str, put_matrix,
};
use crate::{DisplayMode, ViewEvent, ViewerConfig};

/// One in-flight animated correction, as exposed to the host scheduler.
///
/// The host is expected to drive each active animation by delivering
/// monotonically increasing progress via
/// [`Viewer::animation_tick`] until a tick with progress `>= 1.0` completes
/// it. Ids of cancelled or replaced animations simply stop matching and
/// their remaining ticks fall through as no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveAnimation {
    /// Identity of this animation run.
    pub id: AnimationId,
    /// Which transform fields the animation touches.
    pub kind: AnimationKind,
    /// Intended duration, from the configuration at start time.
    pub duration_ms: u32,
}

#[derive(Clone, Copy, Debug)]
struct ScaleAnimation {
    id: AnimationId,
    duration_ms: u32,
    tween: Tween,
    pivot: Point,
}

#[derive(Clone, Copy, Debug)]
struct TranslateAnimation {
    id: AnimationId,
    duration_ms: u32,
    x: Tween,
    y: Tween,
}

#[derive(Clone, Copy, Debug)]
struct RotateTranslateAnimation {
    id: AnimationId,
    duration_ms: u32,
    angle: Tween,
    x: Tween,
    y: Tween,
    pivot: Point,
}

/// Headless model of an image viewer's transform and gesture state.
///
/// `Viewer` owns the base (fit) transform, the user's delta transform, and
/// everything needed to interpret recognized gesture primitives: elastic
/// scroll/scale limits, two-finger rotation tracking, the double-tap zoom
/// ladder, and animated corrections. It performs no drawing, event
/// recognition, or animation scheduling; hosts feed it primitives and
/// render with [`Viewer::display_transform`].
///
/// All calls are synchronous and expected to arrive on one logical thread.
/// Notifications accumulate in an internal log drained with
/// [`Viewer::take_events`].
#[derive(Clone, Debug)]
pub struct Viewer {
    config: ViewerConfig,
    viewport: Rect,
    content: Option<Size>,
    mode: DisplayMode,
    base: Similarity,
    delta: Similarity,
    /// Direction of the double-tap ladder: `true` zooms in on the next tap.
    zoom_in_next: bool,
    rotation: RotationTracker,
    gesture_active: bool,
    scaling: bool,
    gesture_start_rect: Option<Rect>,
    last_focus: Option<Point>,
    scale_anim: Option<ScaleAnimation>,
    translate_anim: Option<TranslateAnimation>,
    rotate_translate_anim: Option<RotateTranslateAnimation>,
    ticket: AnimationTicket,
    events: SmallVec<[ViewEvent; 8]>,
}

impl Viewer {
    /// Creates a viewer over the given viewport with default configuration
    /// and no content bound.
    #[must_use]
    pub fn new(viewport: Rect) -> Self {
        Self {
            config: ViewerConfig::default(),
            viewport,
            content: None,
            mode: DisplayMode::default(),
            base: Similarity::IDENTITY,
            delta: Similarity::IDENTITY,
            zoom_in_next: true,
            rotation: RotationTracker::new(),
            gesture_active: false,
            scaling: false,
            gesture_start_rect: None,
            last_focus: None,
            scale_anim: None,
            translate_anim: None,
            rotate_translate_anim: None,
            ticket: AnimationTicket::new(),
            events: SmallVec::new(),
        }
    }

    /// The viewer configuration.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Mutable access to the viewer configuration.
    pub fn config_mut(&mut self) -> &mut ViewerConfig {
        &mut self.config
    }

    /// The current viewport rectangle in view coordinates.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// The bound content size, if any.
    #[must_use]
    pub fn content_size(&self) -> Option<Size> {
        self.content
    }

    /// The current display mode.
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    /// The base (fit) transform mapping content pixels into the viewport.
    #[must_use]
    pub fn base(&self) -> Similarity {
        self.base
    }

    /// The user's delta transform, applied in view space on top of the
    /// base transform.
    #[must_use]
    pub fn delta(&self) -> Similarity {
        self.delta
    }

    /// The composed display transform: base first, then delta.
    ///
    /// Always derived from the current base and delta; it is never mutated
    /// independently.
    #[must_use]
    pub fn display(&self) -> Similarity {
        self.base.then(&self.delta)
    }

    /// The display transform as a [`kurbo::Affine`] matrix for rendering.
    #[must_use]
    pub fn display_transform(&self) -> Affine {
        self.display().to_affine()
    }

    /// The content's on-screen bounding rectangle under the display
    /// transform, or `None` while no content is bound.
    #[must_use]
    pub fn display_rect(&self) -> Option<Rect> {
        let size = self.content?;
        let d = self.display();
        let p0 = d.apply(Point::ZERO);
        let p1 = d.apply(Point::new(size.width, 0.0));
        let p2 = d.apply(Point::new(0.0, size.height));
        let p3 = d.apply(Point::new(size.width, size.height));
        let min_x = p0.x.min(p1.x).min(p2.x).min(p3.x);
        let min_y = p0.y.min(p1.y).min(p2.y).min(p3.y);
        let max_x = p0.x.max(p1.x).max(p2.x).max(p3.x);
        let max_y = p0.y.max(p1.y).max(p2.y).max(p3.y);
        Some(Rect::new(min_x, min_y, max_x, max_y))
    }

    /// Drains the accumulated notification log, oldest first.
    pub fn take_events(&mut self) -> SmallVec<[ViewEvent; 8]> {
        core::mem::take(&mut self.events)
    }

    /// Binds a new content size.
    ///
    /// The base transform is recomputed for the new content and the delta
    /// transform resets to identity: a new image starts from its fitted
    /// pose. In-flight animations are discarded. A zero viewport or content
    /// size yields a non-finite base transform that heals on the next valid
    /// update.
    pub fn set_content_size(&mut self, size: Size) {
        self.content = Some(size);
        self.base = self.base_for(size);
        self.delta = Similarity::IDENTITY;
        self.zoom_in_next = true;
        self.gesture_start_rect = None;
        self.cancel_animations();
    }

    /// Sets the viewport rectangle.
    ///
    /// The base transform is recomputed and the delta transform is
    /// recomputed — not reset — so the composed display transform is
    /// preserved across the resize.
    pub fn set_viewport(&mut self, viewport: Rect) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.refit_preserving_display();
    }

    /// Sets the display mode, preserving the composed display transform.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.refit_preserving_display();
    }

    /// Begins a touch interaction.
    ///
    /// Cancels all in-flight animations and snapshots the content rect used
    /// by the scroll limiter to judge "fit at gesture start". Called
    /// implicitly by the first pointer-down or scale-begin of an
    /// interaction; hosts may also call it directly.
    pub fn on_gesture_begin(&mut self) {
        self.cancel_animations();
        self.gesture_start_rect = self.display_rect();
        self.gesture_active = true;
    }

    /// Ends a touch interaction (all fingers lifted).
    ///
    /// A delta scale outside the configured range starts an animated
    /// correction to the violated bound (about the last gesture focus, or
    /// the viewport center) and emits [`ViewEvent::MinScaleReached`] or
    /// [`ViewEvent::MaxScaleReached`] once. Otherwise, when no scale or
    /// translate animation is in flight, the settle animation resolves any
    /// leftover elastic offset against the hard (zero-margin) limits.
    pub fn on_gesture_end(&mut self) {
        self.gesture_active = false;
        self.scaling = false;

        if let Some(bound) = limit_scale(
            self.delta.scale,
            self.config.min_scale(),
            self.config.max_scale(),
        ) {
            self.events.push(if bound == self.config.min_scale() {
                ViewEvent::MinScaleReached
            } else {
                ViewEvent::MaxScaleReached
            });
            let pivot = self.last_focus.unwrap_or_else(|| self.viewport.center());
            self.start_scale_animation(bound, pivot);
        } else if self.scale_anim.is_none()
            && self.translate_anim.is_none()
            && let Some(rect) = self.display_rect()
        {
            let correction = settle_delta(rect, self.viewport);
            self.start_translate_animation(self.delta.translation + correction);
        }
        self.gesture_start_rect = None;
    }

    /// Aborts the current interaction, resetting per-gesture state without
    /// running the gesture-end corrections.
    pub fn on_touch_cancel(&mut self) {
        self.rotation.on_cancel();
        self.gesture_active = false;
        self.scaling = false;
        self.gesture_start_rect = None;
    }

    /// Feeds a finger-down event to the rotation tracker, beginning the
    /// gesture if needed.
    pub fn on_pointer_down(&mut self, id: PointerId, pos: Point) {
        self.ensure_gesture();
        self.rotation.on_pointer_down(id, pos);
    }

    /// Feeds a batched finger-move event to the rotation tracker.
    ///
    /// While two fingers are tracked and rotation is enabled, the measured
    /// incremental angle is applied about the finger midpoint.
    pub fn on_pointer_move(&mut self, samples: &[PointerSample]) {
        let Some(step) = self.rotation.on_pointer_move(samples) else {
            return;
        };
        if !self.config.rotation_enabled {
            return;
        }
        self.delta = self
            .delta
            .with_rotation(self.delta.angle + step.delta_angle, step.pivot);
    }

    /// Feeds a finger-up event to the rotation tracker.
    pub fn on_pointer_up(&mut self, id: PointerId) {
        self.rotation.on_pointer_up(id);
    }

    /// Applies a drag scroll step through the elastic limiter.
    ///
    /// The allowed part of `delta` translates the content immediately; any
    /// margin line crossed on this step is reported through the event log.
    pub fn on_scroll(&mut self, delta: Vec2, pointer_count: u32) {
        if !self.scroll_allowed(pointer_count) {
            return;
        }
        let Some(rect) = self.display_rect() else {
            return;
        };
        let start = self.gesture_start_rect.unwrap_or(rect);
        let limit = limit_scroll(
            rect,
            delta,
            self.config.scroll_margins(),
            start,
            self.viewport,
        );
        self.delta = self
            .delta
            .with_translation(self.delta.translation + limit.allowed);
        self.push_bound_events(limit.reached);
    }

    /// Applies a release fling: the velocity is extrapolated over the
    /// animation duration, limited elastically, and the result is applied
    /// as an animated translation.
    pub fn on_fling(&mut self, velocity: Vec2, pointer_count: u32) {
        if !self.scroll_allowed(pointer_count) {
            return;
        }
        let Some(rect) = self.display_rect() else {
            return;
        };
        let extrapolated = velocity * (f64::from(self.config.animation_duration_ms()) / 1000.0);
        let start = self.gesture_start_rect.unwrap_or(rect);
        let limit = limit_scroll(
            rect,
            extrapolated,
            self.config.scroll_margins(),
            start,
            self.viewport,
        );
        self.start_translate_animation(self.delta.translation + limit.allowed);
        self.push_bound_events(limit.reached);
    }

    /// Begins a pinch gesture at the given focus point.
    pub fn on_scale_begin(&mut self, focus: Point) {
        if !self.config.scale_enabled {
            return;
        }
        self.ensure_gesture();
        self.scaling = true;
        self.last_focus = Some(focus);
    }

    /// Applies one pinch step: the delta scale is multiplied by `factor`,
    /// clamped into the elastic range, and applied about the focus point.
    pub fn on_scale(&mut self, focus: Point, factor: f64) {
        if !self.config.scale_enabled {
            return;
        }
        let target = (self.delta.scale * factor).clamp(
            self.config.min_scale() - self.config.min_scale_margin(),
            self.config.max_scale() + self.config.max_scale_margin(),
        );
        self.delta = self.delta.with_scale(target, focus);
        self.last_focus = Some(focus);
    }

    /// Ends the pinch gesture. Scale limits are enforced at
    /// [`Viewer::on_gesture_end`].
    pub fn on_scale_end(&mut self) {
        self.scaling = false;
    }

    /// Advances the double-tap zoom ladder, pivoting at `pos` (or the
    /// viewport center).
    ///
    /// Zoom-in taps animate the scale up by one jump increment until the
    /// maximum is reached, which flips the direction; the zoom-out tap
    /// animates back to the minimum scale and additionally animates rotation
    /// and translation back to the identity pose.
    pub fn on_double_tap(&mut self, pos: Option<Point>) {
        if !self.config.double_tap_enabled {
            return;
        }
        self.cancel_animations();
        let pivot = pos.unwrap_or_else(|| self.viewport.center());
        self.events.push(ViewEvent::DoubleTap);

        if self.zoom_in_next {
            let target = (self.delta.scale + self.config.scale_jump()).min(self.config.max_scale());
            if target >= self.config.max_scale() {
                self.zoom_in_next = false;
            }
            self.start_scale_animation(target, pivot);
        } else {
            self.zoom_in_next = true;
            self.start_scale_animation(self.config.min_scale(), pivot);
            self.start_rotate_translate_animation(0.0, self.viewport.center(), Vec2::ZERO);
        }
    }

    /// The in-flight animation of the given kind, if any.
    #[must_use]
    pub fn active_animation(&self, kind: AnimationKind) -> Option<ActiveAnimation> {
        match kind {
            AnimationKind::Scale => self.scale_anim.map(|a| ActiveAnimation {
                id: a.id,
                kind,
                duration_ms: a.duration_ms,
            }),
            AnimationKind::Translate => self.translate_anim.map(|a| ActiveAnimation {
                id: a.id,
                kind,
                duration_ms: a.duration_ms,
            }),
            AnimationKind::RotateTranslate => self.rotate_translate_anim.map(|a| ActiveAnimation {
                id: a.id,
                kind,
                duration_ms: a.duration_ms,
            }),
        }
    }

    /// All in-flight animations, in recommended tick order.
    ///
    /// The rotate-translate animation is listed last so that, when hosts
    /// tick in this order, its translation write lands after the scale
    /// animation's within each frame.
    pub fn animations(&self) -> impl Iterator<Item = ActiveAnimation> {
        [
            self.active_animation(AnimationKind::Scale),
            self.active_animation(AnimationKind::Translate),
            self.active_animation(AnimationKind::RotateTranslate),
        ]
        .into_iter()
        .flatten()
    }

    /// Delivers one eased progress tick to the animation with the given id.
    ///
    /// Progress is expected to increase monotonically per animation; a tick
    /// with progress `>= 1.0` applies the exact end values, retires the
    /// animation, and emits its completion event. Ticks for ids that are no
    /// longer in flight are ignored. Returns whether the id was live.
    pub fn animation_tick(&mut self, id: AnimationId, progress: f64) -> bool {
        if let Some(anim) = self.scale_anim
            && anim.id == id
        {
            let value = anim.tween.sample(progress);
            self.delta = self.delta.with_scale(value, anim.pivot);
            if progress >= 1.0 {
                self.scale_anim = None;
                self.events.push(ViewEvent::ScaleAnimationCompleted);
            }
            return true;
        }
        if let Some(anim) = self.translate_anim
            && anim.id == id
        {
            let value = Vec2::new(anim.x.sample(progress), anim.y.sample(progress));
            self.delta = self.delta.with_translation(value);
            if progress >= 1.0 {
                self.translate_anim = None;
                self.events.push(ViewEvent::TranslateAnimationCompleted);
            }
            return true;
        }
        if let Some(anim) = self.rotate_translate_anim
            && anim.id == id
        {
            let angle = anim.angle.sample(progress);
            let value = Vec2::new(anim.x.sample(progress), anim.y.sample(progress));
            self.delta = self
                .delta
                .with_rotation_and_translation(angle, anim.pivot, value);
            if progress >= 1.0 {
                self.rotate_translate_anim = None;
                self.events.push(ViewEvent::RotateTranslateAnimationCompleted);
            }
            return true;
        }
        false
    }

    /// Serializes the viewer's persistable state into a flat key-value map.
    ///
    /// The map holds the three matrices (base, delta, and the derived
    /// display matrix) flattened to nine `Float` entries each, all boolean
    /// toggles, the display-mode name, and the numeric configuration.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<alloc::string::String, SnapshotValue> {
        let mut map = HashMap::new();
        put_matrix(&mut map, "base", &self.base.to_matrix());
        put_matrix(&mut map, "delta", &self.delta.to_matrix());
        put_matrix(&mut map, "display", &self.display().to_matrix());

        map.insert(
            "display_mode".to_string(),
            SnapshotValue::Str(self.mode.name().to_string()),
        );
        for (key, value) in [
            ("min_scale", self.config.min_scale()),
            ("max_scale", self.config.max_scale()),
            ("scale_jump", self.config.scale_jump()),
            ("min_scale_margin", self.config.min_scale_margin()),
            ("max_scale_margin", self.config.max_scale_margin()),
            ("scroll_margin_left", self.config.scroll_margins().left),
            ("scroll_margin_top", self.config.scroll_margins().top),
            ("scroll_margin_right", self.config.scroll_margins().right),
            ("scroll_margin_bottom", self.config.scroll_margins().bottom),
        ] {
            map.insert(key.to_string(), SnapshotValue::Float(value));
        }
        map.insert(
            "animation_duration_ms".to_string(),
            SnapshotValue::Int(i64::from(self.config.animation_duration_ms())),
        );
        for (key, value) in [
            ("rotation_enabled", self.config.rotation_enabled),
            ("scale_enabled", self.config.scale_enabled),
            ("scroll_enabled", self.config.scroll_enabled),
            (
                "two_finger_scroll_enabled",
                self.config.two_finger_scroll_enabled,
            ),
            ("double_tap_enabled", self.config.double_tap_enabled),
        ] {
            map.insert(key.to_string(), SnapshotValue::Bool(value));
        }
        map
    }

    /// Restores persisted state from a flat key-value map.
    ///
    /// All values are parsed and validated before anything is committed, so
    /// a failed restore leaves the viewer untouched: a malformed matrix
    /// (including the persisted display matrix, which is validated even
    /// though it is rederived) aborts with the matrix error, as do missing
    /// or mistyped keys and unknown display modes. After a successful
    /// restore the display transform is recomposed from base and delta.
    ///
    /// Restore carries no content or viewport geometry; hosts typically
    /// rebind those first and then restore, which overwrites the freshly
    /// computed fit with the persisted transforms.
    pub fn restore(
        &mut self,
        map: &HashMap<alloc::string::String, SnapshotValue>,
    ) -> Result<(), RestoreError> {
        let base = Similarity::from_matrix(&get_matrix(map, "base")?, true)?;
        let delta = Similarity::from_matrix(&get_matrix(map, "delta")?, true)?;
        // The display matrix is derivable and is only validated here; the
        // committed display transform is recomposed from base and delta.
        let _ = Similarity::from_matrix(&get_matrix(map, "display")?, true)?;

        let mode_name = get_str(map, "display_mode")?;
        let mode = DisplayMode::from_name(mode_name)
            .ok_or_else(|| RestoreError::UnknownDisplayMode(mode_name.to_string()))?;

        let min_scale = get_float(map, "min_scale")?;
        let max_scale = get_float(map, "max_scale")?;
        let scale_jump = get_float(map, "scale_jump")?;
        let min_scale_margin = get_float(map, "min_scale_margin")?;
        let max_scale_margin = get_float(map, "max_scale_margin")?;
        let margins = vantage_bounds::Margins::new(
            get_float(map, "scroll_margin_left")?,
            get_float(map, "scroll_margin_top")?,
            get_float(map, "scroll_margin_right")?,
            get_float(map, "scroll_margin_bottom")?,
        );
        let duration = u32::try_from(get_int(map, "animation_duration_ms")?)
            .map_err(|_| RestoreError::WrongType("animation_duration_ms".to_string()))?;
        let rotation_enabled = get_bool(map, "rotation_enabled")?;
        let scale_enabled = get_bool(map, "scale_enabled")?;
        let scroll_enabled = get_bool(map, "scroll_enabled")?;
        let two_finger_scroll_enabled = get_bool(map, "two_finger_scroll_enabled")?;
        let double_tap_enabled = get_bool(map, "double_tap_enabled")?;

        // Commit. Numeric values go through the validating setters; an
        // out-of-domain value is rejected there and the previous value
        // stays, matching assignment semantics.
        self.base = base;
        self.delta = delta;
        self.mode = mode;
        self.config.set_min_scale(min_scale);
        self.config.set_max_scale(max_scale);
        self.config.set_scale_jump(scale_jump);
        self.config.set_min_scale_margin(min_scale_margin);
        self.config.set_max_scale_margin(max_scale_margin);
        self.config.set_scroll_margins(margins);
        self.config.set_animation_duration_ms(duration);
        self.config.rotation_enabled = rotation_enabled;
        self.config.scale_enabled = scale_enabled;
        self.config.scroll_enabled = scroll_enabled;
        self.config.two_finger_scroll_enabled = two_finger_scroll_enabled;
        self.config.double_tap_enabled = double_tap_enabled;
        self.cancel_animations();
        Ok(())
    }

    /// Snapshot of the viewer state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewerDebugInfo {
        ViewerDebugInfo {
            viewport: self.viewport,
            content: self.content,
            mode: self.mode,
            base: self.base,
            delta: self.delta,
            display: self.display(),
            gesture_active: self.gesture_active,
            scaling: self.scaling,
            rotating: self.rotation.is_rotating(),
            next_double_tap_zooms_in: self.zoom_in_next,
            pending_events: self.events.len(),
        }
    }

    fn ensure_gesture(&mut self) {
        if !self.gesture_active {
            self.on_gesture_begin();
        }
    }

    fn scroll_allowed(&self, pointer_count: u32) -> bool {
        self.config.scroll_enabled
            && (pointer_count <= 1 || self.config.two_finger_scroll_enabled)
    }

    fn base_for(&self, content: Size) -> Similarity {
        let sx = self.viewport.width() / content.width;
        let sy = self.viewport.height() / content.height;
        let scale = match self.mode {
            DisplayMode::Fit => sx.min(sy).min(1.0),
            DisplayMode::Fill => sx.min(sy),
            DisplayMode::Cover => sx.max(sy),
            DisplayMode::Original => 1.0,
        };
        let center = self.viewport.center();
        let translation = Vec2::new(
            center.x - scale * content.width / 2.0,
            center.y - scale * content.height / 2.0,
        );
        Similarity::new(scale, 0.0, translation)
    }

    fn refit_preserving_display(&mut self) {
        let Some(content) = self.content else {
            return;
        };
        let display = self.display();
        self.base = self.base_for(content);
        self.delta = self.base.inverse().then(&display);
    }

    fn push_bound_events(&mut self, reached: BoundFlags) {
        for (flag, event) in [
            (BoundFlags::LEFT, ViewEvent::LeftBoundReached),
            (BoundFlags::TOP, ViewEvent::TopBoundReached),
            (BoundFlags::RIGHT, ViewEvent::RightBoundReached),
            (BoundFlags::BOTTOM, ViewEvent::BottomBoundReached),
        ] {
            if reached.contains(flag) {
                self.events.push(event);
            }
        }
    }

    fn start_scale_animation(&mut self, to: f64, pivot: Point) {
        self.scale_anim = Some(ScaleAnimation {
            id: self.ticket.next(),
            duration_ms: self.config.animation_duration_ms(),
            tween: Tween::new(self.delta.scale, to, self.config.easing()),
            pivot,
        });
    }

    fn start_translate_animation(&mut self, to: Vec2) {
        let easing = self.config.easing();
        self.translate_anim = Some(TranslateAnimation {
            id: self.ticket.next(),
            duration_ms: self.config.animation_duration_ms(),
            x: Tween::new(self.delta.translation.x, to.x, easing),
            y: Tween::new(self.delta.translation.y, to.y, easing),
        });
    }

    fn start_rotate_translate_animation(&mut self, to_angle: f64, pivot: Point, to: Vec2) {
        let easing = self.config.easing();
        self.rotate_translate_anim = Some(RotateTranslateAnimation {
            id: self.ticket.next(),
            duration_ms: self.config.animation_duration_ms(),
            angle: Tween::new(self.delta.angle, to_angle, easing),
            x: Tween::new(self.delta.translation.x, to.x, easing),
            y: Tween::new(self.delta.translation.y, to.y, easing),
            pivot,
        });
    }

    fn cancel_animations(&mut self) {
        self.scale_anim = None;
        self.translate_anim = None;
        self.rotate_translate_anim = None;
    }
}

/// Debug snapshot of a [`Viewer`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewerDebugInfo {
    /// Current viewport rectangle.
    pub viewport: Rect,
    /// Bound content size, if any.
    pub content: Option<Size>,
    /// Current display mode.
    pub mode: DisplayMode,
    /// Base (fit) transform.
    pub base: Similarity,
    /// User delta transform.
    pub delta: Similarity,
    /// Composed display transform.
    pub display: Similarity,
    /// Whether a touch interaction is in progress.
    pub gesture_active: bool,
    /// Whether a pinch gesture is in progress.
    pub scaling: bool,
    /// Whether two fingers are currently tracked for rotation.
    pub rotating: bool,
    /// Direction of the double-tap ladder.
    pub next_double_tap_zooms_in: bool,
    /// Number of undrained notifications.
    pub pending_events: usize,
}
