// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewer's observer log: one tagged event type for every notification
//! the viewer emits.

/// A notification emitted by the viewer.
///
/// Events accumulate in order on the viewer and are drained with
/// [`Viewer::take_events`](crate::Viewer::take_events). Modeling every
/// notification as one sum type keeps observation to a single log instead of
/// a dozen optional callback slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// A scroll step was clamped against the left margin line.
    LeftBoundReached,
    /// A scroll step was clamped against the top margin line.
    TopBoundReached,
    /// A scroll step was clamped against the right margin line.
    RightBoundReached,
    /// A scroll step was clamped against the bottom margin line.
    BottomBoundReached,
    /// A gesture ended below the minimum scale; an animated correction to
    /// the minimum was started.
    MinScaleReached,
    /// A gesture ended above the maximum scale; an animated correction to
    /// the maximum was started.
    MaxScaleReached,
    /// A double tap was recognized and the zoom ladder advanced.
    DoubleTap,
    /// The animated scale correction ran to completion.
    ScaleAnimationCompleted,
    /// The animated translation ran to completion.
    TranslateAnimationCompleted,
    /// The animated rotate-and-translate return to origin ran to
    /// completion.
    RotateTranslateAnimationCompleted,
}
