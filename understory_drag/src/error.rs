// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attach-time errors.
//!
//! Only [`DragController::attach`](crate::controller::DragController::attach)
//! fails. Problems that show up later, during a drag, are absorbed by the
//! controller and logged instead.

/// Why a surface was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InvalidTarget {
    /// The surface reported no size.
    #[error("surface cannot be measured")]
    Unmeasurable,
    /// The surface refused the press listener.
    #[error("surface cannot receive listeners")]
    CannotListen,
}

/// Error returned by [`DragController::attach`](crate::controller::DragController::attach).
///
/// When attach fails no listener is left registered anywhere.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum AttachError {
    /// The surface cannot be dragged.
    #[error("invalid drag target: {0}")]
    InvalidTarget(#[from] InvalidTarget),
    /// The host offers no ambient pointer signals.
    #[error("ambient pointer input is unavailable")]
    EnvironmentUnavailable,
}
