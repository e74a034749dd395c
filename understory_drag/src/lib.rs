// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag --heading-base-level=0

//! Understory Drag: a headless, `no_std` controller for pointer dragging.
//!
//! ## Overview
//!
//! This crate turns a press → move → release pointer sequence into a running
//! offset for one surface, optionally kept inside a container, and reports the
//! drag as three typed notifications.
//! It does not render, lay out, or persist anything. The toolkit owns the
//! surface and the window and exposes them through small traits.
//!
//! ## Collaborators
//!
//! - [`Surface`](crate::host::Surface): measures itself, accepts a press
//!   listener, and applies a translation.
//! - [`PointerHost`](crate::host::PointerHost): the window. Reports its
//!   viewport size and hands out ambient move/release subscriptions.
//! - [`Measure`](crate::host::Measure): any bounding element.
//!
//! The host is injected at attach time rather than read from global state, so
//! several controllers (or test doubles) can coexist.
//!
//! ## Bounds
//!
//! With [`DragConfig::enforce_bounds`](crate::types::DragConfig::enforce_bounds) set,
//! each axis is checked independently: a candidate offset that would push the
//! surface out of the container is dropped for that axis only, so the surface
//! slides along the edge it hits. Touching an edge is allowed.
//! Sizes are measured on every move, so resizing mid-drag is fine.
//! See [`bounds`](crate::bounds).
//!
//! ## Notifications
//!
//! - [`DragStart`](crate::types::DragStart): press position.
//! - [`DragMove`](crate::types::DragMove): current position and the raw
//!   (pre-bounds) delta since the previous move.
//! - [`DragEnd`](crate::types::DragEnd): release position.
//!
//! They are delivered synchronously to observers registered on the
//! controller, and also returned from the input call that produced them.
//!
//! ## Workflow
//!
//! 1) Implement [`Surface`](crate::host::Surface) and
//!    [`PointerHost`](crate::host::PointerHost) for your toolkit handles.
//! 2) [`DragController::attach`](crate::controller::DragController::attach) with a
//!    [`DragConfig`](crate::types::DragConfig).
//! 3) Forward presses on the surface to
//!    [`press`](crate::controller::DragController::press), and ambient moves and
//!    releases to [`pointer_move`](crate::controller::DragController::pointer_move)
//!    and [`release`](crate::controller::DragController::release) while the host
//!    reports those subscriptions live.
//! 4) Call [`destroy`](crate::controller::DragController::destroy) (or drop the
//!    controller) before the surface goes away.
//!
//! ## Logging
//!
//! Lifecycle transitions are reported with [`tracing`] at `debug`, moves at
//! `trace`, and degraded measurements at `warn`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod bounds;
pub mod controller;
pub mod error;
pub mod host;
pub mod observer;
pub mod session;
pub mod types;

pub use controller::DragController;
pub use error::{AttachError, InvalidTarget};
pub use types::{DragConfig, DragEnd, DragEvent, DragMove, DragStart};
