// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the drag controller: payloads, configuration, phases, and listener tokens.
//!
//! ## Overview
//!
//! These types describe the controller's inputs and outputs.
//! They are consumed by the [`controller`](crate::controller) and by the
//! collaborators implementing the traits in [`host`](crate::host).

use kurbo::{Point, Vec2};

/// Payload of the `dragstart` notification.
///
/// Emitted once per drag, synchronously from
/// [`DragController::press`](crate::controller::DragController::press).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragStart {
    /// Pointer position at the press, in absolute coordinates.
    pub position: Point,
}

/// Payload of the `dragmove` notification.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragMove {
    /// Current pointer position, in absolute coordinates.
    pub position: Point,
    /// Raw delta since the previous move (or since the press for the first move).
    ///
    /// This is computed before any bounds are applied, so it may differ from
    /// the change in [`DragController::offset`](crate::controller::DragController::offset).
    pub delta: Vec2,
}

/// Payload of the `dragend` notification.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragEnd {
    /// Pointer position at the release, in absolute coordinates.
    pub position: Point,
}

/// A lifecycle notification produced by the controller.
///
/// Returned from the controller's input operations and delivered to the
/// callbacks registered in [`Observers`](crate::observer::Observers).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragEvent {
    /// A drag began.
    Start(DragStart),
    /// The pointer moved during a drag.
    Move(DragMove),
    /// A drag ended.
    End(DragEnd),
}

impl DragEvent {
    /// Pointer position carried by every payload.
    pub fn position(&self) -> Point {
        match self {
            Self::Start(e) => e.position,
            Self::Move(e) => e.position,
            Self::End(e) => e.position,
        }
    }
}

/// Raw pointer input, for hosts that prefer a single entry point.
///
/// See [`DragController::handle`](crate::controller::DragController::handle).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed on the surface.
    Down(Point),
    /// Pointer moved anywhere in the host.
    Move(Point),
    /// Pointer released anywhere in the host.
    Up(Point),
}

/// Ambient signals the controller listens to while a drag is active.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AmbientSignal {
    /// Pointer movement.
    Move,
    /// Pointer release.
    Release,
}

/// Token identifying a listener registration.
///
/// Handed out by [`Surface::listen_press`](crate::host::Surface::listen_press) and
/// [`PointerHost::subscribe`](crate::host::PointerHost::subscribe), and handed back
/// to the same collaborator to unregister.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wrap a host-defined listener number.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-defined listener number.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Lifecycle phase of a [`DragController`](crate::controller::DragController).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DragPhase {
    /// Only the press listener is active.
    Idle,
    /// A drag session is active and ambient listeners are subscribed.
    Dragging,
    /// Torn down; every operation is a no-op.
    Destroyed,
}

/// Controller configuration, fixed at attach time.
///
/// `C` is the container handle type. When `container` is `None` the host
/// viewport bounds the surface.
///
/// ```
/// use understory_drag::types::DragConfig;
///
/// let free: DragConfig = DragConfig::unbounded();
/// assert!(!free.enforce_bounds);
///
/// let in_window: DragConfig = DragConfig::bounded();
/// assert!(in_window.enforce_bounds && in_window.container.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragConfig<C = crate::host::NoContainer> {
    /// Reject per-axis offset updates that would leave the container.
    pub enforce_bounds: bool,
    /// Bounding element; the host viewport is used when absent.
    pub container: Option<C>,
}

impl<C> Default for DragConfig<C> {
    fn default() -> Self {
        Self {
            enforce_bounds: false,
            container: None,
        }
    }
}

impl DragConfig {
    /// Drag freely, without bounds.
    pub const fn unbounded() -> Self {
        Self {
            enforce_bounds: false,
            container: None,
        }
    }

    /// Keep the surface inside the host viewport.
    pub const fn bounded() -> Self {
        Self {
            enforce_bounds: true,
            container: None,
        }
    }
}

impl<C> DragConfig<C> {
    /// Keep the surface inside `container`.
    pub const fn within(container: C) -> Self {
        Self {
            enforce_bounds: true,
            container: Some(container),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NoContainer;

    #[test]
    fn default_config_is_unbounded() {
        let c: DragConfig = DragConfig::default();
        assert_eq!(c, DragConfig::<NoContainer>::unbounded());
    }

    #[test]
    fn within_enables_bounds() {
        let c = DragConfig::within(7_u32);
        assert!(c.enforce_bounds);
        assert_eq!(c.container, Some(7));
    }

    #[test]
    fn event_position_matches_payload() {
        let p = Point::new(3.0, 4.0);
        let mv = DragEvent::Move(DragMove {
            position: p,
            delta: Vec2::new(1.0, 1.0),
        });
        assert_eq!(mv.position(), p);
        assert_eq!(DragEvent::End(DragEnd { position: p }).position(), p);
    }

    #[test]
    fn listener_id_roundtrips_raw_value() {
        assert_eq!(ListenerId::new(42).get(), 42);
    }
}
