// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag controller: press → move* → release, applied to one surface.
//!
//! ## Overview
//!
//! A [`DragController`] is attached to exactly one [`Surface`]. It listens for
//! presses on that surface and, only while a drag is active, for ambient
//! pointer moves and releases on the [`PointerHost`].
//!
//! ## Lifecycle
//!
//! - `Idle` → `Dragging` on [`press`](DragController::press): anchor the
//!   session, subscribe ambient move and release, emit [`DragStart`].
//! - `Dragging` → `Dragging` on [`pointer_move`](DragController::pointer_move):
//!   take the delta since the anchor, update the offset (bounded if
//!   configured), set the surface translation, emit [`DragMove`] with the raw delta.
//! - `Dragging` → `Idle` on [`release`](DragController::release): emit
//!   [`DragEnd`], unsubscribe ambient listeners. The press listener stays.
//! - Any → `Destroyed` on [`destroy`](DragController::destroy) (or drop):
//!   unregister everything, emit nothing. Later calls do nothing.
//!
//! The offset persists across drags, so successive drags accumulate.
//!
//! ## Routing
//!
//! The host delivers signals by calling the input operations (or
//! [`handle`](DragController::handle)). Signals arriving in a phase where the
//! controller holds no matching subscription are ignored and return `None`.
//!
//! ## See Also
//!
//! [`bounds`](crate::bounds) for the offset arithmetic.

use kurbo::{Point, Vec2};

use crate::bounds::{BoundsCheck, next_offset};
use crate::error::{AttachError, InvalidTarget};
use crate::host::{Measure, NoContainer, PointerHost, Surface};
use crate::observer::{ObserverId, Observers};
use crate::session::DragSession;
use crate::types::{
    AmbientSignal, DragConfig, DragEnd, DragEvent, DragMove, DragPhase, DragStart, ListenerId,
    PointerEvent,
};

#[derive(Debug)]
enum State {
    Idle {
        press: ListenerId,
    },
    Dragging {
        press: ListenerId,
        session: DragSession,
        moves: ListenerId,
        release: ListenerId,
    },
    Destroyed,
}

/// Pointer drag controller for a single surface.
///
/// ## Usage
///
/// - [`DragController::attach`] with the surface, the pointer host, and a [`DragConfig`].
/// - Register observers with [`on_drag_start`](Self::on_drag_start),
///   [`on_drag_move`](Self::on_drag_move), and [`on_drag_end`](Self::on_drag_end).
/// - Forward pointer input with [`press`](Self::press), [`pointer_move`](Self::pointer_move),
///   and [`release`](Self::release), or [`handle`](Self::handle).
/// - Call [`destroy`](Self::destroy) (or drop the controller) before discarding the surface.
///
/// ```
/// use kurbo::{Point, Size, Vec2};
/// use understory_drag::controller::DragController;
/// use understory_drag::host::{Measure, PointerHost, Surface};
/// use understory_drag::types::{AmbientSignal, DragConfig, ListenerId};
///
/// #[derive(Default)]
/// struct Node { translation: Vec2 }
/// impl Measure for Node {
///     fn size(&self) -> Option<Size> { Some(Size::new(80.0, 40.0)) }
/// }
/// impl Surface for Node {
///     fn listen_press(&mut self) -> Option<ListenerId> { Some(ListenerId::new(0)) }
///     fn unlisten_press(&mut self, _: ListenerId) {}
///     fn set_translation(&mut self, offset: Vec2) { self.translation = offset; }
/// }
///
/// struct Window;
/// impl PointerHost for Window {
///     fn is_available(&self) -> bool { true }
///     fn viewport_size(&self) -> Option<Size> { Some(Size::new(400.0, 300.0)) }
///     fn subscribe(&mut self, s: AmbientSignal) -> Option<ListenerId> {
///         Some(ListenerId::new(s as u64 + 1))
///     }
///     fn unsubscribe(&mut self, _: ListenerId) {}
/// }
///
/// let mut node = Node::default();
/// let mut drag = DragController::attach(&mut node, Window, DragConfig::bounded()).unwrap();
/// drag.press(Point::new(10.0, 10.0));
/// drag.pointer_move(Point::new(15.0, 12.0));
/// drag.pointer_move(Point::new(400.0, 12.0));
/// drag.release(Point::new(400.0, 12.0));
/// assert_eq!(drag.offset(), Vec2::new(5.0, 2.0));
/// drop(drag);
/// assert_eq!(node.translation, Vec2::new(5.0, 2.0));
/// ```
pub struct DragController<S: Surface, H: PointerHost, C: Measure = NoContainer> {
    surface: S,
    host: H,
    config: DragConfig<C>,
    offset: Vec2,
    state: State,
    observers: Observers,
}

impl<S: Surface, H: PointerHost, C: Measure> core::fmt::Debug for DragController<S, H, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragController")
            .field("enforce_bounds", &self.config.enforce_bounds)
            .field("offset", &self.offset)
            .field("state", &self.state)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

impl<S: Surface, H: PointerHost, C: Measure> DragController<S, H, C> {
    /// Attach a controller to `surface`.
    ///
    /// Registers the press listener and nothing else. Fails without leaving
    /// any listener registered if the surface cannot be measured or cannot
    /// listen, or if the host has no ambient pointer input.
    pub fn attach(mut surface: S, host: H, config: DragConfig<C>) -> Result<Self, AttachError> {
        if surface.size().is_none() {
            return Err(InvalidTarget::Unmeasurable.into());
        }
        if !host.is_available() {
            return Err(AttachError::EnvironmentUnavailable);
        }
        let press = surface.listen_press().ok_or(InvalidTarget::CannotListen)?;
        tracing::debug!(
            enforce_bounds = config.enforce_bounds,
            container = config.container.is_some(),
            "drag controller attached"
        );
        Ok(Self {
            surface,
            host,
            config,
            offset: Vec2::ZERO,
            state: State::Idle { press },
            observers: Observers::new(),
        })
    }

    /// Begin a drag at `pos`.
    ///
    /// Ignored unless idle. Returns the emitted [`DragEvent::Start`].
    pub fn press(&mut self, pos: Point) -> Option<DragEvent> {
        let State::Idle { press } = self.state else {
            return None;
        };
        let Some(moves) = self.host.subscribe(AmbientSignal::Move) else {
            tracing::warn!("could not subscribe to pointer moves; drag refused");
            return None;
        };
        let Some(release) = self.host.subscribe(AmbientSignal::Release) else {
            self.host.unsubscribe(moves);
            tracing::warn!("could not subscribe to pointer release; drag refused");
            return None;
        };
        self.state = State::Dragging {
            press,
            session: DragSession::start(pos),
            moves,
            release,
        };
        tracing::debug!(x = pos.x, y = pos.y, "drag started");
        Some(self.emit(DragEvent::Start(DragStart { position: pos })))
    }

    /// Continue a drag with the pointer now at `pos`.
    ///
    /// Ignored unless dragging. Returns the emitted [`DragEvent::Move`].
    pub fn pointer_move(&mut self, pos: Point) -> Option<DragEvent> {
        let State::Dragging { session, .. } = &mut self.state else {
            return None;
        };
        let delta = session.advance(pos);
        self.offset = next_offset(self.offset, delta, self.bounds_check());
        self.surface.set_translation(self.offset);
        tracing::trace!(
            dx = delta.x,
            dy = delta.y,
            ox = self.offset.x,
            oy = self.offset.y,
            "drag moved"
        );
        Some(self.emit(DragEvent::Move(DragMove {
            position: pos,
            delta,
        })))
    }

    /// End a drag with the pointer released at `pos`.
    ///
    /// Ignored unless dragging. Returns the emitted [`DragEvent::End`].
    pub fn release(&mut self, pos: Point) -> Option<DragEvent> {
        let State::Dragging {
            press,
            moves,
            release,
            ..
        } = self.state
        else {
            return None;
        };
        let event = self.emit(DragEvent::End(DragEnd { position: pos }));
        self.host.unsubscribe(moves);
        self.host.unsubscribe(release);
        self.state = State::Idle { press };
        tracing::debug!(
            x = pos.x,
            y = pos.y,
            ox = self.offset.x,
            oy = self.offset.y,
            "drag ended"
        );
        Some(event)
    }

    /// Route a raw pointer event to [`press`](Self::press),
    /// [`pointer_move`](Self::pointer_move), or [`release`](Self::release).
    pub fn handle(&mut self, event: PointerEvent) -> Option<DragEvent> {
        match event {
            PointerEvent::Down(p) => self.press(p),
            PointerEvent::Move(p) => self.pointer_move(p),
            PointerEvent::Up(p) => self.release(p),
        }
    }

    /// Unregister every listener. Emits nothing; safe to call repeatedly.
    pub fn destroy(&mut self) {
        match core::mem::replace(&mut self.state, State::Destroyed) {
            State::Idle { press } => {
                self.surface.unlisten_press(press);
            }
            State::Dragging {
                press,
                moves,
                release,
                ..
            } => {
                self.host.unsubscribe(moves);
                self.host.unsubscribe(release);
                self.surface.unlisten_press(press);
                tracing::debug!("drag controller destroyed mid-drag");
            }
            State::Destroyed => return,
        }
        tracing::debug!("drag controller detached");
    }

    /// Call `f` whenever a drag starts.
    pub fn on_drag_start(&mut self, f: impl FnMut(&DragStart) + 'static) -> ObserverId {
        self.observers.on_drag_start(f)
    }

    /// Call `f` on every move during a drag.
    pub fn on_drag_move(&mut self, f: impl FnMut(&DragMove) + 'static) -> ObserverId {
        self.observers.on_drag_move(f)
    }

    /// Call `f` whenever a drag ends.
    pub fn on_drag_end(&mut self, f: impl FnMut(&DragEnd) + 'static) -> ObserverId {
        self.observers.on_drag_end(f)
    }

    /// Unregister an observer. Returns `false` if it was not registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    /// Cumulative translation applied to the surface.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> DragPhase {
        match self.state {
            State::Idle { .. } => DragPhase::Idle,
            State::Dragging { .. } => DragPhase::Dragging,
            State::Destroyed => DragPhase::Destroyed,
        }
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging { .. })
    }

    /// Last observed pointer position of the active drag, if any.
    pub fn anchor(&self) -> Option<Point> {
        match &self.state {
            State::Dragging { session, .. } => Some(session.anchor()),
            _ => None,
        }
    }

    /// Configuration supplied at attach time.
    pub fn config(&self) -> &DragConfig<C> {
        &self.config
    }

    /// The surface handle.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The pointer host handle.
    pub fn host(&self) -> &H {
        &self.host
    }

    fn bounds_check(&self) -> BoundsCheck {
        if !self.config.enforce_bounds {
            return BoundsCheck::Unbounded;
        }
        let surface = self.surface.size();
        let container = match &self.config.container {
            Some(c) => c.size(),
            None => self.host.viewport_size(),
        };
        if surface.is_none() {
            tracing::warn!("surface unmeasurable during drag; holding position");
        }
        if container.is_none() {
            tracing::warn!("container unmeasurable during drag; moving unbounded");
        }
        BoundsCheck::Bounded { surface, container }
    }

    fn emit(&mut self, event: DragEvent) -> DragEvent {
        self.observers.emit(&event);
        event
    }
}

impl<S: Surface, H: PointerHost, C: Measure> Drop for DragController<S, H, C> {
    fn drop(&mut self) {
        self.destroy();
    }
}
