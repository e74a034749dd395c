// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed observers for drag lifecycle notifications.
//!
//! Three registration points, one per payload type. Callbacks run
//! synchronously, in registration order, from inside the controller operation
//! that produced the event.
//!
//! ```
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use kurbo::Point;
//! use understory_drag::observer::Observers;
//! use understory_drag::types::{DragEvent, DragStart};
//!
//! let seen = Rc::new(Cell::new(0));
//! let mut obs = Observers::new();
//! let s = seen.clone();
//! obs.on_drag_start(move |e: &DragStart| {
//!     assert_eq!(e.position, Point::new(3.0, 0.0));
//!     s.set(s.get() + 1);
//! });
//! obs.emit(&DragEvent::Start(DragStart { position: Point::new(3.0, 0.0) }));
//! assert_eq!(seen.get(), 1);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::types::{DragEnd, DragEvent, DragMove, DragStart};

/// Handle for removing a registered callback.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ObserverId(u32);

type Slot<E> = (ObserverId, Box<dyn FnMut(&E)>);

/// Registry of drag lifecycle callbacks.
#[derive(Default)]
pub struct Observers {
    next: u32,
    start: Vec<Slot<DragStart>>,
    moves: Vec<Slot<DragMove>>,
    end: Vec<Slot<DragEnd>>,
}

impl core::fmt::Debug for Observers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Observers")
            .field("start", &self.start.len())
            .field("moves", &self.moves.len())
            .field("end", &self.end.len())
            .finish_non_exhaustive()
    }
}

impl Observers {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `f` whenever a drag starts.
    pub fn on_drag_start(&mut self, f: impl FnMut(&DragStart) + 'static) -> ObserverId {
        let id = self.alloc();
        self.start.push((id, Box::new(f)));
        id
    }

    /// Call `f` on every move during a drag.
    pub fn on_drag_move(&mut self, f: impl FnMut(&DragMove) + 'static) -> ObserverId {
        let id = self.alloc();
        self.moves.push((id, Box::new(f)));
        id
    }

    /// Call `f` whenever a drag ends.
    pub fn on_drag_end(&mut self, f: impl FnMut(&DragEnd) + 'static) -> ObserverId {
        let id = self.alloc();
        self.end.push((id, Box::new(f)));
        id
    }

    /// Unregister a callback. Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.len();
        self.start.retain(|(i, _)| *i != id);
        self.moves.retain(|(i, _)| *i != id);
        self.end.retain(|(i, _)| *i != id);
        self.len() != before
    }

    /// Number of registered callbacks across all three kinds.
    pub fn len(&self) -> usize {
        self.start.len() + self.moves.len() + self.end.len()
    }

    /// Whether no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `event` to the callbacks registered for its kind.
    pub fn emit(&mut self, event: &DragEvent) {
        match event {
            DragEvent::Start(e) => self.start.iter_mut().for_each(|(_, f)| f(e)),
            DragEvent::Move(e) => self.moves.iter_mut().for_each(|(_, f)| f(e)),
            DragEvent::End(e) => self.end.iter_mut().for_each(|(_, f)| f(e)),
        }
    }

    fn alloc(&mut self) -> ObserverId {
        let id = ObserverId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;
    use kurbo::{Point, Vec2};

    fn log() -> Rc<RefCell<Vec<&'static str>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn emits_only_to_matching_kind() {
        let seen = log();
        let mut obs = Observers::new();
        let s = seen.clone();
        obs.on_drag_start(move |_| s.borrow_mut().push("start"));
        let s = seen.clone();
        obs.on_drag_end(move |_| s.borrow_mut().push("end"));

        obs.emit(&DragEvent::Move(DragMove {
            position: Point::ZERO,
            delta: Vec2::ZERO,
        }));
        assert!(seen.borrow().is_empty());

        obs.emit(&DragEvent::End(DragEnd {
            position: Point::ZERO,
        }));
        assert_eq!(*seen.borrow(), vec!["end"]);
    }

    #[test]
    fn callbacks_run_in_registration_order() {
        let seen = log();
        let mut obs = Observers::new();
        for name in ["a", "b", "c"] {
            let s = seen.clone();
            obs.on_drag_move(move |_| s.borrow_mut().push(name));
        }
        obs.emit(&DragEvent::Move(DragMove {
            position: Point::ZERO,
            delta: Vec2::ZERO,
        }));
        assert_eq!(*seen.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_unregisters_once() {
        let seen = log();
        let mut obs = Observers::new();
        let s = seen.clone();
        let id = obs.on_drag_start(move |_| s.borrow_mut().push("start"));
        assert_eq!(obs.len(), 1);
        assert!(obs.remove(id));
        assert!(!obs.remove(id));
        assert!(obs.is_empty());

        obs.emit(&DragEvent::Start(DragStart {
            position: Point::ZERO,
        }));
        assert!(seen.borrow().is_empty());
    }
}
