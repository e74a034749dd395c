// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: the anchor between a press and its release.
//!
//! ## Usage
//!
//! 1) Create a session with [`DragSession::start`] at the press position.
//! 2) On each move, call [`DragSession::advance`] to get the delta since the
//!    previous move; the anchor follows the pointer.
//! 3) Drop the session on release.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_drag::session::DragSession;
//!
//! let mut s = DragSession::start(Point::new(10.0, 10.0));
//! assert_eq!(s.advance(Point::new(15.0, 12.0)), Vec2::new(5.0, 2.0));
//! assert_eq!(s.advance(Point::new(16.0, 12.0)), Vec2::new(1.0, 0.0));
//! ```

use kurbo::{Point, Vec2};

/// Transient per-drag state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    origin: Point,
    anchor: Point,
}

impl DragSession {
    /// Begin a session anchored at the press position.
    pub fn start(pos: Point) -> Self {
        Self {
            origin: pos,
            anchor: pos,
        }
    }

    /// Return the delta from the anchor to `pos`, then move the anchor to `pos`.
    pub fn advance(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.anchor;
        self.anchor = pos;
        delta
    }

    /// Last observed pointer position.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Pointer travel since the press, ignoring any bounds.
    pub fn travel(&self) -> Vec2 {
        self.anchor - self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_anchors_at_press() {
        let s = DragSession::start(Point::new(10.0, 20.0));
        assert_eq!(s.anchor(), Point::new(10.0, 20.0));
        assert_eq!(s.travel(), Vec2::ZERO);
    }

    #[test]
    fn deltas_are_incremental() {
        let mut s = DragSession::start(Point::ZERO);
        assert_eq!(s.advance(Point::new(5.0, 3.0)), Vec2::new(5.0, 3.0));
        assert_eq!(s.advance(Point::new(8.0, 7.0)), Vec2::new(3.0, 4.0));
        assert_eq!(s.advance(Point::new(6.0, 7.0)), Vec2::new(-2.0, 0.0));
        assert_eq!(s.anchor(), Point::new(6.0, 7.0));
        assert_eq!(s.travel(), Vec2::new(6.0, 7.0));
    }

    #[test]
    fn zero_movement_gives_zero_delta() {
        let p = Point::new(50.0, 50.0);
        let mut s = DragSession::start(p);
        assert_eq!(s.advance(p), Vec2::ZERO);
    }
}
