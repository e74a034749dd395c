// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset arithmetic: apply a pointer delta to an offset, optionally bounded.
//!
//! ## Per-axis bounding
//!
//! Each axis is checked on its own. A candidate that would push the surface
//! out of the container on one axis leaves that axis at its previous value
//! while the other axis still moves, so dragging diagonally into a wall slides
//! along it.
//!
//! An axis accepts a candidate when `0 <= candidate` and
//! `candidate + surface_extent <= container_extent`: the far edge may touch
//! the container edge but not cross it.
//!
//! ## Missing measurements
//!
//! - Container axis unknown (unmeasurable or non-finite): that axis is unconstrained.
//! - Surface axis unknown: that axis is frozen.
//! - Non-finite delta: that axis is frozen.
//!
//! ```
//! use kurbo::{Size, Vec2};
//! use understory_drag::bounds::{BoundsCheck, next_offset};
//!
//! let check = BoundsCheck::Bounded {
//!     surface: Some(Size::new(80.0, 40.0)),
//!     container: Some(Size::new(400.0, 300.0)),
//! };
//! // x would land at 390 > 400 - 80, so it stays; y moves.
//! let next = next_offset(Vec2::new(5.0, 2.0), Vec2::new(385.0, 3.0), check);
//! assert_eq!(next, Vec2::new(5.0, 5.0));
//! ```

use kurbo::{Size, Vec2};

/// How a candidate offset is validated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BoundsCheck {
    /// Every finite candidate is accepted.
    Unbounded,
    /// Candidates must keep the surface inside the container, per axis.
    Bounded {
        /// Surface size measured for this update, if available.
        surface: Option<Size>,
        /// Container size measured for this update, if available.
        container: Option<Size>,
    },
}

/// Whether `candidate` keeps a span of length `extent` within `[0, limit]`.
///
/// Touching either end is allowed.
#[inline]
pub fn axis_accepts(candidate: f64, extent: f64, limit: f64) -> bool {
    0.0 <= candidate && candidate + extent <= limit
}

/// Compute the offset that results from applying `delta` to `offset`.
///
/// Returns the new offset; rejected axes keep their value from `offset`.
pub fn next_offset(offset: Vec2, delta: Vec2, check: BoundsCheck) -> Vec2 {
    let candidate = offset + delta;
    match check {
        BoundsCheck::Unbounded => Vec2::new(
            pick(offset.x, candidate.x, true),
            pick(offset.y, candidate.y, true),
        ),
        BoundsCheck::Bounded { surface, container } => {
            let x = axis_ok(
                candidate.x,
                surface.map(|s| s.width),
                container.map(|c| c.width),
            );
            let y = axis_ok(
                candidate.y,
                surface.map(|s| s.height),
                container.map(|c| c.height),
            );
            Vec2::new(pick(offset.x, candidate.x, x), pick(offset.y, candidate.y, y))
        }
    }
}

fn axis_ok(candidate: f64, extent: Option<f64>, limit: Option<f64>) -> bool {
    let Some(extent) = extent.filter(|e| e.is_finite()) else {
        return false;
    };
    match limit.filter(|l| l.is_finite()) {
        Some(limit) => axis_accepts(candidate, extent, limit),
        None => true,
    }
}

#[inline]
fn pick(old: f64, candidate: f64, accept: bool) -> f64 {
    if accept && candidate.is_finite() {
        candidate
    } else {
        old
    }
}
