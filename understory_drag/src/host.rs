// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits: the surface being dragged, its container, and the pointer host.
//!
//! The controller never reaches for global input state. Instead the toolkit
//! hands it a [`PointerHost`] at attach time, which makes the ambient move and
//! release signals an explicit dependency (and trivially replaceable in tests).
//!
//! Handles are generic and owned by the controller, but the objects behind
//! them are not: a handle can be a `&mut T`, a shared cell, or a key into the
//! toolkit's own scene. Blanket impls cover `&mut T`.

use kurbo::{Size, Vec2};

use crate::types::{AmbientSignal, ListenerId};

/// Anything with a current rendered size.
pub trait Measure {
    /// Current size, or `None` if it cannot be measured right now.
    ///
    /// Queried on demand; the controller never caches the result across moves.
    fn size(&self) -> Option<Size>;
}

/// The element being dragged.
pub trait Surface: Measure {
    /// Register the controller's press listener.
    ///
    /// Returns `None` if this surface cannot receive listeners.
    fn listen_press(&mut self) -> Option<ListenerId>;

    /// Remove a listener previously returned by [`Surface::listen_press`].
    fn unlisten_press(&mut self, id: ListenerId);

    /// Set the translation component of the surface's visual transform.
    ///
    /// `offset` is absolute, relative to the surface's laid-out position.
    /// Implementations must leave every other visual property untouched.
    fn set_translation(&mut self, offset: Vec2);
}

/// The host window: viewport size and ambient pointer signals.
pub trait PointerHost {
    /// Whether ambient pointer signals can be subscribed to at all.
    fn is_available(&self) -> bool;

    /// Current viewport size, or `None` if unknown.
    fn viewport_size(&self) -> Option<Size>;

    /// Subscribe to an ambient signal.
    ///
    /// Returns `None` if the subscription could not be made.
    fn subscribe(&mut self, signal: AmbientSignal) -> Option<ListenerId>;

    /// Remove a subscription previously returned by [`PointerHost::subscribe`].
    fn unsubscribe(&mut self, id: ListenerId);
}

/// Container type for configurations that never name a bounding element.
///
/// Used as the default container parameter. It never measures.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct NoContainer;

impl Measure for NoContainer {
    #[inline]
    fn size(&self) -> Option<Size> {
        None
    }
}

impl Measure for Size {
    #[inline]
    fn size(&self) -> Option<Size> {
        Some(*self)
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    fn size(&self) -> Option<Size> {
        (**self).size()
    }
}

impl<T: Measure + ?Sized> Measure for &mut T {
    fn size(&self) -> Option<Size> {
        (**self).size()
    }
}

impl<T: Surface + ?Sized> Surface for &mut T {
    fn listen_press(&mut self) -> Option<ListenerId> {
        (**self).listen_press()
    }

    fn unlisten_press(&mut self, id: ListenerId) {
        (**self).unlisten_press(id);
    }

    fn set_translation(&mut self, offset: Vec2) {
        (**self).set_translation(offset);
    }
}

impl<T: PointerHost + ?Sized> PointerHost for &mut T {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn viewport_size(&self) -> Option<Size> {
        (**self).viewport_size()
    }

    fn subscribe(&mut self, signal: AmbientSignal) -> Option<ListenerId> {
        (**self).subscribe(signal)
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        (**self).unsubscribe(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_size_measures_itself() {
        let s = Size::new(80.0, 40.0);
        assert_eq!(s.size(), Some(s));
        assert_eq!((&s).size(), Some(s));
    }

    #[test]
    fn no_container_never_measures() {
        assert_eq!(NoContainer.size(), None);
    }
}
