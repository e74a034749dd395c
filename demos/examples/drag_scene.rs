// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two draggable cards inside a panel, driven by one input stream.
//!
//! Surfaces and the panel live in a shared scene; controllers hold small
//! handles into it. A toy dispatcher hit-tests presses against the cards and
//! forwards moves and releases to whichever controller is dragging.
//!
//! Run:
//! - `cargo run -p understory_drag_demos --example drag_scene`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size, Vec2};
use understory_drag::host::{Measure, PointerHost, Surface};
use understory_drag::types::{AmbientSignal, DragConfig, DragPhase, ListenerId, PointerEvent};
use understory_drag::{DragController, DragEvent};

#[derive(Debug)]
struct Card {
    rect: Rect,
    translation: Vec2,
}

#[derive(Debug, Default)]
struct Scene {
    panel: Size,
    cards: Vec<Card>,
    next_listener: u64,
    ambient: Vec<(ListenerId, AmbientSignal)>,
}

type Shared = Rc<RefCell<Scene>>;

#[derive(Clone, Debug)]
struct CardHandle(Shared, usize);

impl Measure for CardHandle {
    fn size(&self) -> Option<Size> {
        self.0.borrow().cards.get(self.1).map(|c| c.rect.size())
    }
}

impl Surface for CardHandle {
    fn listen_press(&mut self) -> Option<ListenerId> {
        let mut scene = self.0.borrow_mut();
        scene.next_listener += 1;
        Some(ListenerId::new(scene.next_listener))
    }

    fn unlisten_press(&mut self, _id: ListenerId) {}

    fn set_translation(&mut self, offset: Vec2) {
        if let Some(card) = self.0.borrow_mut().cards.get_mut(self.1) {
            card.translation = offset;
        }
    }
}

#[derive(Clone, Debug)]
struct PanelHandle(Shared);

impl Measure for PanelHandle {
    fn size(&self) -> Option<Size> {
        Some(self.0.borrow().panel)
    }
}

#[derive(Clone, Debug)]
struct HostHandle(Shared);

impl PointerHost for HostHandle {
    fn is_available(&self) -> bool {
        true
    }

    fn viewport_size(&self) -> Option<Size> {
        Some(Size::new(1920.0, 1080.0))
    }

    fn subscribe(&mut self, signal: AmbientSignal) -> Option<ListenerId> {
        let mut scene = self.0.borrow_mut();
        scene.next_listener += 1;
        let id = ListenerId::new(scene.next_listener);
        scene.ambient.push((id, signal));
        Some(id)
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.0.borrow_mut().ambient.retain(|(i, _)| *i != id);
    }
}

type CardDrag = DragController<CardHandle, HostHandle, PanelHandle>;

/// Route one input event: presses go to the card under the pointer, the rest
/// to the controller that is dragging.
fn dispatch(scene: &Shared, drags: &mut [CardDrag], event: PointerEvent) -> Option<DragEvent> {
    match event {
        PointerEvent::Down(p) => {
            let hit = {
                let s = scene.borrow();
                s.cards
                    .iter()
                    .rposition(|c| (c.rect + c.translation).contains(p))
            };
            drags.get_mut(hit?)?.handle(event)
        }
        PointerEvent::Move(_) | PointerEvent::Up(_) => drags
            .iter_mut()
            .find(|d| d.phase() == DragPhase::Dragging)?
            .handle(event),
    }
}

fn main() {
    let scene: Shared = Rc::new(RefCell::new(Scene {
        panel: Size::new(300.0, 200.0),
        cards: vec![
            Card {
                rect: Rect::new(0.0, 0.0, 50.0, 50.0),
                translation: Vec2::ZERO,
            },
            Card {
                rect: Rect::new(100.0, 0.0, 150.0, 50.0),
                translation: Vec2::ZERO,
            },
        ],
        ..Default::default()
    }));

    let mut drags: Vec<CardDrag> = (0..2)
        .map(|i| {
            DragController::attach(
                CardHandle(scene.clone(), i),
                HostHandle(scene.clone()),
                DragConfig::within(PanelHandle(scene.clone())),
            )
            .expect("cards are measurable")
        })
        .collect();

    let input = [
        PointerEvent::Down(Point::new(10.0, 10.0)),
        PointerEvent::Move(Point::new(40.0, 30.0)),
        PointerEvent::Up(Point::new(40.0, 30.0)),
        PointerEvent::Down(Point::new(120.0, 10.0)),
        PointerEvent::Move(Point::new(500.0, 60.0)),
        PointerEvent::Up(Point::new(500.0, 60.0)),
    ];
    for event in input {
        let out = dispatch(&scene, &mut drags, event);
        println!("{:?} -> {:?}", event, out);
    }

    // First card moved freely; second card hit the panel's right edge on x.
    assert_eq!(drags[0].offset(), Vec2::new(30.0, 20.0));
    assert_eq!(drags[1].offset(), Vec2::new(0.0, 50.0));
    assert!(scene.borrow().ambient.is_empty());

    let s = scene.borrow();
    println!("== Cards ==");
    for (i, c) in s.cards.iter().enumerate() {
        println!("  card {i}: {:?}", c.rect + c.translation);
    }
}
