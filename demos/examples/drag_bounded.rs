// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag a box inside a window and watch it slide along the right edge.
//!
//! An 80×40 surface in a 400×300 window, bounds enabled. The second move
//! would carry the box past the right edge, so x holds while the event still
//! reports the raw delta.
//!
//! Run:
//! - `RUST_LOG=understory_drag=trace cargo run -p understory_drag_demos --example drag_bounded`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};
use tracing_subscriber::EnvFilter;
use understory_drag::host::{Measure, PointerHost, Surface};
use understory_drag::types::{AmbientSignal, DragConfig, ListenerId};
use understory_drag::{DragController, DragEvent, DragMove};

#[derive(Debug, Default)]
struct BoxNode {
    size: Size,
    translation: Vec2,
    listening: bool,
}

impl Measure for BoxNode {
    fn size(&self) -> Option<Size> {
        Some(self.size)
    }
}

impl Surface for BoxNode {
    fn listen_press(&mut self) -> Option<ListenerId> {
        self.listening = true;
        Some(ListenerId::new(0))
    }

    fn unlisten_press(&mut self, _id: ListenerId) {
        self.listening = false;
    }

    fn set_translation(&mut self, offset: Vec2) {
        self.translation = offset;
    }
}

#[derive(Debug, Default)]
struct Window {
    size: Size,
    next: u64,
    live: Vec<(ListenerId, AmbientSignal)>,
}

impl PointerHost for Window {
    fn is_available(&self) -> bool {
        true
    }

    fn viewport_size(&self) -> Option<Size> {
        Some(self.size)
    }

    fn subscribe(&mut self, signal: AmbientSignal) -> Option<ListenerId> {
        self.next += 1;
        let id = ListenerId::new(self.next);
        self.live.push((id, signal));
        Some(id)
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.live.retain(|(i, _)| *i != id);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut node = BoxNode {
        size: Size::new(80.0, 40.0),
        ..Default::default()
    };
    let mut window = Window {
        size: Size::new(400.0, 300.0),
        ..Default::default()
    };

    let mut drag = DragController::attach(&mut node, &mut window, DragConfig::bounded())
        .expect("box and window are valid");

    let moves: Rc<RefCell<Vec<DragMove>>> = Rc::default();
    let sink = moves.clone();
    drag.on_drag_move(move |e| sink.borrow_mut().push(*e));
    drag.on_drag_start(|e| println!("dragstart {:?}", e.position));
    drag.on_drag_end(|e| println!("dragend   {:?}", e.position));

    drag.press(Point::new(10.0, 10.0));
    assert_eq!(drag.host().live.len(), 2);
    drag.pointer_move(Point::new(15.0, 12.0));
    drag.pointer_move(Point::new(400.0, 12.0));
    let end = drag.release(Point::new(400.0, 12.0));
    assert!(matches!(end, Some(DragEvent::End(_))));

    println!("== Moves ==");
    for m in moves.borrow().iter() {
        println!("  at {:?} delta {:?}", m.position, m.delta);
    }
    println!("== Offset ==\n  {:?}", drag.offset());

    assert_eq!(drag.offset(), Vec2::new(5.0, 2.0));
    assert_eq!(
        moves.borrow().iter().map(|m| m.delta).collect::<Vec<_>>(),
        vec![Vec2::new(5.0, 2.0), Vec2::new(385.0, 0.0)]
    );

    drop(drag);
    assert_eq!(node.translation, Vec2::new(5.0, 2.0));
    assert!(!node.listening);
    assert!(window.live.is_empty());
}
