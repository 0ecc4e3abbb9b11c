// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver properties over random zone layouts and pointer paths.

use std::cell::Cell;
use std::rc::Rc;

use dropwise_geometry::VisibleRect;
use dropwise_session::{DragItem, DragKind};
use dropwise_zones::{DropCallbacks, DropZone, Resolution, ZoneId, ZoneRegistry};
use kurbo::{Point, Rect};
use proptest::prelude::*;

const CARD: DragKind = DragKind("card");

#[derive(Clone, Debug)]
struct Layout {
    z: u32,
    rect: Rect,
}

fn layout() -> impl Strategy<Value = Layout> {
    (0_u32..8, 0.0_f64..200.0, 0.0_f64..200.0, 1.0_f64..120.0, 1.0_f64..120.0).prop_map(
        |(z, x, y, w, h)| Layout {
            z,
            rect: Rect::new(x, y, x + w, y + h),
        },
    )
}

struct Fixture {
    zones: ZoneRegistry<u32, u32, ()>,
    rects: Vec<(ZoneId, Rect, u32)>,
    leaves: Vec<Rc<Cell<u32>>>,
}

fn build(layouts: &[Layout]) -> Fixture {
    let mut zones = ZoneRegistry::new();
    let mut rects = Vec::new();
    let mut leaves = Vec::new();
    for l in layouts {
        let leave = Rc::new(Cell::new(0));
        let sink = leave.clone();
        let target = DropCallbacks::new().on_drag_over(move |ev| {
            if ev.is_leave() {
                sink.set(sink.get() + 1);
            }
        });
        let id = zones.insert(DropZone::new(l.z, CARD, target), &|a: &u32, b: &u32| a.cmp(b));
        rects.push((id, l.rect, l.z));
        leaves.push(leave);
    }
    Fixture {
        zones,
        rects,
        leaves,
    }
}

fn rect_of(rects: &[(ZoneId, Rect, u32)]) -> impl FnMut(ZoneId) -> Option<VisibleRect> + '_ {
    |id| {
        rects
            .iter()
            .find(|(z, _, _)| *z == id)
            .map(|(_, r, _)| VisibleRect::unclipped(*r))
    }
}

proptest! {
    #[test]
    fn at_most_one_zone_is_over(
        layouts in prop::collection::vec(layout(), 1..8),
        path in prop::collection::vec((0.0_f64..320.0, 0.0_f64..320.0), 1..24),
    ) {
        let mut f = build(&layouts);
        let item = DragItem::new(0, CARD, ());
        for (x, y) in path {
            let pos = Point::new(x, y);
            let r = f.zones.resolve(Some(pos), false, Some(&item), rect_of(&f.rects));
            let over: Vec<ZoneId> = f.zones.ids().filter(|id| f.zones.is_over(*id)).collect();
            prop_assert!(over.len() <= 1);
            prop_assert_eq!(r.zone(), over.first().copied());

            // The winner has the highest stacking key among the zones under the point.
            let top = f.rects.iter().filter(|(_, rect, _)| {
                pos.x >= rect.x0 && pos.x <= rect.x1 && pos.y >= rect.y0 && pos.y <= rect.y1
            }).map(|(_, _, z)| *z).max();
            let winner = r.zone().and_then(|id| f.rects.iter().find(|(z, _, _)| *z == id)).map(|(_, _, z)| *z);
            prop_assert_eq!(winner, top);
        }
    }

    #[test]
    fn each_over_period_ends_with_one_leave(
        layouts in prop::collection::vec(layout(), 1..6),
        path in prop::collection::vec((0.0_f64..320.0, 0.0_f64..320.0), 1..24),
    ) {
        let mut f = build(&layouts);
        let item = DragItem::new(0, CARD, ());
        let mut periods = vec![0_u32; f.rects.len()];
        let mut previous: Option<ZoneId> = None;
        for (x, y) in path {
            let r = f.zones.resolve(Some(Point::new(x, y)), false, Some(&item), rect_of(&f.rects));
            if let Some(id) = r.zone() {
                if previous != Some(id) {
                    let index = f.rects.iter().position(|(z, _, _)| *z == id).unwrap();
                    periods[index] += 1;
                }
            }
            previous = r.zone();
        }
        let r = f.zones.resolve(None, false, None, rect_of(&f.rects));
        prop_assert_eq!(r, Resolution::Miss);
        for (index, leave) in f.leaves.iter().enumerate() {
            prop_assert_eq!(leave.get(), periods[index]);
        }
    }
}

#[test]
fn upper_zone_receives_over_and_drop_exclusively() {
    let drops = Rc::new(Cell::new((0, 0)));
    let overs = Rc::new(Cell::new((0, 0)));
    let mut zones: ZoneRegistry<u32, u32, ()> = ZoneRegistry::new();
    let by_z = |a: &u32, b: &u32| a.cmp(b);
    for (z, upper) in [(1_u32, false), (2_u32, true)] {
        let (d, o) = (drops.clone(), overs.clone());
        let bump = move |c: &Cell<(u32, u32)>| {
            let (a, b) = c.get();
            c.set(if upper { (a + 1, b) } else { (a, b + 1) });
        };
        let target = DropCallbacks::new()
            .on_drop(move |_| bump(&d))
            .on_drag_over(move |ev| {
                if !ev.is_leave() {
                    bump(&o);
                }
            });
        zones.insert(DropZone::new(z, CARD, target), &by_z);
    }
    let item = DragItem::new(9, CARD, ());
    let both = |_| Some(VisibleRect::unclipped(Rect::new(0.0, 0.0, 100.0, 100.0)));
    zones.resolve(Some(Point::new(10.0, 10.0)), false, Some(&item), both);
    zones.resolve(Some(Point::new(20.0, 10.0)), false, Some(&item), both);
    zones.resolve(Some(Point::new(20.0, 10.0)), true, Some(&item), both);
    assert_eq!(overs.get(), (2, 0));
    assert_eq!(drops.get(), (1, 0));
}
