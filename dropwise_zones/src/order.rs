// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual stacking order of host nodes.

use core::cmp::Ordering;

/// Compares nodes by the order in which they are painted.
///
/// `compare(a, b)` returns [`Ordering::Greater`] when `a` paints above `b`,
/// [`Ordering::Less`] when it paints below, and [`Ordering::Equal`] when the
/// host cannot tell them apart. The order is consulted whenever a zone is
/// inserted and never cached, so it may change between insertions.
pub trait StackingOrder<N> {
    /// Orders `a` relative to `b`.
    fn compare(&self, a: &N, b: &N) -> Ordering;
}

impl<N, F> StackingOrder<N> for F
where
    F: Fn(&N, &N) -> Ordering,
{
    fn compare(&self, a: &N, b: &N) -> Ordering {
        self(a, b)
    }
}

/// Index at which `node` joins `ordered` (topmost first).
///
/// A node above the probe moves the search towards the front. A node the
/// order cannot separate from the probe is inserted at the probe's index, in
/// front of it.
pub(crate) fn insertion_index<N, O>(ordered: &[&N], node: &N, order: &O) -> usize
where
    O: StackingOrder<N> + ?Sized,
{
    let mut lo = 0_usize;
    let mut hi = ordered.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match order.compare(ordered[mid], node) {
            Ordering::Greater => lo = mid + 1,
            Ordering::Less => hi = mid,
            Ordering::Equal => return mid,
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_z(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn higher_nodes_go_first() {
        let list = [&9, &5, &1];
        assert_eq!(insertion_index(&list, &10, &by_z), 0);
        assert_eq!(insertion_index(&list, &7, &by_z), 1);
        assert_eq!(insertion_index(&list, &3, &by_z), 2);
        assert_eq!(insertion_index(&list, &0, &by_z), 3);
    }

    #[test]
    fn ties_land_on_the_probe() {
        let list = [&9, &5, &1];
        assert_eq!(insertion_index(&list, &5, &by_z), 1);
        assert_eq!(insertion_index(&[], &5, &by_z), 0);
    }
}
