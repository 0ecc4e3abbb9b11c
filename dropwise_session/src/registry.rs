// Copyright 2026 the Dropwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference-counted set of scroll containers relevant to live drop zones.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

/// Handle returned by [`ScrollRegistry::register`].
///
/// Unregistering consumes the handle, so a registration can be released at
/// most once and counts never go negative.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ScrollRegistration(u64);

/// Reference-counted scroll containers.
///
/// Several drop zones usually share ancestors (the viewport at least). Each
/// zone registers its whole chain; a container stays listed until the last
/// registration naming it is released.
///
/// [`containers`](Self::containers) is most-recently-registered first. Chains
/// are supplied innermost first and recorded outermost first, so within a
/// chain the listing comes out innermost first: the scan priority autoscroll
/// wants.
#[derive(Clone, Debug)]
pub struct ScrollRegistry<C> {
    counts: HashMap<C, usize>,
    insertion: Vec<C>,
    listing: Vec<C>,
    registrations: HashMap<u64, SmallVec<[C; 4]>>,
    next_registration: u64,
}

impl<C> Default for ScrollRegistry<C> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            insertion: Vec::new(),
            listing: Vec::new(),
            registrations: HashMap::new(),
            next_registration: 0,
        }
    }
}

impl<C: Copy + Eq + Hash> ScrollRegistry<C> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered containers, innermost first.
    pub fn containers(&self) -> &[C] {
        &self.listing
    }

    /// Number of live registrations naming `container`.
    pub fn count(&self, container: &C) -> usize {
        self.counts.get(container).copied().unwrap_or(0)
    }

    /// Returns `true` if no container is registered.
    pub fn is_empty(&self) -> bool {
        self.listing.is_empty()
    }

    /// Registers a chain of containers, innermost first.
    ///
    /// Returns the handle and whether the set of containers changed.
    pub fn register(&mut self, chain: &[C]) -> (ScrollRegistration, bool) {
        let mut added = false;
        let mut recorded = SmallVec::new();
        for container in chain.iter().rev() {
            if recorded.contains(container) {
                continue;
            }
            recorded.push(*container);
            let count = self.counts.entry(*container).or_insert(0);
            if *count == 0 {
                self.insertion.push(*container);
                added = true;
            }
            *count += 1;
        }
        let id = self.next_registration;
        self.next_registration += 1;
        self.registrations.insert(id, recorded);
        if added {
            self.rebuild_listing();
        }
        (ScrollRegistration(id), added)
    }

    /// Releases a registration. Returns whether the set of containers changed.
    pub fn unregister(&mut self, registration: ScrollRegistration) -> bool {
        let Some(chain) = self.registrations.remove(&registration.0) else {
            return false;
        };
        let mut removed = false;
        for container in chain {
            match self.counts.get_mut(&container) {
                Some(count) if *count > 1 => *count -= 1,
                Some(_) => {
                    self.counts.remove(&container);
                    self.insertion.retain(|c| *c != container);
                    removed = true;
                }
                None => {}
            }
        }
        if removed {
            self.rebuild_listing();
        }
        removed
    }

    fn rebuild_listing(&mut self) {
        self.listing.clear();
        self.listing.extend(self.insertion.iter().rev().copied());
    }
}
