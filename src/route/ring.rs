//! Route ring implementation
//!
//! Slot-arena cyclic sequence with index links and a free-list.

use super::stop::{Stop, StopDraft, StopId};

/// First identity handed out by a fresh (or reset) route
const FIRST_ID: u32 = 1;

/// One occupied arena position: the stop plus its neighbor links.
///
/// Links are slot indices, valid only while both endpoints are occupied. A
/// freshly allocated slot points at itself, which is exactly the size-1
/// self-cycle a sole stop needs.
#[derive(Debug, Clone)]
struct Slot {
    stop: Stop,
    /// Slot index of the predecessor in traversal order
    prev: usize,
    /// Slot index of the successor in traversal order
    next: usize,
}

/// The full cyclic ordered sequence of stops defining the bus line.
///
/// ## Invariants
/// - Non-empty routes form a single cycle: every stop has exactly one
///   predecessor and one successor, and following `next` from any stop
///   revisits it after exactly `len` steps.
/// - `head` always names an occupied slot, or is absent when the route is
///   empty.
/// - Identities are monotonic for the process lifetime; vacated slot indices
///   are recycled through the free-list, identities never are.
pub struct Route {
    /// Slot arena; `None` marks a vacant slot awaiting reuse
    slots: Vec<Option<Slot>>,

    /// Vacant slot indices, reused LIFO by insertions
    free: Vec<usize>,

    /// Slot index of the head stop (traversal start), absent when empty
    head: Option<usize>,

    /// Number of stops currently on the route
    len: usize,

    /// Next identity to assign
    next_id: u32,
}

impl Route {
    /// Create an empty route
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
            next_id: FIRST_ID,
        }
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Append a stop after the current tail (the head's predecessor).
    ///
    /// On an empty route the stop becomes the head of a size-1 self-cycle.
    /// O(1).
    pub fn insert_end(&mut self, draft: StopDraft) -> StopId {
        let idx = self.alloc(draft);
        match self.head {
            None => self.head = Some(idx),
            Some(head) => {
                let tail = self.slot(head).prev;
                self.splice_after(tail, idx);
            }
        }
        self.len += 1;
        self.slot(idx).stop.id
    }

    /// Splice a stop immediately after the referenced stop.
    ///
    /// An absent or unknown reference falls back to [`Route::insert_end`];
    /// the returned flag reports whether that fallback fired. O(1) given a
    /// located reference.
    pub fn insert_after(&mut self, after: Option<StopId>, draft: StopDraft) -> (StopId, bool) {
        match after.and_then(|id| self.position_where(|stop| stop.id == id)) {
            Some(at) => {
                let idx = self.alloc(draft);
                self.splice_after(at, idx);
                self.len += 1;
                (self.slot(idx).stop.id, false)
            }
            None => (self.insert_end(draft), true),
        }
    }

    /// Insert a stop at a 1-based position in traversal order.
    ///
    /// Positions past the end clamp to "directly before the head", i.e. the
    /// end of traversal order. O(position), O(N) worst case.
    pub fn insert_at(&mut self, draft: StopDraft, position: usize) -> StopId {
        match self.head {
            // Position 1 and the empty route share one path: the new stop
            // always becomes the head.
            None => self.insert_head(draft),
            _ if position <= 1 => self.insert_head(draft),
            Some(head) => {
                // Walk up to position-1 steps, stopping early at the tail,
                // and insert after the stop reached.
                let mut at = head;
                let mut step = 1;
                while self.slot(at).next != head && step < position - 1 {
                    at = self.slot(at).next;
                    step += 1;
                }
                let idx = self.alloc(draft);
                self.splice_after(at, idx);
                self.len += 1;
                self.slot(idx).stop.id
            }
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// First stop whose name matches ASCII case-insensitively, in
    /// head-to-tail traversal order. O(N).
    pub fn find_by_name(&self, name: &str) -> Option<&Stop> {
        self.position_where(|stop| stop.name_matches(name))
            .map(|idx| &self.slot(idx).stop)
    }

    /// Stop with the given identity, searched in traversal order. O(N).
    pub fn find_by_id(&self, id: StopId) -> Option<&Stop> {
        self.position_where(|stop| stop.id == id)
            .map(|idx| &self.slot(idx).stop)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove the first stop whose name matches ASCII case-insensitively.
    ///
    /// Returns whether a deletion occurred. Removing the head advances the
    /// head to its former successor; removing the sole stop empties the
    /// route. The predecessor keeps the leg weights it had — they now
    /// describe the leg to the removed stop's successor, and are not
    /// recomputed. O(N) search + O(1) splice.
    pub fn delete_by_name(&mut self, name: &str) -> bool {
        let Some(idx) = self.position_where(|stop| stop.name_matches(name)) else {
            return false;
        };
        let (prev, next) = {
            let slot = self.slot(idx);
            (slot.prev, slot.next)
        };
        if next == idx {
            // sole stop
            self.head = None;
        } else {
            self.slot_mut(prev).next = next;
            self.slot_mut(next).prev = prev;
            if self.head == Some(idx) {
                self.head = Some(next);
            }
        }
        self.release(idx);
        self.len -= 1;
        true
    }

    /// Release every stop. The identity counter is untouched. O(N).
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.len = 0;
    }

    /// [`Route::clear`], plus the identity counter restarts at 1.
    ///
    /// Used when repopulating sample data; an ordinary clear never recycles
    /// identities.
    pub fn reset(&mut self) {
        self.clear();
        self.next_id = FIRST_ID;
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Walk the route head-to-tail, yielding each stop exactly once
    pub fn iter(&self) -> Stops<'_> {
        Stops {
            route: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Walk the route starting at the identified stop, yielding each stop
    /// exactly once; `None` if the identity is not on the route
    pub fn iter_from(&self, id: StopId) -> Option<Stops<'_>> {
        let start = self.position_where(|stop| stop.id == id)?;
        Some(Stops {
            route: self,
            cursor: Some(start),
            remaining: self.len,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of stops on the route
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the route has no stops
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The head stop (traversal start), absent when the route is empty
    pub fn head(&self) -> Option<&Stop> {
        self.head.map(|idx| &self.slot(idx).stop)
    }

    // =========================================================================
    // Arena internals
    // =========================================================================

    /// Place a new stop in a slot (recycled or fresh) and assign its
    /// identity. The slot starts self-linked.
    fn alloc(&mut self, draft: StopDraft) -> usize {
        let id = StopId::new(self.next_id);
        self.next_id += 1;
        let stop = Stop::from_draft(id, draft);
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(Slot {
                    stop,
                    prev: idx,
                    next: idx,
                });
                idx
            }
            None => {
                let idx = self.slots.len();
                self.slots.push(Some(Slot {
                    stop,
                    prev: idx,
                    next: idx,
                }));
                idx
            }
        }
    }

    /// Vacate a slot and queue its index for reuse
    fn release(&mut self, idx: usize) {
        self.slots[idx] = None;
        self.free.push(idx);
    }

    /// Link slot `idx` into the cycle immediately after slot `at`
    fn splice_after(&mut self, at: usize, idx: usize) {
        let next = self.slot(at).next;
        self.slot_mut(at).next = idx;
        {
            let slot = self.slot_mut(idx);
            slot.prev = at;
            slot.next = next;
        }
        self.slot_mut(next).prev = idx;
    }

    /// Insert as the new head: the old head (if any) becomes the successor.
    ///
    /// Serves both the empty route and explicit position-1 insertion.
    fn insert_head(&mut self, draft: StopDraft) -> StopId {
        let idx = self.alloc(draft);
        if let Some(old_head) = self.head {
            let tail = self.slot(old_head).prev;
            self.splice_after(tail, idx);
        }
        self.head = Some(idx);
        self.len += 1;
        self.slot(idx).stop.id
    }

    /// Slot index of the first stop satisfying the predicate, in traversal
    /// order
    fn position_where(&self, mut pred: impl FnMut(&Stop) -> bool) -> Option<usize> {
        let head = self.head?;
        let mut idx = head;
        for _ in 0..self.len {
            if pred(&self.slot(idx).stop) {
                return Some(idx);
            }
            idx = self.slot(idx).next;
        }
        None
    }

    fn slot(&self, idx: usize) -> &Slot {
        self.slots[idx].as_ref().expect("occupied slot index")
    }

    fn slot_mut(&mut self, idx: usize) -> &mut Slot {
        self.slots[idx].as_mut().expect("occupied slot index")
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a route's stops in traversal order.
///
/// Yields exactly `len` stops and then ends; the cycle is never followed
/// past a full revolution.
pub struct Stops<'a> {
    route: &'a Route,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Stops<'a> {
    type Item = &'a Stop;

    fn next(&mut self) -> Option<&'a Stop> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.cursor?;
        let slot = self.route.slot(idx);
        self.cursor = Some(slot.next);
        self.remaining -= 1;
        Some(&slot.stop)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Stops<'_> {}
