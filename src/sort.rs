//! In-place sorting of the queue's chain.
//!
//! The sort is a bottom-up merge over the existing nodes. Each pass carves
//! the chain into runs of `interval` nodes and merges adjacent pairs of
//! runs by relinking `next` pointers; `interval` starts at 1 and doubles
//! until it covers the whole queue:
//!
//! ```text
//!   interval 1:  [d] [c] [b] [a]
//!   interval 2:  [c d]   [a b]
//!   interval 4:  [a b c d]
//! ```
//!
//! No node is ever copied, allocated or freed, there is no recursion, and
//! the only scratch state is a handful of pointers.

use std::{cmp::Ordering, ptr::NonNull};

use crate::{ByteQueue, MaybeNode, Node};

impl ByteQueue {
    /// Sorts the queue in ascending order under `cmp`, relinking the
    /// existing nodes in place.
    ///
    /// Runs in O(n log n) comparisons without allocating. When two values
    /// compare equal the node from the earlier run is emitted first, so the
    /// resulting order is stable.
    ///
    /// Queues with fewer than two elements are left untouched.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        if self.len < 2 {
            return;
        }

        let mut interval = 1;
        while interval < self.len {
            let mut unmerged = self.head.take();
            self.tail = None;

            while let Some(left) = unmerged {
                let right = detach_after(left, interval);
                unmerged = match right {
                    Some(right) => detach_after(right, interval),
                    None => None,
                };
                self.merge_append(Some(left), right, &mut cmp);
            }

            interval *= 2;
        }
    }

    /// Sorts the queue under natural ordering, where runs of digits compare
    /// by numeric value, so `file2` sorts before `file10`.
    ///
    /// Values that are not valid UTF-8 fall back to plain byte order.
    pub fn sort_natural(&mut self) {
        self.sort_by(|a, b| match (std::str::from_utf8(a), std::str::from_utf8(b)) {
            (Ok(a), Ok(b)) => natord::compare(a, b),
            _ => a.cmp(b),
        });
    }

    /// Merges two detached runs onto the end of the queue, smaller value
    /// first. Once either run is exhausted the rest of the other is spliced
    /// in whole, with no further comparisons.
    fn merge_append<F>(&mut self, mut left: MaybeNode, mut right: MaybeNode, cmp: &mut F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        loop {
            match (left, right) {
                (None, None) => return,
                (Some(run), None) | (None, Some(run)) => {
                    self.append_run(run);
                    return;
                }
                (Some(l), Some(r)) => {
                    // SAFETY: both runs consist of valid nodes detached from
                    // this queue's chain; the borrows end before any relink.
                    let ordering =
                        unsafe { cmp((*l.as_ptr()).value.as_ref(), (*r.as_ptr()).value.as_ref()) };
                    let node = if ordering != Ordering::Greater {
                        // SAFETY: `l` is valid as above.
                        left = unsafe { (*l.as_ptr()).next.take() };
                        l
                    } else {
                        // SAFETY: `r` is valid as above.
                        right = unsafe { (*r.as_ptr()).next.take() };
                        r
                    };
                    self.append_node(node);
                }
            }
        }
    }

    /// Links one detached node (its `next` already severed) after the
    /// current tail.
    fn append_node(&mut self, node: NonNull<Node>) {
        match self.tail {
            // SAFETY: `tail` is a valid node whose `next` is `None` by the
            // chain invariant.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
    }

    /// Splices a whole remaining run after the current tail and walks to
    /// its last node to re-establish `tail`.
    fn append_run(&mut self, run: NonNull<Node>) {
        match self.tail {
            // SAFETY: as in `append_node`.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(run) },
            None => self.head = Some(run),
        }

        let mut last = run;
        // SAFETY: the run is a valid chain severed by `detach_after`, so the
        // walk terminates at its `None` link.
        while let Some(next) = unsafe { (*last.as_ptr()).next } {
            last = next;
        }
        self.tail = Some(last);
    }
}

/// Cuts the chain after at most `count` nodes starting at `start`, returning
/// the severed remainder. The run beginning at `start` is left
/// `None`-terminated.
fn detach_after(start: NonNull<Node>, count: usize) -> MaybeNode {
    let mut node = start;
    for _ in 1..count {
        // SAFETY: `start` heads a valid `None`-terminated chain, so every
        // `next` either points at a valid node or stops the walk.
        match unsafe { (*node.as_ptr()).next } {
            Some(next) => node = next,
            None => return None,
        }
    }
    // SAFETY: `node` is valid as above.
    unsafe { (*node.as_ptr()).next.take() }
}
