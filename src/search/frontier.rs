//! Containers for states that have been generated but not yet expanded.
//! [`Stack`] and [`Queue`] give depth first and breadth first order,
//! [`PriorityFrontier`] gives best first order.

use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::{HashMap, VecDeque};

pub trait Frontier<T> {
    fn push(&mut self, item: T);

    fn pop(&mut self) -> Option<T>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

/// Last in, first out.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First in, first out.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Insertion sequence number of an entry. Unique per frontier, so it also
/// serves as the key of the entry in the underlying queue.
type Sequence = u64;

/// A min-priority queue. Entries with equal priority are popped in the order
/// they were inserted.
#[derive(Debug)]
pub struct PriorityFrontier<T, P: Ord> {
    queue: PriorityQueue<Sequence, Reverse<(P, Sequence)>>,
    items: HashMap<Sequence, T>,
    next_sequence: Sequence,
}

impl<T, P: Ord + Copy> PriorityFrontier<T, P> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            items: HashMap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: P) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(sequence, Reverse((priority, sequence)));
        self.items.insert(sequence, item);
    }

    pub fn pop(&mut self) -> Option<T> {
        let (sequence, _) = self.queue.pop()?;
        self.items.remove(&sequence)
    }

    /// Returns the item that would be popped next, with its priority.
    #[cfg(test)]
    pub fn peek(&self) -> Option<(&T, P)> {
        let (sequence, Reverse((priority, _))) = self.queue.peek()?;
        self.items.get(sequence).map(|item| (item, *priority))
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<T: PartialEq, P: Ord + Copy> PriorityFrontier<T, P> {
    /// If `item` is already in the frontier with a priority no larger than
    /// `priority`, do nothing. If it is there with a larger priority, lower
    /// it to `priority`; the entry keeps its original insertion order among
    /// ties. Otherwise behave like [`PriorityFrontier::push`].
    ///
    /// Finding the item is a linear scan.
    pub fn update(&mut self, item: T, priority: P) {
        let existing = self
            .items
            .iter()
            .find(|(_, existing)| **existing == item)
            .map(|(&sequence, _)| sequence);

        match existing {
            Some(sequence) => {
                let lower = self
                    .queue
                    .get_priority(&sequence)
                    .is_some_and(|Reverse((current, _))| priority < *current);
                if lower {
                    self.queue
                        .change_priority(&sequence, Reverse((priority, sequence)));
                }
            }
            None => self.push(item, priority),
        }
    }
}

impl<T, P: Ord + Copy> Default for PriorityFrontier<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<F: Frontier<i32>>(mut frontier: F) -> Vec<i32> {
        let mut popped = vec![];
        while let Some(item) = frontier.pop() {
            popped.push(item);
        }
        assert!(frontier.is_empty());
        popped
    }

    fn drain_priority(mut frontier: PriorityFrontier<&str, u32>) -> Vec<&str> {
        let mut popped = vec![];
        while let Some(item) = frontier.pop() {
            popped.push(item);
        }
        popped
    }

    #[test]
    fn stack_is_lifo() {
        let mut stack = Stack::new();
        for item in [1, 2, 3] {
            stack.push(item);
        }
        assert_eq!(stack.len(), 3);
        assert_eq!(drain(stack), vec![3, 2, 1]);
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = Queue::new();
        for item in [1, 2, 3] {
            queue.push(item);
        }
        assert_eq!(queue.pop(), Some(1));
        queue.push(4);
        assert_eq!(queue.len(), 3);
        assert_eq!(drain(queue), vec![2, 3, 4]);
    }

    #[test]
    fn empty_frontiers_pop_nothing() {
        assert_eq!(Stack::<i32>::new().pop(), None);
        assert_eq!(Queue::<i32>::new().pop(), None);
        assert_eq!(PriorityFrontier::<i32, u32>::new().pop(), None);
        assert!(PriorityFrontier::<i32, u32>::new().is_empty());
    }

    #[test]
    fn priority_frontier_pops_lowest_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push("c", 3);
        frontier.push("a", 1);
        frontier.push("b", 2);
        assert_eq!(frontier.peek(), Some((&"a", 1)));
        assert_eq!(drain_priority(frontier), vec!["a", "b", "c"]);
    }

    #[test]
    fn priority_frontier_breaks_ties_by_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        frontier.push("first", 5);
        frontier.push("low", 1);
        frontier.push("second", 5);
        frontier.push("third", 5);
        assert_eq!(
            drain_priority(frontier),
            vec!["low", "first", "second", "third"]
        );
    }

    #[test]
    fn priority_frontier_allows_duplicate_items() {
        let mut frontier = PriorityFrontier::new();
        frontier.push("x", 2);
        frontier.push("x", 1);
        assert_eq!(frontier.len(), 2);
        assert_eq!(drain_priority(frontier), vec!["x", "x"]);
    }

    #[test]
    fn update_lowers_higher_priority() {
        let mut frontier = PriorityFrontier::new();
        frontier.push("a", 2);
        frontier.push("b", 5);
        frontier.update("b", 1);
        assert_eq!(frontier.len(), 2);
        assert_eq!(drain_priority(frontier), vec!["b", "a"]);
    }

    #[test]
    fn update_ignores_equal_or_worse_priority() {
        let mut frontier = PriorityFrontier::new();
        frontier.push("a", 2);
        frontier.push("b", 3);
        frontier.update("a", 4);
        frontier.update("b", 3);
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.peek(), Some((&"a", 2)));
        assert_eq!(drain_priority(frontier), vec!["a", "b"]);
    }

    #[test]
    fn update_inserts_missing_item() {
        let mut frontier = PriorityFrontier::new();
        frontier.push("a", 2);
        frontier.update("b", 1);
        frontier.update("c", 2);
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain_priority(frontier), vec!["b", "a", "c"]);
    }

    #[test]
    fn update_keeps_original_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        frontier.push("early", 9);
        frontier.push("middle", 4);
        frontier.push("late", 4);
        frontier.update("early", 4);
        assert_eq!(drain_priority(frontier), vec!["early", "middle", "late"]);
    }
}
