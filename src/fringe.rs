use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use std::rc::Rc;

use crate::board::Board;

/// Bookkeeping every frontier strategy shares: how many states were added
/// (excluding the root) and the largest size the frontier ever reached.
#[derive(Debug, Clone, Copy, Default)]
pub struct FringeStats {
    created: i32,
    max_size: usize,
}

impl FringeStats {
    pub fn created(&self) -> i32 {
        self.created
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    fn record_created(&mut self) {
        self.created += 1;
    }

    fn record_size(&mut self, len: usize) {
        if len > self.max_size {
            self.max_size = len;
        }
    }
}

/// A traversal-order container. The strategy decides only the order in
/// which states come back out; duplicate suppression is the driver's job
/// via its expanded set.
pub trait Fringe {
    fn len(&self) -> usize;

    /// Strategy-specific insert. Driver code goes through `add` or `seed`
    /// instead - they keep the statistics in sync.
    fn push(&mut self, state: Rc<Board>, goal: &Board);

    /// Removes one state per the strategy's order, `None` when empty.
    fn remove(&mut self) -> Option<Rc<Board>>;

    fn stats(&self) -> &FringeStats;

    fn stats_mut(&mut self) -> &mut FringeStats;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts the start state. Counts towards the high-water mark but not
    /// towards `created`.
    fn seed(&mut self, state: Rc<Board>, goal: &Board) {
        self.push(state, goal);
        let len = self.len();
        self.stats_mut().record_size(len);
    }

    /// Inserts a generated successor and records it in the statistics.
    fn add(&mut self, state: Rc<Board>, goal: &Board) {
        self.push(state, goal);
        self.stats_mut().record_created();
        let len = self.len();
        self.stats_mut().record_size(len);
    }
}

/// FIFO - drives BFS: states come out in non-decreasing depth order.
#[derive(Debug, Default)]
pub struct Queue {
    deque: VecDeque<Rc<Board>>,
    stats: FringeStats,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fringe for Queue {
    fn len(&self) -> usize {
        self.deque.len()
    }

    fn push(&mut self, state: Rc<Board>, _goal: &Board) {
        self.deque.push_back(state);
    }

    fn remove(&mut self) -> Option<Rc<Board>> {
        self.deque.pop_front()
    }

    fn stats(&self) -> &FringeStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut FringeStats {
        &mut self.stats
    }
}

/// LIFO - drives DFS: one branch is explored fully before backtracking.
#[derive(Debug, Default)]
pub struct Stack {
    stack: Vec<Rc<Board>>,
    stats: FringeStats,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fringe for Stack {
    fn len(&self) -> usize {
        self.stack.len()
    }

    fn push(&mut self, state: Rc<Board>, _goal: &Board) {
        self.stack.push(state);
    }

    fn remove(&mut self) -> Option<Rc<Board>> {
        self.stack.pop()
    }

    fn stats(&self) -> &FringeStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut FringeStats {
        &mut self.stats
    }
}

/// Ordered by an injected score of `(depth, heuristic)` - removal returns
/// the minimum score, equal scores in insertion order. Drives GBFS with
/// `h` and A* with `g + h`.
#[derive(Debug)]
pub struct Priority {
    heap: BinaryHeap<Reverse<Ranked>>,
    score: fn(depth: i32, heuristic: i32) -> i32,
    seq: u64,
    stats: FringeStats,
}

impl Priority {
    pub fn new(score: fn(i32, i32) -> i32) -> Self {
        Priority {
            heap: BinaryHeap::new(),
            score,
            seq: 0,
            stats: FringeStats::default(),
        }
    }
}

impl Fringe for Priority {
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, state: Rc<Board>, goal: &Board) {
        // generated once per insertion, before storing
        let h = state.generate_heuristic(goal);
        let f = (self.score)(state.depth(), h);
        self.heap.push(Reverse(Ranked {
            f,
            seq: self.seq,
            state,
        }));
        self.seq += 1;
    }

    fn remove(&mut self) -> Option<Rc<Board>> {
        self.heap.pop().map(|Reverse(ranked)| ranked.state)
    }

    fn stats(&self) -> &FringeStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut FringeStats {
        &mut self.stats
    }
}

/// Heap entry. The sequence number makes equal scores pop in insertion
/// order, keeping plateau behavior deterministic.
#[derive(Debug)]
struct Ranked {
    f: i32,
    seq: u64,
    state: Rc<Board>,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.cmp(&other.f).then_with(|| self.seq.cmp(&other.seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(tiles: &str) -> Rc<Board> {
        Rc::new(Board::create(tiles, 2).unwrap())
    }

    #[test]
    fn queue_is_fifo() {
        let goal = board("213 ");
        let mut queue = Queue::new();
        for tiles in &["21 3", "2 13", " 213"] {
            queue.add(board(tiles), &goal);
        }
        assert_eq!(queue.remove().unwrap().to_string(), "21 3");
        assert_eq!(queue.remove().unwrap().to_string(), "2 13");
        assert_eq!(queue.remove().unwrap().to_string(), " 213");
        assert!(queue.remove().is_none());
    }

    #[test]
    fn stack_is_lifo() {
        let goal = board("213 ");
        let mut stack = Stack::new();
        for tiles in &["21 3", "2 13", " 213"] {
            stack.add(board(tiles), &goal);
        }
        assert_eq!(stack.remove().unwrap().to_string(), " 213");
        assert_eq!(stack.remove().unwrap().to_string(), "2 13");
        assert_eq!(stack.remove().unwrap().to_string(), "21 3");
        assert!(stack.remove().is_none());
    }

    #[test]
    fn priority_removes_minimum_score_first() {
        let goal = board("213 ");
        let mut priority = Priority::new(|_depth, heuristic| heuristic);
        priority.add(board("2 13"), &goal); // h = 2
        priority.add(board("21 3"), &goal); // h = 1
        assert_eq!(priority.remove().unwrap().to_string(), "21 3");
        assert_eq!(priority.remove().unwrap().to_string(), "2 13");
        assert!(priority.remove().is_none());
    }

    #[test]
    fn priority_breaks_ties_in_insertion_order() {
        let goal = board("213 ");
        let first = board("21 3");
        let second = board("21 3");
        let mut priority = Priority::new(|depth, heuristic| depth + heuristic);
        priority.add(Rc::clone(&first), &goal);
        priority.add(Rc::clone(&second), &goal);
        assert!(Rc::ptr_eq(&priority.remove().unwrap(), &first));
        assert!(Rc::ptr_eq(&priority.remove().unwrap(), &second));
    }

    #[test]
    fn priority_generates_heuristics_on_insertion() {
        let goal = board("213 ");
        let state = board("2 13");
        let mut priority = Priority::new(|_depth, heuristic| heuristic);
        assert_eq!(state.heuristic(), None);
        priority.add(Rc::clone(&state), &goal);
        assert_eq!(state.heuristic(), Some(2));
    }

    #[test]
    fn uninformed_fringes_skip_the_heuristic() {
        let goal = board("213 ");
        let state = board("2 13");
        let mut queue = Queue::new();
        queue.add(Rc::clone(&state), &goal);
        assert_eq!(state.heuristic(), None);
    }

    #[test]
    fn stats_exclude_the_seed_and_track_the_high_water_mark() {
        let goal = board("213 ");
        let mut queue = Queue::new();
        queue.seed(board("21 3"), &goal);
        assert_eq!(queue.stats().created(), 0);
        assert_eq!(queue.stats().max_size(), 1);

        queue.add(board("2 13"), &goal);
        queue.add(board(" 213"), &goal);
        assert_eq!(queue.stats().created(), 2);
        assert_eq!(queue.stats().max_size(), 3);

        queue.remove();
        queue.remove();
        queue.add(board("213 "), &goal);
        assert_eq!(queue.stats().created(), 3);
        assert_eq!(queue.stats().max_size(), 3);
    }
}
