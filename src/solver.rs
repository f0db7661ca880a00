use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

use fnv::FnvHashSet;
use log::debug;
use separator::Separatable;

use crate::board::{Board, Slide};
use crate::config::Method;
use crate::fringe::{Fringe, Priority, Queue, Stack};

/// Final counters of one search run. On failure `depth` is -1 and the
/// counters are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub depth: i32,
    pub created: i32,
    pub expanded: i32,
    pub max_fringe: usize,
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Depth: {}", self.depth)?;
        writeln!(f, "States created total: {}", self.created.separated_string())?;
        writeln!(f, "States expanded total: {}", self.expanded.separated_string())?;
        write!(f, "Max fringe size: {}", (self.max_fringe as u64).separated_string())
    }
}

/// What a run produced: the goal-equal terminal state (carrying its parent
/// chain) when one was found, plus the run's statistics.
pub struct SolverOk {
    pub end_state: Option<Rc<Board>>,
    pub stats: Stats,
    method: Method,
}

impl SolverOk {
    fn new(end_state: Option<Rc<Board>>, stats: Stats, method: Method) -> Self {
        Self {
            end_state,
            stats,
            method,
        }
    }

    /// Root-to-goal path reconstructed from the parent chain, `None` when
    /// the search failed.
    pub fn path(&self) -> Option<Vec<Rc<Board>>> {
        let end = self.end_state.as_ref()?;
        let mut path = Vec::new();
        let mut current = Some(end);
        while let Some(board) = current {
            path.push(Rc::clone(board));
            current = board.parent();
        }
        path.reverse();
        Some(path)
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.end_state {
            None => writeln!(f, "No solution")?,
            Some(ref end) => writeln!(f, "{}: {}", self.method, end.depth())?,
        }
        write!(f, "{}", self.stats)
    }
}

/// Runs one search from `start` towards `goal`. Exhausting the reachable
/// state space is a normal outcome, not an error.
pub fn solve(method: Method, start: Rc<Board>, goal: &Board) -> SolverOk {
    let mut fringe: Box<dyn Fringe> = match method {
        Method::Bfs => Box::new(Queue::new()),
        Method::Dfs => Box::new(Stack::new()),
        Method::Gbfs => Box::new(Priority::new(|_depth, heuristic| heuristic)),
        Method::AStar => Box::new(Priority::new(|depth, heuristic| depth + heuristic)),
    };
    search(fringe.as_mut(), start, goal, method)
}

fn search(fringe: &mut dyn Fringe, start: Rc<Board>, goal: &Board, method: Method) -> SolverOk {
    debug!("{} search starting", method);

    let mut expanded: FnvHashSet<Rc<Board>> = FnvHashSet::default();
    let mut deepest = -1;

    // the root does not count towards created
    fringe.seed(start, goal);

    while let Some(current) = fringe.remove() {
        // queued more than once before its first expansion
        if expanded.contains(&current) {
            continue;
        }

        if *current == *goal {
            debug!("{} search found the goal at depth {}", method, current.depth());
            let stats = Stats {
                depth: current.depth(),
                created: fringe.stats().created(),
                expanded: expanded.len() as i32,
                max_fringe: fringe.stats().max_size(),
            };
            return SolverOk::new(Some(current), stats, method);
        }

        if current.depth() > deepest {
            deepest = current.depth();
            debug!(
                "expanding depth {} ({} created, {} expanded)",
                deepest,
                fringe.stats().created().separated_string(),
                (expanded.len() as u64).separated_string(),
            );
        }

        expanded.insert(Rc::clone(&current));

        // fixed order - decides sibling order for DFS and priority ties
        let successors = [
            current.move_up(),
            current.move_down(),
            current.move_left(),
            current.move_right(),
        ];
        for successor in successors.iter().flatten() {
            if !expanded.contains(successor) {
                fringe.add(Rc::clone(successor), goal);
            }
        }
    }

    debug!("{} search exhausted the reachable states", method);
    let stats = Stats {
        depth: -1,
        created: 0,
        expanded: 0,
        max_fringe: 0,
    };
    SolverOk::new(None, stats, method)
}
