use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use fnv::FnvHashMap;

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 9;

/// Search algorithm selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Bfs,
    Dfs,
    Gbfs,
    AStar,
}

impl Method {
    pub const ALL: [Method; 4] = [Method::Bfs, Method::Dfs, Method::Gbfs, Method::AStar];

    fn name(self) -> &'static str {
        match self {
            Method::Bfs => "BFS",
            Method::Dfs => "DFS",
            Method::Gbfs => "GBFS",
            Method::AStar => "AStar",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl Display for UnknownMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} is not a supported algorithm. Choose one of the following:",
            self.0
        )?;
        for method in &Method::ALL {
            write!(f, " {}", method)?;
        }
        Ok(())
    }
}

impl Error for UnknownMethod {}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .copied()
            .find(|method| method.name() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// Canonical goal configuration per board size. The goal string doubles as
/// the set of valid characters for that size, so the core stays
/// alphabet-agnostic and callers pass this table around explicitly.
#[derive(Debug, Clone)]
pub struct GoalTable {
    goals: FnvHashMap<usize, &'static str>,
}

impl GoalTable {
    pub fn builtin() -> Self {
        let mut goals = FnvHashMap::default();
        goals.insert(2, "213 ");
        goals.insert(3, " 12345678");
        goals.insert(4, "123456789ABCDEF ");
        goals.insert(5, " 123456789ABCDEFGHIJKLMNO");
        goals.insert(6, " 123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        goals.insert(7, " 123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklm");
        goals.insert(
            8,
            " 123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@",
        );
        goals.insert(
            9,
            " 123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@#$%^&*()-_=+[{]}|",
        );
        GoalTable { goals }
    }

    pub fn goal(&self, size: usize) -> Option<&'static str> {
        self.goals.get(&size).copied()
    }
}
