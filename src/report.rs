use std::fmt::{self, Display, Formatter};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::config::Method;
use crate::solver::Stats;

/// One fixed-format entry of the append-only statistics report.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub size: usize,
    pub initial: &'a str,
    pub goal: &'a str,
    pub method: Method,
    pub stats: Stats,
}

impl Display for Record<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "size: {}", self.size)?;
        writeln!(f, "initial: {:?}", self.initial)?;
        writeln!(f, "goal: {:?}", self.goal)?;
        writeln!(f, "searchmethod: {}", self.method)?;
        writeln!(
            f,
            "{}, {}, {}, {}",
            self.stats.depth, self.stats.created, self.stats.expanded, self.stats.max_fringe
        )?;
        writeln!(f, "{}", "*".repeat(32))
    }
}

/// Appends `record` to the report file, creating the file when missing.
pub fn append<P: AsRef<Path>>(path: P, record: &Record<'_>) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write!(file, "{}", record)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;

    use super::*;

    fn record<'a>(stats: Stats) -> Record<'a> {
        Record {
            size: 2,
            initial: "21 3",
            goal: "213 ",
            method: Method::Bfs,
            stats,
        }
    }

    #[test]
    fn record_format_is_fixed() {
        let record = record(Stats { depth: 1, created: 2, expanded: 1, max_fringe: 2 });
        assert_eq!(
            record.to_string(),
            "size: 2\n\
             initial: \"21 3\"\n\
             goal: \"213 \"\n\
             searchmethod: BFS\n\
             1, 2, 1, 2\n\
             ********************************\n"
        );
    }

    #[test]
    fn append_accumulates_records() {
        let path = env::temp_dir().join("slide-solver-report-test.txt");
        let _ = fs::remove_file(&path);

        let record = record(Stats { depth: 1, created: 2, expanded: 1, max_fringe: 2 });
        append(&path, &record).unwrap();
        append(&path, &record).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, format!("{0}{0}", record));

        fs::remove_file(&path).unwrap();
    }
}
