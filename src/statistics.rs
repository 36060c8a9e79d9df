use std::fmt;
use std::time::Duration;

/// Summary of one solver run against one maze.
#[derive(Debug, Clone)]
pub struct Statistics {
    pub algorithm: String,
    pub maze: String,
    /// Moves in the route, or `None` if the goal was unreachable.
    pub path_length: Option<usize>,
    pub explored_nodes: usize,
    pub open_cells: usize,
    pub solve_time: Duration,
}

impl Statistics {
    /// Share of the maze's open cells the solver discovered.
    pub fn coverage(&self) -> f64 {
        if self.open_cells == 0 {
            0.0
        } else {
            self.explored_nodes as f64 / self.open_cells as f64
        }
    }

    pub fn solved(&self) -> bool {
        self.path_length.is_some()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} on {}:", self.algorithm, self.maze)?;
        writeln!(f, "Time taken to find the solution path: {:.2?}", self.solve_time)?;
        writeln!(f, "Total number of nodes explored: {}", self.explored_nodes)?;
        match self.path_length {
            Some(length) => writeln!(f, "Length of the solution path: {}", length)?,
            None => writeln!(f, "No path exists from start to goal")?,
        }
        writeln!(f, "Open cells explored: {:.1}%", self.coverage() * 100.0)?;
        Ok(())
    }
}

/// Repeated solve timings for one solver.
#[derive(Debug, Clone, Default)]
pub struct TimingData {
    pub solve_times: Vec<Duration>,
}

impl TimingData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, elapsed: Duration) {
        self.solve_times.push(elapsed);
    }

    pub fn total_runs(&self) -> usize {
        self.solve_times.len()
    }

    pub fn total_time(&self) -> Duration {
        self.solve_times.iter().sum()
    }

    pub fn average_solve_time(&self) -> Duration {
        match u32::try_from(self.solve_times.len()) {
            Ok(0) => Duration::ZERO,
            Ok(runs) => self.total_time() / runs,
            Err(_) => self.total_time().div_f64(self.solve_times.len() as f64),
        }
    }

    pub fn fastest(&self) -> Option<Duration> {
        self.solve_times.iter().min().copied()
    }

    pub fn slowest(&self) -> Option<Duration> {
        self.solve_times.iter().max().copied()
    }
}

impl fmt::Display for TimingData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Runs: {}", self.total_runs())?;
        writeln!(
            f,
            "Average solve time: {:.3} µs",
            self.average_solve_time().as_secs_f64() * 1e6
        )?;
        if let (Some(fastest), Some(slowest)) = (self.fastest(), self.slowest()) {
            writeln!(f, "Fastest: {:.2?} | Slowest: {:.2?}", fastest, slowest)?;
        }
        Ok(())
    }
}
