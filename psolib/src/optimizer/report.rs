// Positions of every particle at the start of one iteration, in swarm order
pub type Frame = Vec<Vec<f64>>;

// One frame per completed iteration. Frame 0 holds the initial positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    frames: Vec<Frame>,
}

impl Trajectory {
    pub fn new() -> Self {
        Trajectory { frames: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Trajectory {
            frames: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, iteration: usize) -> Option<&Frame> {
        self.frames.get(iteration)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

// What a single call to step() hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationSnapshot {
    pub iteration: usize,
    // Start-of-iteration positions, before evaluation and update
    pub positions: Frame,
    pub global_best_position: Vec<f64>,
    pub global_best_fitness: f64,
    // True if this iteration lowered the global best
    pub improved: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationReport {
    pub best_position: Vec<f64>,
    pub best_fitness: f64,
    pub iterations: usize,
    pub trajectory: Option<Trajectory>,
}

impl std::fmt::Display for OptimizationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Global best position: {:?}, fitness: {} ({} iterations)",
            self.best_position, self.best_fitness, self.iterations
        )
    }
}
