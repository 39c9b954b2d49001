use std::time::Duration;

/// Knobs for a single selector run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Wall-clock budget for the whole run, checked between outer iterations.
    pub deadline: Option<Duration>,
}

impl SelectorConfig {
    pub fn with_deadline(deadline: Duration) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }
}

/// Result of one greedy run.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome {
    /// Candidate indices in selection order (the greedy rank).
    pub indices: Vec<usize>,
    /// Exact marginal gain of each pick at the time it was accepted.
    pub gains: Vec<f32>,
    /// Number of exact marginal-gain evaluations, initial ones included.
    pub evaluations: usize,
}

impl SelectionOutcome {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Sum of accepted gains; equals `F(selection)` under the `F(∅) = 0` convention.
    pub fn total_gain(&self) -> f32 {
        self.gains.iter().sum()
    }
}
