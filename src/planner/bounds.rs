use crate::context::Complexity;
use serde::Serialize;

/// Node-count bounds for a whole workflow, trigger and response included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanBounds {
    pub min_nodes: usize,
    pub max_nodes: usize,
}

/// Slots kept free for the trigger and a possible webhook response node.
pub const RESERVED_SLOTS: usize = 2;

impl PlanBounds {
    /// Looks up the bound table. Higher signal never lowers a bound, and a
    /// higher tier never sits below a lower one at the same signal.
    ///
    /// | complexity | signal 0-2 | signal 3-5 | signal >= 6 |
    /// |------------|------------|------------|-------------|
    /// | simple     | 2-3        | 2-3        | 2-3         |
    /// | medium     | 4-7        | 5-8        | 6-10        |
    /// | complex    | 6-12       | 7-13       | 8-15        |
    pub fn for_request(complexity: Complexity, signal: u32) -> Self {
        let band = match signal {
            0..=2 => 0,
            3..=5 => 1,
            _ => 2,
        };
        let (min_nodes, max_nodes) = match (complexity, band) {
            (Complexity::Simple, _) => (2, 3),
            (Complexity::Medium, 0) => (4, 7),
            (Complexity::Medium, 1) => (5, 8),
            (Complexity::Medium, _) => (6, 10),
            (Complexity::Complex, 0) => (6, 12),
            (Complexity::Complex, 1) => (7, 13),
            (Complexity::Complex, _) => (8, 15),
        };
        Self {
            min_nodes,
            max_nodes,
        }
    }

    /// Fewest requirements needed so that, with the trigger, the minimum is met.
    pub fn min_requirements(&self) -> usize {
        self.min_nodes.saturating_sub(1).max(1)
    }

    /// Most requirements that still leave room for the reserved slots.
    pub fn max_requirements(&self) -> usize {
        self.max_nodes.saturating_sub(RESERVED_SLOTS).max(1)
    }

    pub fn contains(&self, node_count: usize) -> bool {
        (self.min_nodes..=self.max_nodes).contains(&node_count)
    }
}
