use crate::workflow::{ConnectionMap, Node};

pub const ORIGIN_X: i32 = 250;
pub const ORIGIN_Y: i32 = 300;
pub const STEP_X: i32 = 220;
pub const BRANCH_OFFSET_Y: i32 = 180;

/// Places nodes left to right in list order. Targets reached through a false
/// branch drop below the main line.
pub fn assign_positions(nodes: &mut [Node], connections: &ConnectionMap) {
    let false_targets: Vec<String> = connections
        .edges()
        .into_iter()
        .filter(|e| e.output_index == 1)
        .map(|e| e.target)
        .collect();

    for (i, node) in nodes.iter_mut().enumerate() {
        let y = if false_targets.contains(&node.display_name) {
            ORIGIN_Y + BRANCH_OFFSET_Y
        } else {
            ORIGIN_Y
        };
        node.position = [ORIGIN_X + STEP_X * i as i32, y];
    }
}
