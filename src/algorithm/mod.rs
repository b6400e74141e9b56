/// Backtracking search over the first empty cell with a skip budget
pub mod backtrack;
/// Worker pool evaluating independent regions
pub mod dispatcher;
/// Per-region orchestration of the packing strategies
pub mod evaluator;
/// Bitset of shape-family indices tried at one decision point
pub mod family_set;
/// First-fit heuristic packing
pub mod greedy;
