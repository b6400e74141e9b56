//! Tests for per-region evaluation and the decision cascade

#[cfg(test)]
mod tests {
    use crate::{classic_shapes, diagram, domino};
    use polypack::{
        Decision, Evaluation, PackingError, Region, RegionEvaluator, Shape, compile, evaluate,
    };

    // Tests an all-zero count vector is feasible at any size
    // Verified by running the area check before the empty check
    #[test]
    fn test_empty_request_is_feasible() {
        let catalog = compile(&classic_shapes()).unwrap();
        let mut evaluator = RegionEvaluator::new();

        for (width, height) in [(0, 0), (1, 1), (12, 5), (64, 40)] {
            let region = Region::new(width, height, vec![0; 6]);
            assert_eq!(
                evaluator.evaluate_detailed(&region, &catalog).unwrap(),
                Evaluation {
                    feasible: true,
                    decided_by: Decision::Empty,
                }
            );
        }
    }

    // Tests oversized requests are refused before any search
    // Verified by comparing required cells against the width only
    #[test]
    fn test_area_short_circuit() {
        let catalog = compile(&[diagram(&["###", "###"])]).unwrap();
        let region = Region::new(12, 5, vec![11]);

        let evaluation = RegionEvaluator::new()
            .evaluate_detailed(&region, &catalog)
            .unwrap();
        assert!(!evaluation.feasible);
        assert_eq!(evaluation.decided_by, Decision::AreaExceeded);
    }

    // Tests easy regions are settled by first fit
    // Verified by skipping the greedy phase
    #[test]
    fn test_greedy_decides_easy_region() {
        let catalog = compile(&[diagram(&["###", "###"])]).unwrap();
        let region = Region::new(4, 4, vec![2]);

        let evaluation = RegionEvaluator::new()
            .evaluate_detailed(&region, &catalog)
            .unwrap();
        assert!(evaluation.feasible);
        assert_eq!(evaluation.decided_by, Decision::Greedy);
    }

    // Tests greedy failure falls back to exact search
    // Verified by returning the greedy verdict directly
    #[test]
    fn test_backtracking_fallback() {
        let catalog = compile(&[diagram(&["###", "###"])]).unwrap();
        let region = Region::new(12, 5, vec![10]);
        let mut evaluator = RegionEvaluator::new();

        let evaluation = evaluator.evaluate_detailed(&region, &catalog).unwrap();
        assert!(evaluation.feasible);
        assert_eq!(evaluation.decided_by, Decision::Backtracking);
        assert_eq!(evaluator.grid().occupied_count(), 60);
    }

    // Tests exact search reports infeasible regions that pass the area check
    // Verified by treating skip budget exhaustion as success
    #[test]
    fn test_backtracking_infeasible() {
        let catalog = compile(&[diagram(&["###"])]).unwrap();
        let region = Region::new(2, 2, vec![1]);

        let evaluation = RegionEvaluator::new()
            .evaluate_detailed(&region, &catalog)
            .unwrap();
        assert!(!evaluation.feasible);
        assert_eq!(evaluation.decided_by, Decision::Backtracking);
    }

    // Tests zero-cell families never block placement
    // Verified by counting empty families as pieces
    #[test]
    fn test_zero_cell_family_is_ignored() {
        let catalog = compile(&[Shape::default(), domino()]).unwrap();
        assert!(evaluate(&Region::new(2, 2, vec![5, 2]), &catalog).unwrap());
        assert_eq!(
            RegionEvaluator::new()
                .evaluate_detailed(&Region::new(1, 1, vec![3, 0]), &catalog)
                .unwrap()
                .decided_by,
            Decision::Empty
        );
    }

    // Tests invalid regions are rejected rather than truncated
    // Verified by removing region validation
    #[test]
    fn test_invalid_regions() {
        let catalog = compile(&[domino()]).unwrap();
        assert!(matches!(
            evaluate(&Region::new(65, 1, vec![1]), &catalog),
            Err(PackingError::RegionTooWide { width: 65, .. })
        ));
        assert!(matches!(
            evaluate(&Region::new(4, 4, vec![1, 1]), &catalog),
            Err(PackingError::UnknownFamily { family: 1, .. })
        ));
    }

    // Tests the phases can be run alone and agree with the cascade
    // Verified by skipping the grid reset in solve_exact
    #[test]
    fn test_single_phase_entry_points() {
        let catalog = compile(&[diagram(&["###", "###"])]).unwrap();
        let mut evaluator = RegionEvaluator::new();
        let region = Region::new(12, 5, vec![10]);

        assert!(!evaluator.pack_greedy(&region, &catalog).unwrap());
        assert!(evaluator.solve_exact(&region, &catalog).unwrap());
        assert!(!evaluator.solve_exact(&Region::new(12, 5, vec![11]), &catalog).unwrap());
    }

    // Tests evaluator buffers carry nothing between regions
    // Verified by resetting the grid only when its size changes
    #[test]
    fn test_evaluator_reuse_is_stateless() {
        let catalog = compile(&classic_shapes()).unwrap();
        let mut evaluator = RegionEvaluator::new();
        let small = Region::new(4, 4, vec![0, 0, 0, 0, 2, 0]);
        let large = Region::new(12, 5, vec![1, 0, 1, 0, 2, 2]);

        let first = evaluator.evaluate(&small, &catalog).unwrap();
        let second = evaluator.evaluate(&large, &catalog).unwrap();
        let third = evaluator.evaluate(&small, &catalog).unwrap();

        assert!(first);
        assert!(second);
        assert_eq!(first, third);
    }

    // Tests a thin region no piece fits is refused rather than overflowing
    // Verified by recursing once per skipped cell
    #[test]
    fn test_thin_region_is_infeasible() {
        let catalog = compile(&[diagram(&["##", "##"])]).unwrap();
        let region = Region::new(1, 200_000, vec![1]);

        let evaluation = RegionEvaluator::new()
            .evaluate_detailed(&region, &catalog)
            .unwrap();
        assert!(!evaluation.feasible);
        assert_eq!(evaluation.decided_by, Decision::Backtracking);
    }

    // Tests huge counts are refused by area before any list is built
    // Verified by flattening the placement list before the area check
    #[test]
    fn test_huge_counts_short_circuit() {
        let catalog = compile(&[domino()]).unwrap();
        let mut evaluator = RegionEvaluator::new();

        for count in [1usize << 40, usize::MAX / 2, usize::MAX] {
            let region = Region::new(4, 4, vec![count]);
            assert_eq!(
                evaluator.evaluate_detailed(&region, &catalog).unwrap(),
                Evaluation {
                    feasible: false,
                    decided_by: Decision::AreaExceeded,
                }
            );
            assert!(!evaluator.pack_greedy(&region, &catalog).unwrap());
            assert!(!evaluator.solve_exact(&region, &catalog).unwrap());
        }
    }
}
