use crate::format::problem::*;
use crate::format::solution::SolutionStatus;
use crate::generator::*;
use crate::helpers::solve_with_config;
use kargo_core::solver::AssignmentConfig;
use proptest::prelude::*;

prop_compose! {
    fn get_problem_with_small_demand()
        (problem in generate_problem(1..24, 1..400, 0..5))
    -> Problem {
        problem
    }
}

prop_compose! {
    fn get_problem_with_heavy_demand()
        (problem in generate_problem(1..8, 500..3000, 0..3))
    -> Problem {
        problem
    }
}

fn get_total_demand(problem: &Problem) -> i64 {
    problem.cargo.iter().filter_map(|cargo| cargo.weight).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn can_solve_problem_with_small_demand(problem in get_problem_with_small_demand()) {
        let total = get_total_demand(&problem);

        let solution = solve_with_config(problem, AssignmentConfig::default());

        prop_assert_eq!(solution.statistic.served_kg + solution.statistic.unserved_kg, total);
        prop_assert_eq!(solution.status, SolutionStatus::FullyServed);
    }

    #[test]
    fn can_terminate_within_iteration_cap(problem in get_problem_with_heavy_demand(), max_iterations in 1_usize..6) {
        let total = get_total_demand(&problem);
        let config = AssignmentConfig { max_iterations, ..AssignmentConfig::default() };

        let solution = solve_with_config(problem, config);

        let iterations = solution.extras.as_ref().map_or(0, |extras| extras.iterations);
        prop_assert!(iterations <= max_iterations);
        prop_assert!(solution.routes.len() <= max_iterations);
        prop_assert_eq!(solution.statistic.served_kg + solution.statistic.unserved_kg, total);
    }
}
