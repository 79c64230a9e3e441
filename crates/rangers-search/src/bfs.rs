// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Breadth-first search over rota configurations.
//!
//! `BfsSolver` seeds the root configuration of a `Scenario`, then drains a
//! FIFO frontier. Every dequeued configuration is expanded by trying the
//! move catalog rotated by a random offset; legal moves are applied to a
//! clone of the node. A child that satisfies the goal predicate is reported
//! as a `Solution`, every other child is enqueued unless it reached the
//! depth bound.
//!
//! The random rotation only changes the order in which siblings are
//! generated. The set of reported move histories of an exhaustive run is the
//! same for every randomness source. Visited states are not deduplicated.
//!
//! Per-run state (frontier, statistics, collected solutions) lives in a
//! search session, so a solver can be reused for several runs.

use crate::{
    config::BfsConfig,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    result::{BfsOutcome, BfsTerminationReason},
    solution::Solution,
    stats::BfsStatistics,
};
use rand::Rng;
use rangers_model::{
    catalog::MoveCatalog, configuration::Configuration, entity::EntityId, scenario::Scenario,
};
use std::collections::VecDeque;

/// A breadth-first solver driven by an injected randomness source.
///
/// The randomness source is owned by the solver and advances across runs.
/// Seed it (for example with `rand::rngs::StdRng::seed_from_u64`) to get a
/// reproducible expansion order.
#[derive(Debug, Clone)]
pub struct BfsSolver<R> {
    rng: R,
    config: BfsConfig,
}

impl<R> BfsSolver<R>
where
    R: Rng,
{
    /// Creates a solver with the default configuration: exhaustive and
    /// without a depth bound.
    #[inline]
    pub fn new(rng: R) -> Self {
        Self::with_config(BfsConfig::default(), rng)
    }

    #[inline]
    pub fn with_config(config: BfsConfig, rng: R) -> Self {
        Self { rng, config }
    }

    #[inline]
    pub fn config(&self) -> &BfsConfig {
        &self.config
    }

    /// Runs a search over `scenario`, reporting events to `monitor`.
    ///
    /// Pass `&mut monitor` to keep ownership of a monitor and inspect it
    /// afterwards.
    pub fn solve<M>(&mut self, scenario: &Scenario, mut monitor: M) -> BfsOutcome
    where
        M: SearchMonitor,
    {
        let catalog = scenario.catalog();
        let session = BfsSearchSession::new(
            &mut self.rng,
            self.config,
            &catalog,
            *scenario.goal_north(),
            &mut monitor,
        );
        session.run(scenario.seed())
    }
}

impl<R> std::fmt::Display for BfsSolver<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BfsSolver({})", self.config)
    }
}

/// State of a single search run.
struct BfsSearchSession<'a, R, M> {
    rng: &'a mut R,
    config: BfsConfig,
    catalog: &'a MoveCatalog,
    goal_north: [EntityId; 2],
    monitor: &'a mut M,
    frontier: VecDeque<Configuration>,
    solutions: Vec<Solution>,
    stats: BfsStatistics,
    start_time: std::time::Instant,
}

impl<R, M> std::fmt::Debug for BfsSearchSession<'_, R, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BfsSearchSession")
            .field("config", &self.config)
            .field("catalog", &self.catalog)
            .field("frontier_len", &self.frontier.len())
            .field("solutions", &self.solutions.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, R, M> BfsSearchSession<'a, R, M>
where
    R: Rng,
    M: SearchMonitor,
{
    #[inline]
    fn new(
        rng: &'a mut R,
        config: BfsConfig,
        catalog: &'a MoveCatalog,
        goal_north: [EntityId; 2],
        monitor: &'a mut M,
    ) -> Self {
        Self {
            rng,
            config,
            catalog,
            goal_north,
            monitor,
            frontier: VecDeque::new(),
            solutions: Vec::new(),
            stats: BfsStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Runs the search from `root`. The root itself is never goal-checked.
    fn run(mut self, root: Configuration) -> BfsOutcome {
        tracing::info!(
            root_depth = root.depth(),
            catalog = self.catalog.len(),
            mode = %self.config.mode,
            max_depth = ?self.config.max_depth,
            "starting breadth-first search"
        );

        self.monitor.on_enter_search(&root, &self.stats);
        self.frontier.push_back(root);

        let termination_reason = loop {
            if let SearchCommand::Terminate(msg) = self.monitor.search_command(&self.stats) {
                break BfsTerminationReason::Aborted(msg);
            }

            let Some(node) = self.frontier.pop_front() else {
                break BfsTerminationReason::Exhausted;
            };

            // Only reachable for a root that already sits at the bound.
            if !self.config.allows_expansion(node.depth()) {
                self.stats.on_depth_limited();
                continue;
            }

            self.stats.on_node_expanded(node.depth());
            self.monitor.on_expand(&node, self.frontier.len(), &self.stats);

            if let Some(reason) = self.expand(&node) {
                break reason;
            }
        };

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);

        tracing::info!(
            reason = %termination_reason,
            solutions = self.stats.solutions_found,
            nodes = self.stats.nodes_expanded,
            "breadth-first search finished"
        );

        BfsOutcome::new(self.solutions, termination_reason, self.stats)
    }

    /// Generates the children of `node`. Returns a termination reason if
    /// the run has to stop before the frontier drains.
    fn expand(&mut self, node: &Configuration) -> Option<BfsTerminationReason> {
        let catalog = self.catalog;
        let offset = if catalog.is_empty() {
            0
        } else {
            self.rng.random_range(0..catalog.len())
        };

        for mv in catalog.rotated(offset) {
            self.stats.on_move_attempted();
            if !node.is_legal(mv) {
                self.stats.on_move_rejected();
                continue;
            }

            let mut child = node.clone();
            let applied = child.attempt_move(mv);
            debug_assert!(applied, "legal move {} was rejected", mv);

            if child.is_goal_state(&self.goal_north) {
                self.report_solution(child);

                if self.config.stops_at_first_solution() {
                    return Some(BfsTerminationReason::FirstSolution);
                }
                if let SearchCommand::Terminate(msg) = self.monitor.search_command(&self.stats) {
                    return Some(BfsTerminationReason::Aborted(msg));
                }
            } else if self.config.allows_expansion(child.depth()) {
                self.frontier.push_back(child);
                self.stats.on_node_enqueued(self.frontier.len());
            } else {
                self.stats.on_depth_limited();
            }
        }

        None
    }

    fn report_solution(&mut self, configuration: Configuration) {
        self.stats.on_solution_found();
        let solution = Solution::new(self.stats.solutions_found, configuration);

        tracing::debug!(
            ordinal = solution.ordinal(),
            depth = solution.history().len(),
            "solution found"
        );

        self.monitor.on_solution_found(&solution, &self.stats);
        self.solutions.push(solution);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SearchMode,
        monitor::{no_op::NoOperationMonitor, solution_limit::SolutionLimitMonitor},
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rangers_model::{catalog::Move, scenario::ScenarioBuilder, station::Station};
    use std::collections::BTreeSet;

    /// Length of the shortest fair rota.
    const SHORTEST_ROTA: usize = 12;

    /// Shortest rotas that start with the forced opening.
    const SOLUTIONS_PER_OPENING: usize = 800;

    fn solver(seed: u64, config: BfsConfig) -> BfsSolver<ChaCha8Rng> {
        BfsSolver::with_config(config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn histories(outcome: &BfsOutcome) -> BTreeSet<Vec<Move>> {
        outcome
            .solutions()
            .iter()
            .map(|s| s.history().to_vec())
            .collect()
    }

    fn assert_fair_goal(solution: &Solution, goal_north: &[EntityId; 2]) {
        let config = solution.configuration();
        assert!(config.is_goal_state(goal_north));
        for &id in goal_north {
            assert_eq!(config.record(id).station(), Station::North);
        }
        let moved = config.records()[0].moved_count();
        for record in config.records() {
            assert!(record.is_fair(), "unfair record {}", record.id());
            assert_eq!(record.moved_count(), moved);
        }
    }

    /// Records the history of every expanded configuration.
    #[derive(Default)]
    struct ExpansionRecorder {
        expanded: Vec<Vec<Move>>,
        entered: usize,
        exited: usize,
    }

    impl SearchMonitor for ExpansionRecorder {
        fn name(&self) -> &str {
            "ExpansionRecorder"
        }

        fn on_enter_search(&mut self, _root: &Configuration, _statistics: &BfsStatistics) {
            self.entered += 1;
        }

        fn on_exit_search(&mut self, _statistics: &BfsStatistics) {
            self.exited += 1;
        }

        fn on_expand(
            &mut self,
            node: &Configuration,
            _frontier_len: usize,
            _statistics: &BfsStatistics,
        ) {
            self.expanded.push(node.history().to_vec());
        }

        fn on_solution_found(&mut self, _solution: &Solution, _statistics: &BfsStatistics) {}
    }

    /// Terminates once a number of nodes has been expanded.
    struct NodeBudget(u64);

    impl SearchMonitor for NodeBudget {
        fn name(&self) -> &str {
            "NodeBudget"
        }

        fn on_enter_search(&mut self, _root: &Configuration, _statistics: &BfsStatistics) {}

        fn on_exit_search(&mut self, _statistics: &BfsStatistics) {}

        fn on_expand(
            &mut self,
            _node: &Configuration,
            _frontier_len: usize,
            _statistics: &BfsStatistics,
        ) {}

        fn on_solution_found(&mut self, _solution: &Solution, _statistics: &BfsStatistics) {}

        fn search_command(&mut self, statistics: &BfsStatistics) -> SearchCommand {
            if statistics.nodes_expanded >= self.0 {
                SearchCommand::Terminate("node budget spent".to_string())
            } else {
                SearchCommand::Continue
            }
        }
    }

    #[test]
    fn test_exhaustive_search_reports_every_shortest_rota() {
        let scenario = Scenario::rangers();
        let config = BfsConfig::new().with_max_depth(SHORTEST_ROTA);

        let first = solver(1, config).solve(&scenario, NoOperationMonitor::new());
        assert!(first.is_exhausted());
        assert_eq!(first.solutions().len(), SOLUTIONS_PER_OPENING);
        assert_eq!(first.statistics().solutions_found, SOLUTIONS_PER_OPENING as u64);

        let opening = Move::from(('A', 'C'));
        for (i, solution) in first.solutions().iter().enumerate() {
            assert_eq!(solution.ordinal(), i as u64 + 1);
            assert_eq!(solution.history().len(), SHORTEST_ROTA);
            assert_eq!(solution.history()[0], opening);
            assert_fair_goal(solution, scenario.goal_north());
        }

        let first_set = histories(&first);
        assert_eq!(first_set.len(), SOLUTIONS_PER_OPENING, "histories are distinct");
        drop(first);

        let second = solver(0xDEAD_BEEF, config).solve(&scenario, NoOperationMonitor::new());
        assert!(second.is_exhausted());
        assert_eq!(histories(&second), first_set);
    }

    #[test]
    fn test_every_opening_yields_the_same_number_of_shortest_rotas() {
        let config = BfsConfig::new().with_max_depth(SHORTEST_ROTA);
        for (first, second) in [('A', 'C'), ('A', 'D'), ('B', 'C'), ('B', 'D')] {
            let scenario = ScenarioBuilder::new()
                .entity('A', Station::North)
                .entity('B', Station::North)
                .entity('C', Station::South)
                .entity('D', Station::South)
                .opening(first, second)
                .goal_north('A', 'B')
                .build()
                .expect("valid scenario");

            let outcome = solver(3, config).solve(&scenario, NoOperationMonitor::new());
            assert!(outcome.is_exhausted());
            assert_eq!(
                outcome.solutions().len(),
                SOLUTIONS_PER_OPENING,
                "opening {}{}",
                first,
                second
            );
            let opening = Move::from((first, second));
            assert!(outcome.solutions().iter().all(|s| s.history()[0] == opening));
        }
    }

    #[test]
    fn test_early_exit_modes() {
        let scenario = Scenario::rangers();

        let config = BfsConfig::new().with_mode(SearchMode::FirstSolution);
        let outcome = solver(42, config).solve(&scenario, NoOperationMonitor::new());
        assert_eq!(outcome.termination_reason(), &BfsTerminationReason::FirstSolution);
        assert_eq!(outcome.solutions().len(), 1);
        let solution = &outcome.solutions()[0];
        assert_eq!(solution.ordinal(), 1);
        assert_eq!(solution.history().len(), SHORTEST_ROTA);
        assert_fair_goal(solution, scenario.goal_north());
        drop(outcome);

        let config = BfsConfig::new().with_max_depth(SHORTEST_ROTA);
        let outcome = solver(42, config).solve(&scenario, SolutionLimitMonitor::new(3));
        assert_eq!(
            outcome.termination_reason(),
            &BfsTerminationReason::Aborted("solution limit reached".to_string())
        );
        assert_eq!(outcome.solutions().len(), 3);
        assert!(!outcome.is_exhausted());
        assert!(outcome.has_solution());
    }

    #[test]
    fn test_shallow_bound_counts_every_node() {
        // Every node has exactly four legal moves out of six, and no fair
        // rota is shorter than twelve moves.
        let config = BfsConfig::new().with_max_depth(6);
        let outcome = solver(7, config).solve(&Scenario::rangers(), NoOperationMonitor::new());
        let stats = outcome.statistics();

        assert!(outcome.is_exhausted());
        assert!(!outcome.has_solution());
        assert_eq!(stats.nodes_expanded, 1 + 4 + 16 + 64 + 256);
        assert_eq!(stats.moves_attempted, stats.nodes_expanded * 6);
        assert_eq!(stats.moves_rejected, stats.nodes_expanded * 2);
        assert_eq!(stats.nodes_enqueued, 4 + 16 + 64 + 256);
        assert_eq!(stats.depth_limited, 1024);
        assert_eq!(stats.max_depth, 5);
        assert_eq!(stats.max_frontier_len, 256);
    }

    #[test]
    fn test_root_at_bound_is_not_expanded() {
        let mut recorder = ExpansionRecorder::default();
        let config = BfsConfig::new().with_max_depth(1);
        let outcome = solver(7, config).solve(&Scenario::rangers(), &mut recorder);

        assert!(outcome.is_exhausted());
        assert_eq!(outcome.statistics().nodes_expanded, 0);
        assert_eq!(outcome.statistics().depth_limited, 1);
        assert!(recorder.expanded.is_empty());
        assert_eq!((recorder.entered, recorder.exited), (1, 1));
    }

    #[test]
    fn test_same_seed_gives_same_expansion_order() {
        let config = BfsConfig::new().with_max_depth(5);
        let scenario = Scenario::rangers();

        let mut first = ExpansionRecorder::default();
        solver(11, config).solve(&scenario, &mut first);
        let mut second = ExpansionRecorder::default();
        solver(11, config).solve(&scenario, &mut second);
        assert_eq!(first.expanded, second.expanded);

        let mut other = ExpansionRecorder::default();
        solver(12, config).solve(&scenario, &mut other);
        let as_set = |r: &ExpansionRecorder| r.expanded.iter().cloned().collect::<BTreeSet<_>>();
        assert_eq!(as_set(&first), as_set(&other));
    }

    #[test]
    fn test_expansion_is_breadth_first() {
        let mut recorder = ExpansionRecorder::default();
        let config = BfsConfig::new().with_max_depth(5);
        solver(3, config).solve(&Scenario::rangers(), &mut recorder);

        assert_eq!(recorder.expanded[0], vec![Move::from(('A', 'C'))]);
        assert!(
            recorder
                .expanded
                .windows(2)
                .all(|pair| pair[0].len() <= pair[1].len())
        );
    }

    #[test]
    fn test_monitor_can_abort_before_solutions() {
        let mut solver = BfsSolver::new(ChaCha8Rng::seed_from_u64(5));
        assert_eq!(solver.config(), &BfsConfig::default());
        let outcome = solver.solve(&Scenario::rangers(), NodeBudget(10));
        assert_eq!(
            outcome.termination_reason(),
            &BfsTerminationReason::Aborted("node budget spent".to_string())
        );
        assert_eq!(outcome.statistics().nodes_expanded, 10);
        assert!(!outcome.has_solution());
    }

    #[test]
    fn test_search_without_forced_opening_starts_at_the_seed() {
        let mut recorder = ExpansionRecorder::default();
        let config = BfsConfig::new().with_max_depth(3);
        let scenario = Scenario::rangers().without_opening();
        let outcome = solver(9, config).solve(&scenario, &mut recorder);

        assert!(outcome.is_exhausted());
        assert!(recorder.expanded[0].is_empty());
        assert_eq!(outcome.statistics().nodes_expanded, 1 + 4 + 16);

        let openings: BTreeSet<Move> = recorder
            .expanded
            .iter()
            .filter(|h| h.len() == 1)
            .map(|h| h[0])
            .collect();
        let expected: BTreeSet<Move> = [('A', 'C'), ('A', 'D'), ('B', 'C'), ('B', 'D')]
            .into_iter()
            .map(Move::from)
            .collect();
        assert_eq!(openings, expected);
    }

    #[test]
    fn test_custom_goal_pair() {
        // Sending A and B back out for good is much quicker than returning
        // them to North.
        let scenario = ScenarioBuilder::new()
            .entity('A', Station::North)
            .entity('B', Station::North)
            .entity('C', Station::South)
            .entity('D', Station::South)
            .opening('A', 'C')
            .goal_north('C', 'D')
            .build()
            .expect("valid scenario");

        let config = BfsConfig::new().with_max_depth(6);
        let outcome = solver(17, config).solve(&scenario, NoOperationMonitor::new());

        assert!(outcome.is_exhausted());
        assert_eq!(outcome.solutions().len(), 2);
        for solution in outcome.solutions() {
            assert_eq!(solution.history().len(), 6);
            assert_fair_goal(solution, scenario.goal_north());
        }
    }

    #[test]
    fn test_solver_is_reusable() {
        let mut solver = solver(21, BfsConfig::new().with_max_depth(4));
        let first = solver.solve(&Scenario::rangers(), NoOperationMonitor::new());
        let second = solver.solve(&Scenario::rangers(), NoOperationMonitor::new());
        assert_eq!(first.statistics().nodes_expanded, second.statistics().nodes_expanded);
        assert_eq!(solver.to_string(), "BfsSolver(BfsConfig(mode: Exhaustive, max_depth: 4))");
    }
}
