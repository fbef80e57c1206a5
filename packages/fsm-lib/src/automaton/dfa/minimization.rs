use std::collections::{BTreeMap, VecDeque};

use hashbrown::HashSet;

use crate::automaton::{
    Builder, StateId, Symbol, Transition, dfa::DFA, utils::first_identical_group,
};

impl DFA {
    /// Builds the minimal equivalent of this DFA.
    ///
    /// Unreachable states are dropped first, then behaviourally identical
    /// states are merged one group at a time until none remain. This is a
    /// fixed-point iteration rather than partition refinement; quadratic in
    /// the state count, which is fine for the table sizes this engine sees.
    pub fn minimize(&self) -> Builder {
        let mut starting_state = self.builder().starting_state();
        let mut table = self.builder().configuration().clone();

        let reachable = self.reachable_from(starting_state);
        let unreachable: Vec<StateId> = table
            .keys()
            .copied()
            .filter(|state| !reachable.contains(state))
            .collect();

        tracing::debug!("removing unreachable states: {:?}", unreachable);

        for state in &unreachable {
            table.remove(state);
        }

        loop {
            let group = first_identical_group(&flatten(&table), |state| {
                self.builder().is_accepting(state)
            });

            if group.is_empty() {
                break;
            }

            tracing::debug!("merging equivalent states: {:?}", group);

            let representative = *group.first().expect("merge group cannot be empty");

            if group.contains(&starting_state) {
                starting_state = representative;
            }

            for state in group.iter().skip(1) {
                table.remove(state);
            }

            for transitions in table.values_mut() {
                for transition in transitions.iter_mut() {
                    if group.contains(&transition.to) {
                        transition.to = representative;
                    }
                }
            }
        }

        tracing::debug!(
            "minimized from {} to {} states",
            self.builder().state_count(),
            table.len()
        );

        let mut result = Builder::new();
        result.set_starting_state(starting_state);

        for (&state, transitions) in &table {
            result.add_state(state);

            if self.builder().is_accepting(state) {
                result.set_accepting_state(state);
            }

            for transition in transitions {
                result.add_transition(state, transition.on, transition.to);
            }
        }

        result
    }

    /// Every state reachable from `start` by following transitions,
    /// breadth first.
    fn reachable_from(&self, start: StateId) -> HashSet<StateId> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(state) = queue.pop_front() {
            for transition in self.builder().transitions(state) {
                if visited.insert(transition.to) {
                    queue.push_back(transition.to);
                }
            }
        }

        visited
    }
}

/// Collapses each row to a symbol-to-destination map. Assumes the DFA
/// invariant of at most one destination per symbol; if it is violated the
/// last stored transition wins and the result is undefined.
fn flatten(
    table: &BTreeMap<StateId, Vec<Transition>>,
) -> BTreeMap<StateId, BTreeMap<Symbol, StateId>> {
    table
        .iter()
        .map(|(&state, transitions)| {
            let row = transitions.iter().map(|t| (t.on, t.to)).collect();
            (state, row)
        })
        .collect()
}
