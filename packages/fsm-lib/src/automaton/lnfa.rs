use std::collections::{BTreeMap, BTreeSet};

use crate::automaton::{
    Automaton, Builder, StateId, Symbol,
    utils::{first_identical_group, rename_merged},
};

/// The epsilon-nondeterministic variant: a set of current states plus
/// epsilon edges that are taken without consuming input.
#[derive(Debug, Clone)]
pub struct LambdaNFA {
    builder: Builder,
    current_states: BTreeSet<StateId>,
    /// Whether the one-time closure of the starting state has happened.
    /// Explicit, because the starting state can legitimately recur as the
    /// sole current state mid-run.
    started: bool,
    aborted: bool,
}

impl LambdaNFA {
    pub fn new(builder: Builder) -> Self {
        let current_states = BTreeSet::from([builder.starting_state()]);

        LambdaNFA {
            builder,
            current_states,
            started: false,
            aborted: false,
        }
    }

    pub fn current_states(&self) -> &BTreeSet<StateId> {
        &self.current_states
    }

    pub fn builder(&self) -> &Builder {
        &self.builder
    }

    /// Every state reachable from `state` over epsilon edges alone,
    /// including `state` itself.
    pub fn epsilon_closure(&self, state: StateId) -> BTreeSet<StateId> {
        let mut closure = BTreeSet::new();
        self.close_into(&mut closure, state);
        closure
    }

    /// Folds `origin` and its epsilon closure into `states`. Already-known
    /// states are not explored again, so repeated calls over one accumulator
    /// stay linear in the state count.
    fn close_into(&self, states: &mut BTreeSet<StateId>, origin: StateId) {
        let mut stack = vec![origin];
        states.insert(origin);

        while let Some(state) = stack.pop() {
            for transition in self.builder.transitions(state) {
                if transition.on.is_epsilon() && states.insert(transition.to) {
                    stack.push(transition.to);
                }
            }
        }
    }

    /// Epsilon elimination: builds an equivalent table without epsilon edges.
    ///
    /// Requires the states to be densely numbered from 0; the construction
    /// iterates the table structurally and a gap would silently shift rows,
    /// so a gap is a contract panic instead.
    pub fn to_nfa(&self) -> Builder {
        let config = self.builder.configuration();
        let alphabet = self.builder.alphabet();

        for (index, &state) in config.keys().enumerate() {
            assert_eq!(
                state, index as StateId,
                "epsilon elimination requires states densely numbered from 0"
            );
        }

        let closures: BTreeMap<StateId, BTreeSet<StateId>> = config
            .keys()
            .map(|&state| (state, self.epsilon_closure(state)))
            .collect();

        // a state whose closure touches an accepting state accepts as well
        let mut final_states: BTreeSet<StateId> =
            self.builder.accepting_states().iter().copied().collect();

        for (&state, closure) in &closures {
            if closure.iter().any(|&member| self.builder.is_accepting(member)) {
                final_states.insert(state);
            }
        }

        tracing::debug!("accepting states after closure: {:?}", final_states);

        // per state and symbol: step the whole closure by the symbol, then
        // close every destination again
        let mut rows: BTreeMap<StateId, Vec<BTreeSet<StateId>>> = BTreeMap::new();

        for &state in config.keys() {
            let mut row = Vec::with_capacity(alphabet.len());

            for &symbol in alphabet {
                let mut targets = BTreeSet::new();

                for &member in &closures[&state] {
                    for transition in self.builder.transitions(member) {
                        if transition.on.matches(symbol) {
                            self.close_into(&mut targets, transition.to);
                        }
                    }
                }

                row.push(targets);
            }

            rows.insert(state, row);
        }

        // merge states the table can no longer tell apart, one group per
        // pass, until none remain
        let mut starting_state = self.builder.starting_state();

        loop {
            let group = first_identical_group(&rows, |state| final_states.contains(&state));

            if group.is_empty() {
                break;
            }

            tracing::debug!("merging identical states: {:?}", group);

            let representative = *group.first().expect("merge group cannot be empty");

            if group.contains(&starting_state) {
                starting_state = representative;
            }

            for state in group.iter().skip(1) {
                rows.remove(state);
            }

            for row in rows.values_mut() {
                for targets in row.iter_mut() {
                    rename_merged(targets, &group);
                }
            }

            rename_merged(&mut final_states, &group);
        }

        tracing::debug!(
            "epsilon elimination: {} states in, {} states out",
            config.len(),
            rows.len()
        );

        let mut result = Builder::new();
        result.set_starting_state(starting_state);

        for &state in &final_states {
            result.set_accepting_state(state);
        }

        for (&state, row) in &rows {
            result.add_state(state);

            for (index, &symbol) in alphabet.iter().enumerate() {
                for &target in &row[index] {
                    result.add_transition(state, Symbol::Char(symbol), target);
                }
            }
        }

        result
    }
}

impl Automaton for LambdaNFA {
    fn next(&mut self, input: char) {
        if self.aborted {
            return;
        }

        if !self.started {
            // an automaton with only epsilon edges out of its start must see
            // them before the first real symbol is matched
            self.current_states = self.epsilon_closure(self.builder.starting_state());
            self.started = true;
        }

        let mut next_states = BTreeSet::new();

        for &state in &self.current_states {
            for transition in self.builder.transitions(state) {
                if transition.on.matches(input) {
                    self.close_into(&mut next_states, transition.to);
                }
            }
        }

        if next_states.is_empty() {
            self.aborted = true;
        }

        self.current_states = next_states;
    }

    fn aborted(&self) -> bool {
        self.aborted
    }

    fn accepted(&self) -> bool {
        self.current_states
            .iter()
            .any(|&state| self.builder.is_accepting(state))
    }

    fn accepts_lambda(&self) -> bool {
        // independent of the runtime state: the empty input never reaches
        // the one-time start closure inside next
        self.epsilon_closure(self.builder.starting_state())
            .iter()
            .any(|&state| self.builder.is_accepting(state))
    }

    fn reset(&mut self) {
        self.current_states = BTreeSet::from([self.builder.starting_state()]);
        self.started = false;
        self.aborted = false;
    }
}

impl From<Builder> for LambdaNFA {
    fn from(builder: Builder) -> Self {
        LambdaNFA::new(builder)
    }
}
