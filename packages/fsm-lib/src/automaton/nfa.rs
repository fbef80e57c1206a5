use std::collections::BTreeSet;

use hashbrown::HashMap;

use crate::automaton::{Automaton, Builder, StateId, Symbol, utils::targets_on};

/// The nondeterministic variant: a set of current states, no epsilon edges.
#[derive(Debug, Clone)]
pub struct NFA {
    builder: Builder,
    current_states: BTreeSet<StateId>,
    aborted: bool,
}

impl NFA {
    pub fn new(builder: Builder) -> Self {
        let current_states = BTreeSet::from([builder.starting_state()]);

        NFA {
            builder,
            current_states,
            aborted: false,
        }
    }

    pub fn current_states(&self) -> &BTreeSet<StateId> {
        &self.current_states
    }

    pub fn builder(&self) -> &Builder {
        &self.builder
    }

    /// Checks if a set of states contains an accepting state.
    pub fn is_accepting_set(&self, states: &[StateId]) -> bool {
        states.iter().any(|&state| self.builder.is_accepting(state))
    }

    /// Subset construction: builds a deterministic table for the same
    /// language.
    ///
    /// Destination sets of at most one state keep the original ids; a set of
    /// two or more becomes a synthetic state with a fresh id above the
    /// original range, reused whenever the same set reappears. Symbols with
    /// an empty destination set get no edge at all, which a DFA treats as a
    /// reject via its abort semantics.
    pub fn to_dfa(&self) -> Builder {
        let config = self.builder.configuration();
        let alphabet = self.builder.alphabet();
        let max_state = config.keys().next_back().copied().unwrap_or_default();

        let mut synthetic = SyntheticStates::new(max_state + 1);
        let mut result = Builder::new();

        // the start is always one original state, never a synthetic one
        result.set_starting_state(self.builder.starting_state());

        for (&state, transitions) in config {
            result.add_state(state);

            if self.builder.is_accepting(state) {
                result.set_accepting_state(state);
            }

            for &symbol in alphabet {
                let targets: BTreeSet<StateId> =
                    targets_on(transitions, Symbol::Char(symbol)).collect();

                if let Some(target) = synthetic.resolve(targets) {
                    result.add_transition(state, Symbol::Char(symbol), target);
                }
            }
        }

        // each synthetic state steps over the original member states, which
        // may uncover further synthetic states until the fixed point
        while let Some((id, members)) = synthetic.pending.pop() {
            result.add_state(id);

            if self.is_accepting_set(&members) {
                result.set_accepting_state(id);
            }

            for &symbol in alphabet {
                let targets: BTreeSet<StateId> = members
                    .iter()
                    .flat_map(|&member| {
                        targets_on(self.builder.transitions(member), Symbol::Char(symbol))
                    })
                    .collect();

                if let Some(target) = synthetic.resolve(targets) {
                    result.add_transition(id, Symbol::Char(symbol), target);
                }
            }
        }

        tracing::debug!(
            "subset construction: {} states in, {} states out",
            self.builder.state_count(),
            result.state_count()
        );

        result
    }
}

impl Automaton for NFA {
    fn next(&mut self, input: char) {
        if self.aborted {
            return;
        }

        let mut next_states = BTreeSet::new();

        for &state in &self.current_states {
            next_states.extend(targets_on(
                self.builder.transitions(state),
                Symbol::Char(input),
            ));
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
        self.accepted()
    }

    fn reset(&mut self) {
        self.current_states = BTreeSet::from([self.builder.starting_state()]);
        self.aborted = false;
    }
}

impl From<Builder> for NFA {
    fn from(builder: Builder) -> Self {
        NFA::new(builder)
    }
}

/// Id assignment for the composite states discovered during subset
/// construction. Distinct destination sets get fresh ids in observation
/// order; a set seen before reuses its id, which bounds the construction at
/// the number of distinct subsets.
struct SyntheticStates {
    ids: HashMap<Vec<StateId>, StateId>,
    next_id: StateId,
    pending: Vec<(StateId, Vec<StateId>)>,
}

impl SyntheticStates {
    fn new(first_id: StateId) -> Self {
        SyntheticStates {
            ids: HashMap::new(),
            next_id: first_id,
            pending: Vec::new(),
        }
    }

    /// Maps a destination set to the id the deterministic table uses for it:
    /// nothing for the empty set, the state itself for a singleton, and a
    /// synthetic id otherwise. Fresh synthetic sets are queued for
    /// processing.
    fn resolve(&mut self, targets: BTreeSet<StateId>) -> Option<StateId> {
        let targets: Vec<StateId> = targets.into_iter().collect();

        match targets.len() {
            0 => None,
            1 => Some(targets[0]),
            _ => Some(match self.ids.get(&targets) {
                Some(&id) => id,
                None => {
                    let id = self.next_id;
                    self.next_id += 1;
                    self.ids.insert(targets.clone(), id);
                    self.pending.push((id, targets));
                    id
                }
            }),
        }
    }
}
