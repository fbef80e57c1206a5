use std::collections::BTreeMap;

use crate::automaton::{StateId, Symbol};

/// One edge of the transition table: consume `on`, move to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub on: Symbol,
    pub to: StateId,
}

impl Transition {
    pub fn new(on: Symbol, to: StateId) -> Self {
        Transition { on, to }
    }
}

/// The transition-table builder shared by all automaton flavours.
///
/// Owns the adjacency table (state to ordered outgoing transitions), the
/// starting state, the accepting states, and the derived alphabet. Duplicate
/// transitions are retained in insertion order; the alphabet is kept sorted,
/// deduplicated, and never contains epsilon.
///
/// No validation is performed: dangling state references or ambiguous DFA
/// rows are precondition violations of the automaton that consumes the
/// builder, not construction errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Builder {
    table: BTreeMap<StateId, Vec<Transition>>,
    accepting_states: Vec<StateId>,
    starting_state: StateId,
    alphabet: Vec<char>,
}

impl Builder {
    pub fn new() -> Self {
        Builder::default()
    }

    /// Appends an edge from `from` to `to` labelled `on`.
    ///
    /// Both endpoints get a table entry, so every state mentioned by a
    /// transition is drivable afterwards. Non-epsilon labels are folded into
    /// the sorted alphabet.
    pub fn add_transition(&mut self, from: StateId, on: Symbol, to: StateId) {
        self.table.entry(from).or_default().push(Transition::new(on, to));
        self.table.entry(to).or_default();

        if let Symbol::Char(c) = on
            && let Err(position) = self.alphabet.binary_search(&c)
        {
            self.alphabet.insert(position, c);
        }
    }

    /// Materializes an entry for `state`, with no outgoing transitions if it
    /// had none. Needed for states that only ever appear as targets removed
    /// later, or for accepting sinks without outgoing edges.
    pub fn add_state(&mut self, state: StateId) {
        self.table.entry(state).or_default();
    }

    /// Overwrites the starting state. Last write wins.
    pub fn set_starting_state(&mut self, state: StateId) {
        self.starting_state = state;
    }

    /// Appends to the accepting states. Redundant calls are harmless, the
    /// duplicates stay visible in [`Builder::accepting_states`].
    pub fn set_accepting_state(&mut self, state: StateId) {
        self.accepting_states.push(state);
    }

    pub fn configuration(&self) -> &BTreeMap<StateId, Vec<Transition>> {
        &self.table
    }

    pub fn accepting_states(&self) -> &[StateId] {
        &self.accepting_states
    }

    pub fn starting_state(&self) -> StateId {
        self.starting_state
    }

    /// The derived alphabet: all distinct non-epsilon labels, ascending.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting_states.contains(&state)
    }

    /// The outgoing transitions of `state`, in insertion order.
    ///
    /// Panics if `state` has no table entry; by the density invariant that
    /// can only happen for states never mentioned in any transition, so a
    /// failing lookup is a contract violation of the caller.
    pub fn transitions(&self, state: StateId) -> &[Transition] {
        self.table
            .get(&state)
            .unwrap_or_else(|| panic!("state {state} has no entry in the transition table"))
    }

    pub fn state_count(&self) -> usize {
        self.table.len()
    }
}
