use crate::automaton::{Automaton, Builder, StateId};

pub mod minimization;

/// The deterministic variant: exactly one current state.
///
/// The table is expected to hold at most one transition per (state, symbol)
/// pair. That is a precondition of deterministic stepping, not something the
/// constructor checks; conversions that emit a DFA guarantee it.
#[derive(Debug, Clone)]
pub struct DFA {
    builder: Builder,
    current_state: StateId,
    aborted: bool,
}

impl DFA {
    pub fn new(builder: Builder) -> Self {
        let current_state = builder.starting_state();

        DFA {
            builder,
            current_state,
            aborted: false,
        }
    }

    /// The state reached by the last successful step. Meaningful only up to
    /// the last step before an abort.
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    pub fn builder(&self) -> &Builder {
        &self.builder
    }
}

impl From<Builder> for DFA {
    fn from(builder: Builder) -> Self {
        DFA::new(builder)
    }
}

impl Automaton for DFA {
    fn next(&mut self, input: char) {
        if self.aborted {
            return;
        }

        for transition in self.builder.transitions(self.current_state) {
            if transition.on.matches(input) {
                self.current_state = transition.to;
                return;
            }
        }

        self.aborted = true;
    }

    fn aborted(&self) -> bool {
        self.aborted
    }

    fn accepted(&self) -> bool {
        self.builder.is_accepting(self.current_state)
    }

    fn accepts_lambda(&self) -> bool {
        self.accepted()
    }

    fn reset(&mut self) {
        self.current_state = self.builder.starting_state();
        self.aborted = false;
    }
}
