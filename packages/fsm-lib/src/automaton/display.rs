use std::fmt;

use itertools::Itertools;

use crate::automaton::{Builder, Symbol, Transition};

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::Epsilon => write!(f, "ε"),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.on, self.to)
    }
}

/// Renders the accepting states and the per-state transition lists, one row
/// per state in ascending order.
impl fmt::Display for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "accepting states: {{{}}}",
            self.accepting_states().iter().join(", ")
        )?;

        for (state, transitions) in self.configuration() {
            writeln!(f, "{}: [{}]", state, transitions.iter().join(", "))?;
        }

        Ok(())
    }
}

/// Renders a builder's table in graphviz dot format, accepting states as
/// double circles.
pub fn to_graphviz(builder: &Builder) -> String {
    let mut dot = String::new();
    dot.push_str("digraph finite_state_machine {\n");
    dot.push_str("fontname=\"Helvetica,Arial,sans-serif\"\n");
    dot.push_str("node [fontname=\"Helvetica,Arial,sans-serif\"]\n");
    dot.push_str("edge [fontname=\"Helvetica,Arial,sans-serif\"]\n");
    dot.push_str("rankdir=LR;\n");
    dot.push_str("node [shape=point,label=\"\"]START\n");

    dot.push_str(&format!(
        "node [shape = doublecircle]; {};\n",
        builder.accepting_states().iter().unique().join(" ")
    ));
    dot.push_str("node [shape = circle];\n");
    dot.push_str(&format!("START -> {};\n", builder.starting_state()));

    for (&state, transitions) in builder.configuration() {
        for transition in transitions {
            dot.push_str(&format!(
                "{} -> {} [ label=\"{}\" ];\n",
                state, transition.to, transition.on
            ));
        }
    }

    dot.push_str("}\n");

    dot
}
