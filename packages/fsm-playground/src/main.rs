use fsm_lib::automaton::{
    Automaton, Builder, Symbol, accepts, dfa::DFA, display::to_graphviz, lnfa::LambdaNFA, nfa::NFA,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut builder = Builder::new();

    builder.set_starting_state(0);
    builder.set_accepting_state(2);
    builder.set_accepting_state(6);

    builder.add_transition(0, Symbol::Char('a'), 0);
    builder.add_transition(0, Symbol::Char('a'), 1);
    builder.add_transition(0, Symbol::Char('b'), 2);
    builder.add_transition(0, Symbol::Epsilon, 2);
    builder.add_transition(0, Symbol::Epsilon, 3);
    builder.add_transition(1, Symbol::Epsilon, 2);
    builder.add_transition(2, Symbol::Char('a'), 3);
    builder.add_transition(2, Symbol::Epsilon, 4);
    builder.add_transition(3, Symbol::Char('b'), 3);
    builder.add_transition(3, Symbol::Epsilon, 5);
    builder.add_transition(3, Symbol::Char('a'), 6);
    builder.add_transition(3, Symbol::Char('b'), 6);
    builder.add_transition(4, Symbol::Char('b'), 5);
    builder.add_transition(4, Symbol::Char('a'), 6);
    builder.add_transition(4, Symbol::Epsilon, 6);
    builder.add_transition(5, Symbol::Epsilon, 2);
    builder.add_transition(5, Symbol::Char('b'), 2);
    builder.add_transition(5, Symbol::Epsilon, 6);
    builder.add_transition(5, Symbol::Char('a'), 6);
    builder.add_transition(6, Symbol::Char('b'), 6);

    println!("lambda-NFA:\n{builder}");

    let mut lnfa = LambdaNFA::new(builder);
    let eliminated = lnfa.to_nfa();
    println!("NFA:\n{eliminated}");

    let mut nfa = NFA::new(eliminated);
    let determinized = nfa.to_dfa();
    println!("DFA:\n{determinized}");

    let mut dfa = DFA::new(determinized);
    let minimized = dfa.minimize();
    println!("minimal DFA:\n{minimized}");
    println!("{}", to_graphviz(&minimized));

    let mut minimal = DFA::new(minimized);

    for input in ["", "a", "b", "ab", "bbbb", "c", "aabbbbcbaab"] {
        for (name, automaton) in [
            ("lambda-NFA", &mut lnfa as &mut dyn Automaton),
            ("NFA", &mut nfa),
            ("DFA", &mut dfa),
            ("minimal DFA", &mut minimal),
        ] {
            automaton.reset();
            println!("{name} accepts {input:?}: {}", accepts(automaton, input));
        }
    }
}
