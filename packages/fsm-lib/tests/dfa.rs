use fsm_lib::{
    automaton::{Automaton, Builder, Symbol, accepts, dfa::DFA},
    validation::same_language::{assert_same_language, same_language},
};

fn assert_accept(automaton: &mut impl Automaton, input: &str) {
    automaton.reset();
    assert!(accepts(automaton, input), "expected {input:?} to be accepted");
}

fn assert_reject(automaton: &mut impl Automaton, input: &str) {
    automaton.reset();
    assert!(!accepts(automaton, input), "expected {input:?} to be rejected");
}

#[test]
fn test_dfa_stepping() {
    let mut builder = Builder::new();
    builder.set_starting_state(0);
    builder.set_accepting_state(2);

    builder.add_transition(0, Symbol::Char('a'), 1);
    builder.add_transition(1, Symbol::Char('b'), 2);
    builder.add_transition(2, Symbol::Char('a'), 1);

    let mut dfa = DFA::new(builder);

    assert_accept(&mut dfa, "ab");
    assert_accept(&mut dfa, "abab");
    assert_reject(&mut dfa, "aba");
    // no edge for 'b' out of the start: rejected via abort, not a panic
    assert_reject(&mut dfa, "b");
}

#[test]
fn test_abort_is_sticky_until_reset() {
    let mut builder = Builder::new();
    builder.set_starting_state(0);
    builder.set_accepting_state(1);
    builder.add_transition(0, Symbol::Char('a'), 1);

    let mut dfa = DFA::new(builder);

    dfa.next('b');
    assert!(dfa.aborted());

    // further steps are inert and the flag stays observable
    dfa.next('a');
    assert!(dfa.aborted());
    assert_eq!(dfa.current_state(), 0);

    dfa.reset();
    assert!(!dfa.aborted());

    dfa.next('a');
    assert!(!dfa.aborted());
    assert!(dfa.accepted());
}

#[test]
fn test_empty_input_matches_accepts_lambda() {
    let mut builder = Builder::new();
    builder.set_starting_state(0);
    builder.set_accepting_state(0);
    builder.add_transition(0, Symbol::Char('a'), 1);

    let mut dfa = DFA::new(builder);

    assert_eq!(accepts(&mut dfa, ""), dfa.accepts_lambda());
    assert!(dfa.accepts_lambda());
}

#[test]
fn test_minimize() {
    let mut builder = Builder::new();
    builder.set_starting_state(0);
    builder.set_accepting_state(2);
    builder.set_accepting_state(3);
    builder.set_accepting_state(4);

    builder.add_transition(0, Symbol::Char('a'), 1);
    builder.add_transition(0, Symbol::Char('b'), 2);
    builder.add_transition(1, Symbol::Char('a'), 0);
    builder.add_transition(1, Symbol::Char('b'), 3);
    builder.add_transition(2, Symbol::Char('a'), 4);
    builder.add_transition(2, Symbol::Char('b'), 5);
    builder.add_transition(3, Symbol::Char('a'), 4);
    builder.add_transition(3, Symbol::Char('b'), 5);
    builder.add_transition(4, Symbol::Char('a'), 4);
    builder.add_transition(4, Symbol::Char('b'), 5);
    builder.add_transition(5, Symbol::Char('a'), 5);
    builder.add_transition(5, Symbol::Char('b'), 5);

    let mut dfa = DFA::new(builder);
    let mut minimized = DFA::new(dfa.minimize());

    // 2, 3 and 4 collapse into one accepting state
    assert_eq!(minimized.builder().state_count(), 4);

    for automaton in [&mut dfa, &mut minimized] {
        assert_reject(automaton, "");
        assert_accept(automaton, "ab");
        assert_reject(automaton, "bb");
        assert_accept(automaton, "ba");
        assert_accept(automaton, "abaaa");
        assert_reject(automaton, "abaaab");
    }

    assert_same_language(&mut dfa, &mut minimized, &['a', 'b'], 8);
}

#[test]
fn test_minimize_is_a_fixed_point() {
    let mut builder = Builder::new();
    builder.set_starting_state(0);
    builder.set_accepting_state(3);

    builder.add_transition(0, Symbol::Char('a'), 1);
    builder.add_transition(0, Symbol::Char('b'), 2);
    builder.add_transition(1, Symbol::Char('a'), 3);
    builder.add_transition(2, Symbol::Char('a'), 3);
    builder.add_transition(3, Symbol::Char('a'), 3);
    builder.add_transition(3, Symbol::Char('b'), 3);

    let dfa = DFA::new(builder);
    let mut once = DFA::new(dfa.minimize());
    let mut twice = DFA::new(once.minimize());

    assert_eq!(
        once.builder().state_count(),
        twice.builder().state_count()
    );
    assert!(same_language(&mut once, &mut twice, &['a', 'b'], 8));
}

#[test]
fn test_minimize_prunes_unreachable_states() {
    let mut builder = Builder::new();
    builder.set_starting_state(0);
    builder.set_accepting_state(1);

    builder.add_transition(0, Symbol::Char('a'), 1);
    builder.add_transition(1, Symbol::Char('a'), 0);
    // never reachable from 0
    builder.add_transition(2, Symbol::Char('a'), 0);

    let dfa = DFA::new(builder);
    let minimized = dfa.minimize();

    assert_eq!(minimized.state_count(), 2);
    assert!(!minimized.configuration().contains_key(&2));
}

#[test]
fn test_minimize_resolves_a_merged_starting_state() {
    let mut builder = Builder::new();
    builder.set_starting_state(2);

    // 1 and 2 behave identically, so the start collapses into 1
    builder.add_transition(2, Symbol::Char('a'), 1);
    builder.add_transition(1, Symbol::Char('a'), 1);

    let dfa = DFA::new(builder);
    let minimized = dfa.minimize();

    assert_eq!(minimized.starting_state(), 1);
    assert_eq!(minimized.state_count(), 1);
}
