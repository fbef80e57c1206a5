use std::collections::{BTreeMap, BTreeSet};

use crate::automaton::{StateId, Symbol, Transition};

/// All targets reachable from `transitions` on `on`, in stored order.
pub fn targets_on(transitions: &[Transition], on: Symbol) -> impl Iterator<Item = StateId> + '_ {
    transitions.iter().filter(move |t| t.on == on).map(|t| t.to)
}

/// Finds one group of behaviourally identical states: the lowest state `i`
/// that has at least one identical partner `j > i`, together with every such
/// `j`. Two states are identical when their rows compare equal and their
/// finality agrees. Returns the empty set when no two states match; callers
/// merge the group and scan again until that fixed point.
pub(crate) fn first_identical_group<R: PartialEq>(
    rows: &BTreeMap<StateId, R>,
    is_final: impl Fn(StateId) -> bool,
) -> BTreeSet<StateId> {
    let entries: Vec<(StateId, &R)> = rows.iter().map(|(&state, row)| (state, row)).collect();
    let mut group = BTreeSet::new();

    for (index, &(i, row_i)) in entries.iter().enumerate() {
        for &(j, row_j) in &entries[index + 1..] {
            if is_final(i) == is_final(j) && row_i == row_j {
                group.insert(i);
                group.insert(j);
            }
        }

        if !group.is_empty() {
            break;
        }
    }

    group
}

/// Redirects every member of `merged` contained in `set` to the group's
/// representative (its lowest member).
pub(crate) fn rename_merged(set: &mut BTreeSet<StateId>, merged: &BTreeSet<StateId>) {
    if set.iter().any(|state| merged.contains(state)) {
        set.retain(|state| !merged.contains(state));
        set.insert(*merged.first().expect("merge group cannot be empty"));
    }
}

#[test]
fn test_first_identical_group() {
    let rows = BTreeMap::from([(0, 'x'), (1, 'y'), (2, 'x'), (3, 'x'), (4, 'y')]);

    // 3 is final, so it cannot join the group of 0 and 2
    let group = first_identical_group(&rows, |state| state == 3);
    assert_eq!(group, BTreeSet::from([0, 2]));

    let group = first_identical_group(&rows, |_| false);
    assert_eq!(group, BTreeSet::from([0, 2, 3]));
}
