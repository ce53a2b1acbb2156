//! Main list / waitlist split, derived on every read.

use serde::{Deserialize, Serialize};

use crate::roster::{Snapshot, Status};

/// Court capacity for the standard session.
pub const DEFAULT_CAPACITY: usize = 10;

/// Derived grouping of one snapshot.
///
/// `main` and `waitlist` keep confirmation-queue order; `absent` and
/// `no_response` are sorted by name for stable display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub main: Vec<String>,
    pub waitlist: Vec<String>,
    pub absent: Vec<String>,
    pub no_response: Vec<String>,
}

/// Split the confirmation queue at `capacity` and bucket the rest of the
/// roster by status. Owns no state; recompute after every change.
pub fn partition(snapshot: &Snapshot, capacity: usize) -> Partition {
    let queue = snapshot.confirmation_queue();
    let cut = capacity.min(queue.len());
    let main = queue[..cut].to_vec();
    let waitlist = queue[cut..].to_vec();

    let mut absent = Vec::new();
    let mut no_response = Vec::new();
    for name in snapshot.roster().names() {
        match snapshot.status_of(name).expect("roster member always has a status") {
            Status::Absent => absent.push(name.clone()),
            Status::NoResponse => no_response.push(name.clone()),
            Status::Confirmed => {}
        }
    }
    absent.sort();
    no_response.sort();

    Partition { main, waitlist, absent, no_response }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;
    use proptest::prelude::*;

    fn confirmed(roster: &Roster, names: &[&str]) -> Snapshot {
        let mut snapshot = Snapshot::new(roster);
        for name in names {
            snapshot = snapshot.apply_transition(name, Status::Confirmed).unwrap();
        }
        snapshot
    }

    #[test]
    fn test_split_keeps_queue_order() {
        let roster = Roster::new(["A", "B", "C", "D"]).unwrap();
        let snapshot = confirmed(&roster, &["D", "B", "A"]);

        let groups = partition(&snapshot, 2);
        assert_eq!(groups.main, ["D", "B"]);
        assert_eq!(groups.waitlist, ["A"]);
        assert_eq!(groups.no_response, ["C"]);
        assert!(groups.absent.is_empty());
    }

    #[test]
    fn test_worked_example_reentry_then_split() {
        // Confirm A, B, C, then toggle A off and on again: queue [B,C,A].
        let roster = Roster::new(["A", "B", "C"]).unwrap();
        let snapshot = confirmed(&roster, &["A", "B", "C"])
            .apply_transition("A", Status::Confirmed)
            .unwrap()
            .apply_transition("A", Status::Confirmed)
            .unwrap();

        let groups = partition(&snapshot, 2);
        assert_eq!(groups.main, ["B", "C"]);
        assert_eq!(groups.waitlist, ["A"]);
    }

    #[test]
    fn test_absent_and_silent_are_sorted() {
        let roster = Roster::new(["Zico", "Pele", "Dida", "Nene"]).unwrap();
        let snapshot = Snapshot::new(&roster)
            .apply_transition("Zico", Status::Absent)
            .unwrap()
            .apply_transition("Dida", Status::Absent)
            .unwrap();

        let groups = partition(&snapshot, DEFAULT_CAPACITY);
        assert_eq!(groups.absent, ["Dida", "Zico"]);
        assert_eq!(groups.no_response, ["Nene", "Pele"]);
    }

    #[test]
    fn test_zero_capacity_puts_everyone_on_the_waitlist() {
        let roster = Roster::new(["A", "B"]).unwrap();
        let snapshot = confirmed(&roster, &["A", "B"]);

        let groups = partition(&snapshot, 0);
        assert!(groups.main.is_empty());
        assert_eq!(groups.waitlist, ["A", "B"]);
    }

    proptest! {
        /// main ++ waitlist is exactly the queue; main is the queue
        /// prefix of length min(capacity, queue len).
        #[test]
        fn prop_partition_is_a_prefix_split(
            picks in prop::collection::vec(0..8usize, 0..16),
            capacity in 0..12usize,
        ) {
            let names: Vec<String> = (0..8).map(|i| format!("P{}", i)).collect();
            let roster = Roster::new(names.clone()).unwrap();

            let mut snapshot = Snapshot::new(&roster);
            for idx in picks {
                snapshot =
                    snapshot.apply_transition(&names[idx], Status::Confirmed).unwrap();
            }

            let queue = snapshot.confirmation_queue().to_vec();
            let groups = partition(&snapshot, capacity);

            prop_assert_eq!(groups.main.len(), capacity.min(queue.len()));
            prop_assert_eq!(
                groups.main.len() + groups.waitlist.len(),
                queue.len()
            );

            let mut rejoined = groups.main.clone();
            rejoined.extend(groups.waitlist.clone());
            prop_assert_eq!(rejoined, queue);
        }
    }
}
