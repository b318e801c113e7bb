use std::cmp::Ordering;

use crate::model::Priority;

/// Position of a priority in the table ordering, most urgent first.
pub fn rank(priority: Priority) -> u8 {
    match priority {
        Priority::High => 0,
        Priority::Medium => 1,
        Priority::Low => 2,
    }
}

/// Compare two priorities so that High sorts before Medium before Low.
pub fn compare(a: Priority, b: Priority) -> Ordering {
    rank(a).cmp(&rank(b))
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(*self, *other)
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Priority::High, Priority::Medium, Ordering::Less)]
    #[case(Priority::Medium, Priority::Low, Ordering::Less)]
    #[case(Priority::Low, Priority::High, Ordering::Greater)]
    #[case(Priority::Medium, Priority::Medium, Ordering::Equal)]
    fn compares_by_rank(#[case] a: Priority, #[case] b: Priority, #[case] expected: Ordering) {
        assert_eq!(compare(a, b), expected);
    }

    #[test]
    fn ord_matches_compare() {
        let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
        priorities.sort();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::Medium, Priority::Low]
        );
    }
}
