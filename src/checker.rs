use std::cmp::Ordering;
use std::fmt::Display;

use crate::array_list::{ArrayList, SlotStoreType};

/// Index `i` of the first pair `(i, i + 1)` that is out of order.
pub fn first_unordered<T, F>(items: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .position(|w| compare(&w[0], &w[1]) == Ordering::Greater)
}

pub fn check<T, S, F>(label: &str, list: &ArrayList<T, S>, compare: F)
where
    T: Display,
    S: SlotStoreType,
    F: FnMut(&T, &T) -> Ordering,
{
    let items = list.as_slice();

    match first_unordered(items, compare) {
        Some(i) => println!(
            "Out of order at {}: {} > {}",
            i,
            items[i],
            items[i + 1]
        ),
        None => println!("{} is sorted!", label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted() {
        assert_eq!(first_unordered(&[1, 2, 2, 3], i32::cmp), None);
        assert_eq!(first_unordered::<i32, _>(&[], i32::cmp), None);
        assert_eq!(first_unordered(&[7], i32::cmp), None);
    }

    #[test]
    fn test_first_violation() {
        assert_eq!(first_unordered(&[1, 3, 2, 0], i32::cmp), Some(1));
        assert_eq!(first_unordered(&[1, 3, 2, 0], |a: &i32, b: &i32| b.cmp(a)), Some(0));
    }
}
