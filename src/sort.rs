use std::cmp::Ordering;
use std::mem;

/// In-place quicksort with the Lomuto partition scheme.
///
/// The last element of every sub-range is the pivot. Recursion goes into the
/// smaller side, the larger side is handled by the loop, so the stack depth
/// stays logarithmic even on already sorted input.
pub fn quick_sort_by<T, F>(mut slice: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while slice.len() > 1 {
        let pivot = partition(slice, compare);
        let (low, high) = mem::take(&mut slice).split_at_mut(pivot);
        let high = &mut high[1..];

        if low.len() < high.len() {
            quick_sort_by(low, compare);
            slice = high;
        } else {
            quick_sort_by(high, compare);
            slice = low;
        }
    }
}

/// Partitions `slice` around its last element and returns the pivot's final
/// index. Elements comparing equal to the pivot end up on its left.
pub fn partition<T, F>(slice: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = slice.len() - 1;
    // Next position for an element not greater than the pivot.
    let mut small = 0;

    for j in 0..high {
        if compare(&slice[j], &slice[high]) != Ordering::Greater {
            slice.swap(small, j);
            small += 1;
        }
    }
    slice.swap(small, high);

    small
}


#[cfg(all(test, feature = "bench"))]
mod benches {
    use test::Bencher;

    fn shuffled(n: u64) -> Vec<u64> {
        // Multiplicative hash, enough to break up runs.
        (0..n).map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c15) >> 40).collect()
    }

    #[bench]
    fn bench_quick_sort_shuffled(b: &mut Bencher) {
        let input = shuffled(10_000);

        b.iter(|| {
            let mut v = input.clone();
            super::quick_sort_by(&mut v, &mut u64::cmp);
            v
        });
    }

    #[bench]
    fn bench_quick_sort_descending(b: &mut Bencher) {
        let input: Vec<u64> = (0..1000).rev().collect();

        b.iter(|| {
            let mut v = input.clone();
            super::quick_sort_by(&mut v, &mut u64::cmp);
            v
        });
    }

    #[bench]
    fn bench_std_sort_shuffled(b: &mut Bencher) {
        let input = shuffled(10_000);

        b.iter(|| {
            let mut v = input.clone();
            v.sort_by(u64::cmp);
            v
        });
    }
}
