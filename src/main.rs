#![cfg_attr(feature = "bench", feature(test))]
#[cfg(feature = "bench")]
extern crate test;

use std::io;
use std::time::Instant;

use clap::{Parser, ValueEnum};

mod array_list;
mod checker;
mod sort;

use array_list::{ArrayList, SlotStoreType, UncheckedStoreType, VecStoreType};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Store {
    /// Backing store on a `Vec`.
    Vec,
    /// Backing store on a raw allocation.
    Unchecked,
}

/// Walk through the array list operations and both sorts.
#[derive(Parser, Debug)]
struct Args {
    /// Backing store used by every list in the run.
    #[arg(short, long, value_enum, default_value_t = Store::Vec)]
    store: Store,

    /// Length of the descending list fed to the quicksort.
    #[arg(short, long, default_value_t = 1000)]
    large: u32,

    /// Print the large list before and after sorting.
    #[arg(long)]
    show_large: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    println!("Using {:?} store", args.store);
    match args.store {
        Store::Vec => run::<VecStoreType>(&args),
        Store::Unchecked => run::<UncheckedStoreType>(&args),
    }
}

fn run<S: SlotStoreType>(args: &Args) -> io::Result<()> {
    let mut list = ArrayList::<String, S>::new();

    list.push("Aston".to_string());
    list.push("Homework".to_string());
    list.insert(2, "Lesson".to_string())
        .map_err(io::Error::other)?;

    println!("Element at index 1: {}", list.get(1).map_err(io::Error::other)?);
    println!("Removed element: {}", list.remove(2).map_err(io::Error::other)?);
    println!("Current number of elements in the list: {}", list.len());

    list.sort_by(String::cmp);
    println!("List: {}", list);
    checker::check("List", &list, String::cmp);

    list.clear();
    println!("After clear: {} (empty: {}, capacity: {})", list, list.is_empty(), list.capacity());

    let mut numbers = ArrayList::<i32, S>::new();
    numbers.extend([34, 7, 23, 32, 5, 62]);
    println!("Before quickSort: {}", numbers);
    numbers.quick_sort_by(i32::cmp);
    println!("After quickSort: {}", numbers);
    checker::check("Numbers", &numbers, i32::cmp);

    let mut large: ArrayList<u32, S> = (1..=args.large).rev().collect();
    if args.show_large {
        println!("Before sorting large list: {}", large);
    }
    let now = Instant::now();
    large.quick_sort_by(u32::cmp);
    let elapsed = now.elapsed().as_micros();
    if args.show_large {
        println!("After sorting large list: {}", large);
    }
    println!("Sorted {} elements in {} us", large.len(), elapsed);
    checker::check("Large list", &large, u32::cmp);

    let mut doubles: ArrayList<f64, S> = [5.6, 3.1, 9.8, 1.4].into_iter().collect();
    println!("Before sorting double list: {}", doubles);
    doubles.quick_sort_by(f64::total_cmp);
    println!("After sorting double list: {}", doubles);
    checker::check("Double list", &doubles, f64::total_cmp);

    Ok(())
}
