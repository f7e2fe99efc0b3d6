use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use std::mem::size_of;
use std::ptr::{self, NonNull};
use std::slice;

use super::*;

/// Backing store on a raw allocation. Slots `0..len` are initialized,
/// slots `len..capacity` are uninitialized memory.
pub struct Unchecked<T> {
    ptr: NonNull<T>,
    capacity: usize,
    len: usize,
}

impl<T> Unchecked<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ptr: Self::allocate(capacity),
            capacity,
            len: 0,
        }
    }

    fn layout(capacity: usize) -> Layout {
        Layout::array::<T>(capacity).unwrap_or_else(|_| panic!("Capacity overflow: {capacity}"))
    }

    fn allocate(capacity: usize) -> NonNull<T> {
        let layout = Self::layout(capacity);
        if layout.size() == 0 {
            return NonNull::dangling();
        }
        let raw = unsafe { alloc(layout) as *mut T };
        NonNull::new(raw).unwrap_or_else(|| handle_alloc_error(layout))
    }

    fn release(&mut self) {
        let layout = Self::layout(self.capacity);
        if layout.size() > 0 {
            unsafe {
                dealloc(self.ptr.as_ptr() as *mut u8, layout);
            }
        }
    }

    fn capacity(&self) -> usize {
        if size_of::<T>() == 0 {
            usize::MAX
        } else {
            self.capacity
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn grow(&mut self, capacity: usize) {
        if capacity <= self.capacity {
            return;
        }
        let new_ptr = Self::allocate(capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
        }
        self.release();
        self.ptr = new_ptr;
        self.capacity = capacity;
    }

    fn insert(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);
        debug_assert!(self.len < self.capacity());
        unsafe {
            let p = self.ptr.as_ptr().add(index);
            ptr::copy(p, p.add(1), self.len - index);
            p.write(value);
        }
        self.len += 1;
    }

    fn remove(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);
        unsafe {
            let p = self.ptr.as_ptr().add(index);
            let value = p.read();
            ptr::copy(p.add(1), p, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len);
        // A panicking destructor must not lead to a double drop.
        self.len = 0;
        unsafe {
            ptr::drop_in_place(live);
        }
    }

    fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> Drop for Unchecked<T> {
    fn drop(&mut self) {
        self.clear();
        self.release();
    }
}

impl<T> SlotStore for Unchecked<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        Unchecked::<T>::with_capacity(capacity)
    }

    fn grow(&mut self, capacity: usize) {
        self.grow(capacity)
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn insert(&mut self, index: usize, value: Self::Item) {
        self.insert(index, value)
    }

    fn remove(&mut self, index: usize) -> Self::Item {
        self.remove(index)
    }

    fn clear(&mut self) {
        self.clear()
    }

    fn as_slice(&self) -> &[Self::Item] {
        self.as_slice()
    }

    fn as_mut_slice(&mut self) -> &mut [Self::Item] {
        self.as_mut_slice()
    }
}

pub struct UncheckedStoreType {}
impl SlotStoreType for UncheckedStoreType {
    type Store<T> = Unchecked<T>;
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct Counted(Rc<Cell<usize>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_grow_keeps_elements() {
        let mut store = Unchecked::with_capacity(2);
        store.insert(0, 1);
        store.insert(1, 2);
        store.grow(4);
        store.insert(2, 3);
        assert_eq!(store.as_slice(), &[1, 2, 3]);
        assert_eq!(store.capacity(), 4);
    }

    #[test]
    fn test_insert_and_remove_shift() {
        let mut store = Unchecked::with_capacity(4);
        store.insert(0, 'b');
        store.insert(0, 'a');
        store.insert(2, 'd');
        store.insert(2, 'c');
        assert_eq!(store.as_slice(), &['a', 'b', 'c', 'd']);
        assert_eq!(store.remove(1), 'b');
        assert_eq!(store.as_slice(), &['a', 'c', 'd']);
        assert_eq!(store.remove(2), 'd');
        assert_eq!(store.as_slice(), &['a', 'c']);
    }

    #[test]
    fn test_drops_every_element_once() {
        let drops = Rc::new(Cell::new(0));
        let mut store = Unchecked::with_capacity(4);
        for i in 0..4 {
            store.insert(i, Counted(drops.clone()));
        }
        drop(store.remove(1));
        assert_eq!(drops.get(), 1);
        store.clear();
        assert_eq!(drops.get(), 4);
        store.insert(0, Counted(drops.clone()));
        drop(store);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn test_zero_sized() {
        let mut store = Unchecked::with_capacity(10);
        for i in 0..10 {
            store.insert(i, ());
        }
        store.grow(20);
        assert_eq!(store.len(), 10);
        store.remove(3);
        assert_eq!(store.len(), 9);
    }
}
