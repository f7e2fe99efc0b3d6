use super::*;

impl<T> SlotStore for Vec<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        Vec::<T>::with_capacity(capacity)
    }

    fn grow(&mut self, capacity: usize) {
        self.reserve_exact(capacity.saturating_sub(self.len()))
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

pub struct VecStoreType {}
impl SlotStoreType for VecStoreType {
    type Store<T> = Vec<T>;
}
