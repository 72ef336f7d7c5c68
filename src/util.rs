use core::hash::Hash;
use std::collections::HashSet;
use std::fmt::Debug;

/// Insertion-ordered set: iterates in the order elements were first inserted.
#[derive(Clone, Eq)]
pub struct VecSet<T: Hash> {
    vec: Vec<T>,
    set: HashSet<T>,
}

impl<T: Hash + Eq + Clone> VecSet<T> {
    pub fn insert(&mut self, element: T) -> bool {
        let success = self.set.insert(element.clone());
        if success {
            self.vec.push(element);
        }
        success
    }
    pub fn extend(&mut self, elements: impl IntoIterator<Item = T>) {
        for x in elements.into_iter() {
            self.insert(x);
        }
    }
}
impl<T: Hash + Eq + Clone> FromIterator<T> for VecSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut c = VecSet::default();
        c.extend(iter);
        c
    }
}
impl<T: Hash> VecSet<T> {
    pub fn as_slice(&self) -> &[T] {
        self.vec.as_slice()
    }
    pub fn into_vec(self) -> Vec<T> {
        self.vec
    }
}

impl<T: Debug + Hash> Debug for VecSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice().iter()).finish()
    }
}

impl<T: Hash + PartialEq> PartialEq for VecSet<T> {
    fn eq(&self, other: &VecSet<T>) -> bool {
        self.vec == other.vec
    }
}

impl<T: Hash> Default for VecSet<T> {
    fn default() -> Self {
        Self { vec: Default::default(), set: Default::default() }
    }
}

/// Every length-`len` sequence over `items` (with repetition), lazily, in
/// odometer order: the rightmost position varies fastest.
///
/// `len == 0` yields exactly one empty sequence; empty `items` with a
/// positive `len` yields nothing.
#[derive(Debug, Clone)]
pub struct Tuples<T> {
    items: Vec<T>,
    digits: Vec<usize>,
    done: bool,
}

impl<T> Tuples<T> {
    pub fn new(items: Vec<T>, len: usize) -> Self {
        let done = len > 0 && items.is_empty();
        Self { items, digits: vec![0; len], done }
    }
}

impl<T: Clone> Iterator for Tuples<T> {
    type Item = Vec<T>;
    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let tuple = self.digits.iter().map(|&d| self.items[d].clone()).collect();
        // advance
        self.done = true;
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.items.len() {
                self.done = false;
                break;
            }
            *digit = 0;
        }
        Some(tuple)
    }
}
