use std::slice;
use std::vec;

use super::Container;

impl<T> IntoIterator for Container<T> {
    type Item = T;

    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Container<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        Vec::from_iter(value).into()
    }
}

impl<T> Extend<T> for Container<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        self.append_all(iter);
    }
}
