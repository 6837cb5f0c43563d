//! Conversions between `Optional` and the standard library.

use super::Optional;

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Empty
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.or_null()
    }
}

/// Iterator over the value of an owned `Optional`
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: std::option::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// Iterator over a borrowed `Optional`
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::option::IntoIter<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Optional<T> {
    /// Iterate over the value, yielding at most one item
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().or_null().into_iter(),
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.or_null().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
