use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ops::Index;

/// A vector that doesn't change size once built, so every ID handed out by `iter` stays valid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StaticVec<I, T> {
    data: Vec<T>,
    marker: PhantomData<I>,
}

pub trait Id: Into<usize> + From<usize> {}

impl<I, T> StaticVec<I, T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            marker: PhantomData,
        }
    }

    pub fn num_elements(&self) -> usize {
        self.data.len()
    }
}

impl<I: Id, T> StaticVec<I, T> {
    pub fn get(&self, id: I) -> Option<&T> {
        self.data.get(id.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.data.iter().enumerate().map(|(i, d)| (I::from(i), d))
    }
}

impl<I: Id, T> Index<I> for StaticVec<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        &self.data[id.into()]
    }
}

impl<I, T> FromIterator<T> for StaticVec<I, T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        StaticVec::new(iter.into_iter().collect())
    }
}
