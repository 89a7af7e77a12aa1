use std::ops::ControlFlow;

use super::Container;
use crate::util::error::IndexOutOfRange;

impl<T> Container<T> {
    /// Visits every element from `from` to `to`, both inclusive, passing each index and element to
    /// `visitor`. Elements are visited in reverse when `from` resolves after `to`.
    ///
    /// Visiting stops as soon as `visitor` returns [`ControlFlow::Break`].
    ///
    /// # Examples
    /// ```
    /// # use std::ops::ControlFlow;
    /// # use container_lib::container;
    /// let con = container!["_", "A", "B", "Z", "J"];
    /// let mut seen = String::new();
    /// con.each_range(1, -2, |_, e| {
    ///     seen.push_str(e);
    ///     if *e == "B" { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    /// }).unwrap();
    /// assert_eq!(seen, "AB");
    /// ```
    pub fn each_range<F>(&self, from: isize, to: isize, visitor: F) -> Result<(), IndexOutOfRange>
    where
        F: FnMut(usize, &T) -> ControlFlow<()>,
    {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;

        if from <= to {
            let span = self.elements[from..=to].iter().enumerate();
            visit(span.map(|(i, e)| (from + i, e)), visitor);
        } else {
            let span = self.elements[to..=from].iter().enumerate().rev();
            visit(span.map(|(i, e)| (to + i, e)), visitor);
        }

        Ok(())
    }

    /// Visits every element from first to last. See [`each_range`](Container::each_range).
    pub fn each<F>(&self, visitor: F)
    where
        F: FnMut(usize, &T) -> ControlFlow<()>,
    {
        visit(self.elements.iter().enumerate(), visitor);
    }

    /// Visits every element from last to first. See [`each_range`](Container::each_range).
    pub fn each_rev<F>(&self, visitor: F)
    where
        F: FnMut(usize, &T) -> ControlFlow<()>,
    {
        visit(self.elements.iter().enumerate().rev(), visitor);
    }

    /// Folds every element into an accumulator, left to right. `f` receives the accumulator so
    /// far, the index and the element, and returns the next accumulator.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::container;
    /// let con = container![1, 2, 3, 4, 5];
    /// assert_eq!(con.reduce(0, |acc, _, e| acc + e), 15);
    /// ```
    pub fn reduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, usize, &T) -> A,
    {
        self.elements
            .iter()
            .enumerate()
            .fold(init, |acc, (i, e)| f(acc, i, e))
    }
}

fn visit<'a, T: 'a, I, F>(elements: I, mut visitor: F)
where
    I: Iterator<Item = (usize, &'a T)>,
    F: FnMut(usize, &T) -> ControlFlow<()>,
{
    for (i, e) in elements {
        if visitor(i, e).is_break() {
            break;
        }
    }
}
