use std::cell::Cell;
use std::rc::Rc;

/// A shared counter of how many [`Tracked`] values have been dropped.
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    /// Creates a value which increments this counter when dropped.
    pub fn track(&self, id: usize) -> Tracked {
        Tracked {
            id,
            counter: self.clone(),
        }
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

/// An element that reports its own drop. Equality only considers `id`.
#[derive(Debug, Clone)]
pub struct Tracked {
    pub id: usize,
    counter: DropCounter,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counter.0.set(self.counter.0.get() + 1);
    }
}
