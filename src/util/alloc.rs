use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// Counts how many of the [`DropToken`]s it handed out have been dropped.
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn token(&self, id: usize) -> DropToken {
        DropToken {
            id,
            counter: Rc::clone(&self.0),
        }
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

/// A value that bumps its [`DropCounter`] exactly once, when dropped. Tokens compare by `id`.
#[derive(Debug)]
pub struct DropToken {
    pub id: usize,
    counter: Rc<Cell<usize>>,
}

impl PartialEq for DropToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for DropToken {
    fn drop(&mut self) {
        self.counter.set(self.counter.get() + 1);
    }
}
