use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim when formatted with [`Debug`].
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats the items of a cloneable iterator as a list when formatted with [`Debug`]. Lets a
/// collection's contents be used as a single `debug_struct` field.
pub struct DebugList<I>(pub I);

impl<I> Debug for DebugList<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Writes each item with its [`Debug`] representation, wrapped in `open` and `close` and
/// separated by `sep`.
pub fn write_separated<I>(
    f: &mut Formatter<'_>,
    items: I,
    open: &str,
    sep: &str,
    close: &str,
) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Debug,
{
    for (index, item) in items.into_iter().enumerate() {
        if index != 0 {
            write!(f, "{sep}")?;
        }
        write!(f, "{open}{item:?}{close}")?;
    }
    Ok(())
}
