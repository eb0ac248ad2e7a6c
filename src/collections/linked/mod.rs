//! Linked collection types. Currently this is just [`DoublyLinkedList`], whose nodes live in an
//! arena owned by the list.

pub mod list;

#[doc(inline)]
pub use list::DoublyLinkedList;
