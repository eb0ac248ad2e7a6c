use slotmap::new_key_type;

new_key_type! {
    /// The arena key of a node within a single [`DoublyLinkedList`](super::DoublyLinkedList).
    /// Keys are never shared between lists.
    pub(crate) struct NodeKey;
}

pub(crate) type Link = Option<NodeKey>;

/// A value and the keys of its neighbours. `prev` is None only for the head and `next` is None
/// only for the tail.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link,
    pub next: Link,
}

/// Keys of the first and last node of a non-empty list. They are equal for a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ends {
    pub head: NodeKey,
    pub tail: NodeKey,
}

/// Whether a list has any nodes. Holding the ends only in the `Full` variant means a list can't
/// have a head without a tail, or a count without either.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(Ends),
}
