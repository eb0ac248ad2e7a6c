#![cfg(test)]

use super::*;
use crate::collections::contiguous::DynamicArray;
use crate::collections::error::{EmptyCollection, FullCollection, IndexOutOfBounds};
use crate::util::alloc::DropCounter;
use crate::util::panic::assert_panics;

fn contents<T: Clone>(buffer: &CircularBuffer<T>) -> DynamicArray<T> {
    buffer.iter().cloned().collect()
}

#[test]
fn test_full_then_wrap() {
    let mut queue = CircularBuffer::with_maxsize(3);
    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();
    queue.enqueue(3).unwrap();
    assert!(queue.is_full());

    assert_eq!(
        queue.enqueue(4),
        Err(FullCollection { maxsize: 3 }),
        "Enqueuing onto a full buffer should fail."
    );
    assert_eq!(*contents(&queue), [1, 2, 3], "A failed enqueue shouldn't modify the buffer.");

    assert_eq!(queue.dequeue(), Ok(1));
    assert!(!queue.is_full());
    queue.enqueue(4).unwrap();
    assert_eq!(*contents(&queue), [2, 3, 4]);
    assert!(queue.is_full());
}

#[test]
fn test_full_and_empty_predicates() {
    for maxsize in 0..6 {
        let mut queue = CircularBuffer::with_maxsize(maxsize);
        assert!(queue.is_empty());
        assert_eq!(queue.maxsize(), maxsize);
        assert_eq!(queue.slot_count(), maxsize + 1, "One slot should always be kept free.");

        for i in 0..maxsize {
            assert!(!queue.is_full(), "The buffer shouldn't be full before maxsize enqueues.");
            queue.enqueue(i).unwrap();
            assert_eq!(queue.len(), i + 1);
        }
        assert!(queue.is_full());
        assert_eq!(queue.enqueue(maxsize), Err(FullCollection { maxsize }));

        for i in 0..maxsize {
            assert_eq!(queue.dequeue(), Ok(i));
        }
        assert!(queue.is_empty(), "Dequeuing everything should leave the buffer empty.");
        assert_eq!(queue.dequeue(), Err(EmptyCollection));
    }
}

#[test]
fn test_len_across_wrap() {
    let mut queue = CircularBuffer::with_maxsize(4);
    for round in 0..20 {
        queue.enqueue(round).unwrap();
        queue.enqueue(round + 100).unwrap();
        let expected = match round % 3 {
            0 => round,
            1 => round - 1 + 100,
            _ => round - 1,
        };
        assert_eq!(queue.dequeue(), Ok(expected));
        assert_eq!(queue.len(), round % 3 + 1);
        if queue.len() == 3 {
            queue.dequeue().unwrap();
            queue.dequeue().unwrap();
            queue.dequeue().unwrap();
        }
        assert!(queue.front < queue.slot_count() && queue.rear < queue.slot_count());
    }
}

#[test]
fn test_front_back_and_indexing() {
    let mut queue = CircularBuffer::with_maxsize(3);
    assert_eq!(queue.front(), Err(EmptyCollection));
    assert_eq!(queue.back(), Err(EmptyCollection));

    // Move the indices so the contents wrap around the end of the ring.
    for i in 0..3 {
        queue.enqueue(i).unwrap();
    }
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    queue.enqueue(3).unwrap();
    queue.enqueue(4).unwrap();
    assert!(queue.rear < queue.front, "The contents should now wrap.");

    assert_eq!(queue.front(), Ok(&2));
    assert_eq!(queue.back(), Ok(&4));
    assert_eq!(queue.try_get(1), Ok(&3));
    assert_eq!(queue[2], 4);
    assert_eq!(queue.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_panics!({ queue[3] });

    assert!(queue.iter().rev().copied().eq([4, 3, 2]));
    assert!(queue.contains(&3));
    assert!(!queue.contains(&0), "Dequeued values shouldn't be found.");
}

#[test]
fn test_pop_back() {
    let mut stack = CircularBuffer::with_maxsize(2);
    stack.enqueue('a').unwrap();
    stack.enqueue('b').unwrap();

    assert_eq!(stack.pop_back(), Ok('b'));
    stack.enqueue('c').unwrap();
    assert_eq!(*contents(&stack), ['a', 'c']);
    assert_eq!(stack.pop_back(), Ok('c'));
    assert_eq!(stack.pop_back(), Ok('a'));
    assert_eq!(stack.pop_back(), Err(EmptyCollection));
    assert!(stack.is_empty());
}

#[test]
fn test_equality_ignores_layout() {
    let mut shifted = CircularBuffer::with_maxsize(3);
    shifted.enqueue(0).unwrap();
    shifted.enqueue(0).unwrap();
    shifted.dequeue().unwrap();
    shifted.dequeue().unwrap();
    for i in 1..=3 {
        shifted.enqueue(i).unwrap();
    }

    let mut fresh = CircularBuffer::with_maxsize(5);
    for i in 1..=3 {
        fresh.enqueue(i).unwrap();
    }

    assert_ne!(shifted.front, fresh.front);
    assert_eq!(shifted, fresh, "Only the logical sequences should be compared.");

    fresh.dequeue().unwrap();
    assert_ne!(shifted, fresh);
}

#[test]
fn test_clear_and_drop() {
    let counter = DropCounter::new();
    let mut queue = CircularBuffer::with_maxsize(4);
    for i in 0..4 {
        queue.enqueue(counter.token(i)).unwrap();
    }
    drop(queue.dequeue());
    assert_eq!(counter.dropped(), 1);

    queue.clear();
    assert_eq!(counter.dropped(), 4, "Clearing should drop every held element.");
    assert!(queue.is_empty());
    assert_eq!(queue.maxsize(), 4, "Clearing shouldn't change the maxsize.");

    queue.enqueue(counter.token(10)).unwrap();
    queue.enqueue(counter.token(11)).unwrap();
    let mut iter = queue.into_iter();
    assert_eq!(iter.next().map(|token| token.id), Some(10));
    drop(iter);
    assert_eq!(counter.dropped(), 6);
}

#[test]
fn test_formatting() {
    let mut queue = CircularBuffer::with_maxsize(2);
    assert_eq!(queue.to_string(), "[]");
    queue.enqueue("x").unwrap();
    queue.enqueue("y").unwrap();
    assert_eq!(queue.to_string(), "[\"x\", \"y\"]");
    assert_eq!(
        format!("{queue:?}"),
        "CircularBuffer { contents: [\"x\", \"y\"], len: 2, maxsize: 2, front: 0, rear: 2 }"
    );
}
