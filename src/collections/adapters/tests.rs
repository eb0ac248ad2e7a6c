#![cfg(test)]

use super::*;
use crate::collections::circ::CircularBuffer;
use crate::collections::contiguous::DynamicArray;
use crate::collections::error::{EmptyCollection, FullCollection};
use crate::collections::linked::DoublyLinkedList;

#[test]
fn test_stack_order_on_every_backing() {
    fn check<B: crate::collections::traits::StackLike<u32>>(mut stack: Stack<u32, B>) {
        for i in 0..4 {
            assert!(stack.push(i).is_ok());
        }
        assert_eq!(stack.len(), 4);
        assert_eq!(stack.peek(), Ok(&3), "The last pushed value should be on top.");
        assert!(stack.contains(&1));

        for i in (0..4).rev() {
            assert_eq!(stack.pop(), Ok(i));
        }
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(EmptyCollection), "Popping an empty stack should fail.");
        assert_eq!(stack.peek(), Err(EmptyCollection));
    }

    check(ArrayStack::new());
    check(LinkedStack::new());
    check(BoundedStack::bounded(4));
}

#[test]
fn test_queue_order_on_every_backing() {
    fn check<B: crate::collections::traits::QueueLike<u32>>(mut queue: Queue<u32, B>) {
        for i in 0..4 {
            assert!(queue.enqueue(i).is_ok());
        }
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.front(), Ok(&0), "The first enqueued value should be at the front.");
        assert_eq!(queue.back(), Ok(&3));

        for i in 0..4 {
            assert_eq!(queue.dequeue(), Ok(i));
        }
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(EmptyCollection), "Dequeuing an empty queue should fail.");
        assert_eq!(queue.front(), Err(EmptyCollection));
    }

    check(ArrayQueue::new());
    check(LinkedQueue::new());
    check(CircularQueue::bounded(4));
}

#[test]
fn test_bounded_adapters() {
    let mut stack = BoundedStack::bounded(2);
    stack.push('a').unwrap();
    assert!(!stack.is_full());
    stack.push('b').unwrap();
    assert!(stack.is_full());
    assert_eq!(stack.push('c'), Err(FullCollection { maxsize: 2 }));
    assert_eq!(stack.pop(), Ok('b'), "A rejected push shouldn't replace the top.");

    let mut queue = CircularQueue::bounded(3);
    for i in 1..=3 {
        queue.enqueue(i).unwrap();
    }
    assert_eq!(queue.enqueue(4), Err(FullCollection { maxsize: 3 }));
    assert_eq!(queue.dequeue(), Ok(1));
    queue.enqueue(4).unwrap();
    assert!(queue.into_inner().iter().eq(&[2, 3, 4]));
}

#[test]
fn test_unbounded_adapters_are_never_full() {
    let mut stack = LinkedStack::new();
    let mut queue = ArrayQueue::new();
    for i in 0..1000 {
        let Ok(()) = stack.push(i);
        let Ok(()) = queue.enqueue(i);
    }
    assert!(!stack.is_full());
    assert!(!queue.is_full());
}

#[test]
fn test_with_backing_and_clear() {
    let list: DoublyLinkedList<_> = [1, 2, 3].into_iter().collect();
    let mut stack = Stack::with_backing(list);
    assert_eq!(stack.peek(), Ok(&3), "The end of the storage should be the top.");

    let mut queue = Queue::with_backing(DynamicArray::from([7, 8]));
    assert_eq!(queue.front(), Ok(&7), "The start of the storage should be the front.");

    stack.clear();
    queue.clear();
    assert!(stack.is_empty());
    assert!(queue.is_empty());
}

#[test]
fn test_equality_and_formatting() {
    let a: ArrayStack<_> = [1, 2, 3].into_iter().collect();
    let mut b = ArrayStack::new();
    b.extend([1, 2, 3]);
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "Stack([1, 2, 3])");

    let mut queue = Queue::with_backing(CircularBuffer::with_maxsize(2));
    queue.enqueue('x').unwrap();
    assert_eq!(queue.to_string(), "Queue(['x'])");
    assert_eq!(queue.clone(), queue);
}
