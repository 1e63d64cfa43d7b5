mod common;

use coffer_core::common_tests::linear_core_tests::*;
use coffer_core::data_structures::{Queue, Stack};
use rstest::rstest;

#[test]
fn test_stack_order() {
    test_stack_lifo::<Stack<String>>();
}

#[test]
fn test_stack_empty() {
    test_stack_underflow::<Stack<String>>();
}

#[test]
fn test_stack_clear() {
    test_stack_clear_and_snapshot::<Stack<String>>();
}

#[test]
fn test_queue_order() {
    test_queue_fifo::<Queue<String>>();
}

#[test]
fn test_queue_empty() {
    test_queue_underflow::<Queue<String>>();
}

#[test]
fn test_queue_clear() {
    test_queue_clear_and_snapshot::<Queue<String>>();
}

#[test]
fn test_queue_mixed() {
    test_queue_interleaved::<Queue<String>>();
}

#[rstest]
#[case(vec![1, 2, 3])]
#[case(vec![7])]
#[case((0..100).collect())]
fn test_stack_reverses_queue_preserves(#[case] input: Vec<i32>) {
    use coffer_core::{QueueCollection, StackCollection};

    let mut stack = Stack::new();
    let mut queue = Queue::new();
    for &x in &input {
        stack.push(x);
        queue.enqueue(x);
    }

    let mut popped = Vec::new();
    while let Ok(x) = stack.pop() {
        popped.push(x);
    }
    let mut dequeued = Vec::new();
    while let Ok(x) = queue.dequeue() {
        dequeued.push(x);
    }

    let mut reversed = input.clone();
    reversed.reverse();
    assert_eq!(popped, reversed);
    assert_eq!(dequeued, input);
}
