use std::collections::VecDeque;

/// RingBuffer provides a buffer with a user-defined capacity. As soon as the capacity is reached,
/// the buffer drops the oldest value when a new value is pushed to it.
#[derive(Debug)]
pub struct RingBuffer<T> {
    vals: VecDeque<T>,
    capacity: usize,
}

impl<T: Into<f64> + std::marker::Copy> RingBuffer<T> {
    pub fn new(capacity: usize) -> RingBuffer<T> {
        RingBuffer {
            vals: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
    pub fn push(&mut self, val: T) {
        if self.vals.len() == self.capacity {
            self.vals.pop_front();
        }
        self.vals.push_back(val);
    }
    pub fn get_avg(&self) -> Option<f64> {
        if self.vals.is_empty() {
            return None;
        }
        let sum: f64 = self.vals.iter().map(|&val| val.into()).sum();
        Some(sum / self.vals.len() as f64)
    }
}
