//! Bounded frame buffer for manual rep capture
//!
//! Keeps the most recent raw frames in chronological order. When the user
//! taps "I did a rep" the whole window is drained and scored.

use std::collections::VecDeque;

use crate::pose::{PoseFrame, PoseSequence};

/// Default window: 12 s of samples at the 100 ms throttle
pub const BUFFER_CAPACITY: usize = 120;

/// FIFO of raw frames, oldest evicted first
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    frames: VecDeque<PoseFrame>,
    capacity: usize,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::with_capacity(BUFFER_CAPACITY)
    }

    /// Capacity is at least one frame
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a frame, evicting the oldest when full
    pub fn push(&mut self, frame: PoseFrame) {
        if self.frames.len() == self.capacity {
            self.frames.pop_front();
        }
        self.frames.push_back(frame);
    }

    /// Take every buffered frame (oldest first) and leave the buffer empty
    pub fn drain(&mut self) -> PoseSequence {
        self.frames.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.frames.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
