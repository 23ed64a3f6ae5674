/// Reusable string buffers for building external names
///
/// A buffer is checked out with `PooledBuffer::acquire()` and goes back to
/// the pool when the guard drops, on every exit path including unwinding.
use std::ops::{Deref, DerefMut};
use std::sync::Mutex;

const MAX_POOLED: usize = 16;
const MAX_RETAINED_CAPACITY: usize = 4096;
const INITIAL_CAPACITY: usize = 128;

static POOL: Mutex<Vec<String>> = Mutex::new(Vec::new());

pub struct PooledBuffer {
    buffer: String,
}

impl PooledBuffer {
    pub fn acquire() -> Self {
        let buffer = POOL
            .lock()
            .ok()
            .and_then(|mut pool| pool.pop())
            .unwrap_or_else(|| String::with_capacity(INITIAL_CAPACITY));
        Self { buffer }
    }
}

impl Deref for PooledBuffer {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buffer
    }
}

impl DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buffer
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        let mut buffer = std::mem::take(&mut self.buffer);
        if buffer.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }
        buffer.clear();
        // A poisoned pool only costs us the reuse
        if let Ok(mut pool) = POOL.lock() {
            if pool.len() < MAX_POOLED {
                pool.push(buffer);
            }
        }
    }
}
