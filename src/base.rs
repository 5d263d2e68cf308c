use serde::{Deserialize, Serialize};

/// A position in screen coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

pub struct Callback {
    callback: Box<dyn FnOnce() + Send + 'static>,
}

impl Callback {
    pub fn from_box(f: Box<dyn FnOnce() + Send>) -> Callback {
        Self { callback: f }
    }

    pub fn new<F: FnOnce() + Send + 'static>(callback: F) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }

    pub fn call(self) {
        (self.callback)()
    }
}
