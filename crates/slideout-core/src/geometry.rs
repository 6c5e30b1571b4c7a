//! Generic geometry primitives.
//!
//! Layout runs in integer pixels (`Rect<i32>`) so that offset rounding is
//! reproducible across frames; painting converts to `f32` at the edge.

use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Copy + Add<Output = T>> Rect<T> {
    /// Left edge.
    #[inline]
    pub fn left(&self) -> T {
        self.x
    }

    /// Top edge.
    #[inline]
    pub fn top(&self) -> T {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> T {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> T {
        self.y + self.height
    }

    /// Move the rect horizontally and vertically.
    pub fn offset(&mut self, dx: T, dy: T) {
        self.x = self.x + dx;
        self.y = self.y + dy;
    }
}

impl<T: Copy + PartialOrd + Add<Output = T>> Rect<T> {
    /// Half-open containment test: left/top inclusive, right/bottom exclusive.
    pub fn contains(&self, x: T, y: T) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

impl Rect<i32> {
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect::new(left, top, right - left, bottom - top)
    }

    pub fn to_f32(self) -> Rect<f32> {
        Rect::new(
            self.x as f32,
            self.y as f32,
            self.width as f32,
            self.height as f32,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos<T> {
    pub x: T,
    pub y: T,
}

impl<T> Pos<T> {
    pub const fn new(x: T, y: T) -> Self {
        Pos { x, y }
    }
}
