//! Paint output of the container.
//!
//! The container does not render children itself. [`PanelContainer::draw`]
//! returns, in child order, the clip each child must be drawn under and the
//! scrim quad to paint over the content.
//!
//! [`PanelContainer::draw`]: crate::PanelContainer::draw

use slideout_core::Color;
use slideout_core::math::Vec2;

use crate::child::ChildId;

/// An axis-aligned clip region in container coordinates.
///
/// ```
/// use slideout::ClipRect;
/// use slideout_core::math::Vec2;
///
/// let clip = ClipRect::from_bounds(150.0, 0.0, 650.0, 600.0);
/// assert!(clip.contains(Vec2::new(400.0, 10.0)));
/// assert!(!clip.contains(Vec2::new(100.0, 10.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    /// Minimum point (top-left corner)
    pub min: Vec2,
    /// Maximum point (bottom-right corner)
    pub max: Vec2,
}

impl ClipRect {
    pub fn from_bounds(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            min: Vec2::new(left as f32, top as f32),
            max: Vec2::new(right as f32, bottom as f32),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Overlap of two clips; zero-area when disjoint.
    pub fn intersect(&self, other: &ClipRect) -> ClipRect {
        ClipRect {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }

    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.max.y - self.min.y).max(0.0)
    }

    pub fn has_area(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Draw `child` at its bounds, clipped to `clip`.
    Child { child: ChildId, clip: ClipRect },
    /// Fill `rect` with `color` over the content.
    Scrim { rect: ClipRect, color: Color },
}

/// Ordered paint commands for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clip for `child`, if it is drawn this frame.
    pub fn clip_for(&self, child: ChildId) -> Option<ClipRect> {
        self.commands.iter().find_map(|command| match command {
            DrawCommand::Child { child: id, clip } if *id == child => Some(*clip),
            _ => None,
        })
    }

    pub fn scrim(&self) -> Option<(ClipRect, Color)> {
        self.commands.iter().find_map(|command| match command {
            DrawCommand::Scrim { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect() {
        let a = ClipRect::from_ltrb(0, 0, 300, 600);
        let b = ClipRect::from_ltrb(-150, 0, 150, 600);
        let overlap = a.intersect(&b);
        assert_eq!(overlap, ClipRect::from_ltrb(0, 0, 150, 600));
        assert!(overlap.has_area());
    }

    #[test]
    fn test_disjoint_has_no_area() {
        let a = ClipRect::from_ltrb(0, 0, 100, 100);
        let b = ClipRect::from_ltrb(200, 0, 300, 100);
        assert!(!a.intersect(&b).has_area());
    }

    #[test]
    fn test_draw_list_lookup() {
        let mut list = DrawList::new();
        let id = ChildId::new("content");
        list.push(DrawCommand::Child {
            child: id,
            clip: ClipRect::from_ltrb(150, 0, 800, 600),
        });
        assert_eq!(list.clip_for(id), Some(ClipRect::from_ltrb(150, 0, 800, 600)));
        assert_eq!(list.clip_for(ChildId::new("panel")), None);
        assert!(list.scrim().is_none());
    }
}
