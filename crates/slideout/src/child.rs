//! Child identity, capability tags and layout parameters.

use std::fmt;

use slideout_core::geometry::{Rect, Size};

use crate::offset::SlideParams;
use crate::visibility::AccessibilityImportance;

/// A stable identifier for a child of the container.
///
/// ```
/// use slideout::ChildId;
///
/// let panel = ChildId::new("navigation_panel");
/// assert_eq!(panel, ChildId::from("navigation_panel"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildId(u64);

impl ChildId {
    /// Create a child id from a string key (FNV-1a).
    pub fn new(key: &str) -> Self {
        Self(Self::hash_str(key))
    }

    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    fn hash_str(s: &str) -> u64 {
        const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const FNV_PRIME: u64 = 0x100000001b3;

        let mut hash = FNV_OFFSET_BASIS;
        for byte in s.as_bytes() {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChildId(0x{:016x})", self.0)
    }
}

impl From<&str> for ChildId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Capability tag a child must carry to be accepted by the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildRole {
    /// The edge-anchored, collapsible panel.
    Panel,
    /// The filling content that is pushed aside as the panel reveals.
    Content,
}

/// Requested size along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimension {
    /// As large as the parent allows.
    #[default]
    MatchParent,
    /// The child's preferred size, bounded by the parent.
    WrapContent,
    /// A fixed size in pixels.
    Px(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    pub const fn all(value: i32) -> Self {
        Margins {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Declared (static) layout parameters, supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeclaredParams {
    pub width: Dimension,
    pub height: Dimension,
    pub margins: Margins,
    /// Size used for [`Dimension::WrapContent`].
    pub preferred: Option<Size<i32>>,
}

/// Description of a child to insert.
///
/// A spec without [`panel`](Self::panel) or [`content`](Self::content) is
/// rejected on insertion.
///
/// ```
/// use slideout::{ChildSpec, Dimension};
///
/// let panel = ChildSpec::new("menu").panel().width(Dimension::Px(300));
/// let content = ChildSpec::new("main").content();
/// # let _ = (panel, content);
/// ```
#[derive(Debug, Clone)]
pub struct ChildSpec {
    pub(crate) id: ChildId,
    pub(crate) role: Option<ChildRole>,
    pub(crate) declared: DeclaredParams,
}

impl ChildSpec {
    pub fn new(id: impl Into<ChildId>) -> Self {
        ChildSpec {
            id: id.into(),
            role: None,
            declared: DeclaredParams::default(),
        }
    }

    pub fn panel(mut self) -> Self {
        self.role = Some(ChildRole::Panel);
        self
    }

    pub fn content(mut self) -> Self {
        self.role = Some(ChildRole::Content);
        self
    }

    pub fn width(mut self, width: Dimension) -> Self {
        self.declared.width = width;
        self
    }

    pub fn height(mut self, height: Dimension) -> Self {
        self.declared.height = height;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.declared.margins = margins;
        self
    }

    pub fn preferred_size(mut self, width: i32, height: i32) -> Self {
        self.declared.preferred = Some(Size::new(width, height));
        self
    }

    pub fn id(&self) -> ChildId {
        self.id
    }
}

/// An attached child as the container sees it.
///
/// `declared` is owned by the caller's spec; `slide`, `measured`, `bounds`
/// and `importance` are runtime state written only by the container.
#[derive(Debug, Clone)]
pub struct Child {
    pub(crate) id: ChildId,
    pub(crate) role: ChildRole,
    pub(crate) declared: DeclaredParams,
    pub(crate) slide: SlideParams,
    pub(crate) measured: Size<i32>,
    pub(crate) bounds: Rect<i32>,
    pub(crate) importance: AccessibilityImportance,
    pub(crate) visible: bool,
}

impl Child {
    pub(crate) fn new(id: ChildId, role: ChildRole, declared: DeclaredParams) -> Self {
        Child {
            id,
            role,
            declared,
            slide: SlideParams::default(),
            measured: Size::new(0, 0),
            bounds: Rect::default(),
            importance: AccessibilityImportance::Visible,
            visible: true,
        }
    }

    pub fn id(&self) -> ChildId {
        self.id
    }

    pub fn role(&self) -> ChildRole {
        self.role
    }

    pub fn is_panel(&self) -> bool {
        self.role == ChildRole::Panel
    }

    pub fn is_content(&self) -> bool {
        self.role == ChildRole::Content
    }

    pub fn declared(&self) -> &DeclaredParams {
        &self.declared
    }

    pub fn slide(&self) -> &SlideParams {
        &self.slide
    }

    pub fn measured_size(&self) -> Size<i32> {
        self.measured
    }

    /// Current position and size in container coordinates.
    pub fn bounds(&self) -> Rect<i32> {
        self.bounds
    }

    pub fn left(&self) -> i32 {
        self.bounds.left()
    }

    pub fn top(&self) -> i32 {
        self.bounds.top()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn importance(&self) -> AccessibilityImportance {
        self.importance
    }

    /// `false` when the child is excluded from measurement and focus (gone).
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
