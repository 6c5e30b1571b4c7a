//! Measure, layout, draw and the per-frame hook.

use slideout_core::profiling::profile_function;

use crate::child::{ChildId, ChildRole};
use crate::drag::DragState;
use crate::draw::{ClipRect, DrawCommand, DrawList};
use crate::error::{PanelError, Result};
use crate::host::HostEvent;
use crate::measure::{MeasureSpec, child_measure_spec};
use crate::offset::{content_offset_px, panel_left, scrim_fraction};

use super::PanelContainer;
use super::state::ContainerCore;

impl ContainerCore {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Result<()> {
        let (width, height) = if width.is_exact() && height.is_exact() {
            (width, height)
        } else if self.config.preview_mode {
            let fallback = self.config.preview_fallback_size;
            (
                width.resolve_for_preview(fallback),
                height.resolve_for_preview(fallback),
            )
        } else {
            return Err(PanelError::UnresolvedMeasureSpec {
                width: width.mode,
                height: height.mode,
            });
        };

        self.size.width = width.size;
        self.size.height = height.size;

        let min_margin = self.config.min_panel_margin_px();
        let mut panel: Option<ChildId> = None;
        let mut content: Option<ChildId> = None;

        for child in self.children.iter_mut().filter(|child| child.visible) {
            let margins = child.declared.margins;
            match child.role {
                ChildRole::Content => {
                    if let Some(existing) = content {
                        return Err(PanelError::DuplicateContent {
                            existing,
                            duplicate: child.id,
                        });
                    }
                    content = Some(child.id);

                    child.measured.width = (width.size - margins.horizontal()).max(0);
                    child.measured.height = (height.size - margins.vertical()).max(0);
                }
                ChildRole::Panel => {
                    if let Some(existing) = panel {
                        return Err(PanelError::DuplicatePanel {
                            existing,
                            duplicate: child.id,
                        });
                    }
                    panel = Some(child.id);

                    let preferred = child.declared.preferred;
                    let width_spec = child_measure_spec(
                        width,
                        min_margin + margins.horizontal(),
                        child.declared.width,
                    );
                    let height_spec =
                        child_measure_spec(height, margins.vertical(), child.declared.height);
                    child.measured.width = width_spec.resolve(preferred.map(|size| size.width));
                    child.measured.height = height_spec.resolve(preferred.map(|size| size.height));
                }
            }
        }

        tracing::trace!(
            "Measured container {}x{} (panel: {:?}, content: {:?})",
            self.size.width,
            self.size.height,
            panel,
            content
        );
        Ok(())
    }

    fn layout(&mut self) {
        self.in_layout = true;

        let mut content_offset = 0;
        if let Some(index) = self.panel_index() {
            let child = &mut self.children[index];
            let width = child.measured.width;
            let margins = child.declared.margins;
            let left = panel_left(width, child.slide.on_screen);

            child.bounds.x = left;
            child.bounds.y = margins.top;
            child.bounds.width = width;
            child.bounds.height = child.measured.height;

            if width > 0 {
                let resynced = (width + left) as f32 / width as f32;
                if resynced != child.slide.on_screen {
                    self.set_offset(index, resynced);
                }
            }
            content_offset = content_offset_px(width, self.children[index].slide.on_screen);
        }

        let controller_owns_content = self.drawer_state != DragState::Idle;
        if let Some(index) = self.content_index() {
            let child = &mut self.children[index];
            let margins = child.declared.margins;
            // While dragging or settling the controller positions the content.
            if !controller_owns_content {
                child.bounds.x = content_offset + margins.left;
            }
            child.bounds.y = margins.top;
            child.bounds.width = child.measured.width;
            child.bounds.height = child.measured.height;
        }

        self.in_layout = false;
        self.first_layout = false;
    }

    fn draw(&self) -> DrawList {
        let mut list = DrawList::new();
        let container = ClipRect::from_ltrb(0, 0, self.size.width, self.size.height);
        let content_left = self.content().map(|content| content.left());

        for child in self.children.iter().filter(|child| child.visible) {
            let bounds = child.bounds;
            if child.is_content() {
                let clip = ClipRect::from_ltrb(bounds.left(), 0, self.size.width, self.size.height);
                list.push(DrawCommand::Child {
                    child: child.id,
                    clip,
                });

                let fraction = scrim_fraction(self.max_on_screen());
                if fraction > 0.0 && clip.has_area() {
                    list.push(DrawCommand::Scrim {
                        rect: clip,
                        color: self.config.scrim_color.scale_alpha(fraction),
                    });
                }
            } else {
                // The panel shows only where the content has moved away.
                let right = content_left.unwrap_or(bounds.right());
                let clip = ClipRect::from_ltrb(bounds.left(), 0, right, self.size.height)
                    .intersect(&container);
                list.push(DrawCommand::Child {
                    child: child.id,
                    clip,
                });
            }
        }

        list
    }
}

impl PanelContainer {
    /// Resolve the container and child sizes.
    ///
    /// Both constraints must be exact unless the config enables preview mode.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Result<()> {
        profile_function!();
        self.core.measure(width, height)
    }

    /// Position the panel from its offset and push the content aside.
    pub fn layout(&mut self) {
        profile_function!();
        self.core.layout();
    }

    /// Build the draw list for the current geometry.
    pub fn draw(&self) -> DrawList {
        profile_function!();
        self.core.draw()
    }

    /// Per-frame hook. Samples the scrim and advances any settle animation.
    ///
    /// Returns `true` while another frame is needed.
    pub fn on_frame(&mut self) -> bool {
        profile_function!();
        self.core.scrim_opacity = self.core.max_on_screen();
        let settling = self.dragger.continue_settling(true, &mut self.core);
        if settling {
            self.core.host.push(HostEvent::RequestFrame);
        }
        settling
    }

    /// Ask the host for a layout pass. Ignored while a pass is running.
    pub fn request_layout(&mut self) {
        self.core.request_layout();
    }

    pub fn invalidate(&mut self) {
        self.core.invalidate();
    }
}
