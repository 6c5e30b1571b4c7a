//! Headless Drawer Demo - Driving a Panel Container Without a Window
//!
//! Demonstrates the container lifecycle end to end:
//! - Attaching a panel and a content child
//! - Measuring and laying out with exact constraints
//! - Dragging the content open and letting the settle finish
//! - Closing with the back key
//! - Reading the draw list and host events
//!
//! Run with `RUST_LOG=slideout=trace` to see every offset change.

use slideout::{
    ChildSpec, Dimension, DrawCommand, DrawerEvent, HostEvent, Key, MeasureSpec, PanelConfig,
    PanelContainer, Subscription,
};
use slideout_core::logging;
use slideout_core::profiling::new_frame;
use slideout_test_utils::MockDragController;
use slideout_test_utils::gestures::{drag_and_hold, feed};

fn run_frames(container: &mut PanelContainer) {
    loop {
        new_frame();
        let more = container.on_frame();
        for event in container.pop_events() {
            match event {
                HostEvent::RequestLayout => container.layout(),
                HostEvent::RequestFocus(child) => tracing::info!("Host focuses {}", child),
                _ => {}
            }
        }
        if !more {
            break;
        }
    }
}

fn describe(container: &PanelContainer) {
    for command in container.draw().commands() {
        match command {
            DrawCommand::Child { child, clip } => {
                tracing::info!("  draw {} clipped to x {}..{}", child, clip.min.x, clip.max.x)
            }
            DrawCommand::Scrim { rect, color } => tracing::info!(
                "  scrim over x {}..{} (alpha {:.2})",
                rect.min.x,
                rect.max.x,
                color.a
            ),
        }
    }
}

fn main() {
    logging::init();

    let mut container = PanelContainer::new(
        PanelConfig::default().with_density(2.0),
        Box::new(MockDragController::new().with_settle_step(40)),
    );
    container
        .add_child(ChildSpec::new("navigation").panel().width(Dimension::Px(600)))
        .expect("panel child");
    container
        .add_child(ChildSpec::new("feed").content())
        .expect("content child");

    container.add_listener(Box::new(|event: DrawerEvent| {
        match event {
            DrawerEvent::Opened { panel } => tracing::info!("Listener: {} opened", panel),
            DrawerEvent::Closed { panel } => tracing::info!("Listener: {} closed", panel),
            DrawerEvent::StateChanged { state } => tracing::info!("Listener: state {:?}", state),
            DrawerEvent::Slide { .. } => {}
        }
        Subscription::Keep
    }));

    container
        .measure(MeasureSpec::exactly(1440), MeasureSpec::exactly(2560))
        .expect("exact constraints");
    container.layout();
    tracing::info!("Collapsed:");
    describe(&container);

    tracing::info!("Dragging from the left edge...");
    feed(&mut container, &drag_and_hold((10.0, 1200.0), (910.0, 1200.0), 12, 0));
    run_frames(&mut container);
    tracing::info!("Open: {} (saved state {:?})", container.is_open(), container.save_state());
    describe(&container);

    tracing::info!("Pressing back...");
    container.on_key_down(Key::Back);
    container.on_key_up(Key::Back);
    run_frames(&mut container);
    container.layout();
    tracing::info!("Open: {}", container.is_open());
    describe(&container);
}
