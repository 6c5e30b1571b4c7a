//! Pointer sequences and frame pumping for driving a container in tests.

use slideout::{HostEvent, PanelContainer, PointerEvent};

/// Milliseconds between generated samples.
pub const FRAME_MS: u64 = 16;

/// A straight drag from `from` to `to` in `steps` moves, starting at `start_ms`.
///
/// The sequence is down, `steps` moves, up at the final position.
pub fn drag(from: (f32, f32), to: (f32, f32), steps: u32, start_ms: u64) -> Vec<PointerEvent> {
    let steps = steps.max(1);
    let mut events = Vec::with_capacity(steps as usize + 2);
    events.push(PointerEvent::down(from.0, from.1, start_ms));

    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        let x = from.0 + (to.0 - from.0) * t;
        let y = from.1 + (to.1 - from.1) * t;
        events.push(PointerEvent::moved(x, y, start_ms + step as u64 * FRAME_MS));
    }

    // Release where the last move ended, one frame later.
    events.push(PointerEvent::up(
        to.0,
        to.1,
        start_ms + (steps as u64 + 1) * FRAME_MS,
    ));
    events
}

/// Same as [`drag`] but the pointer rests at `to` long enough for the
/// release velocity to read zero.
pub fn drag_and_hold(from: (f32, f32), to: (f32, f32), steps: u32, start_ms: u64) -> Vec<PointerEvent> {
    let mut events = drag(from, to, steps, start_ms);
    if let Some(up) = events.pop() {
        let hold = up.time_ms + 500;
        events.push(PointerEvent::moved(to.0, to.1, hold));
        events.push(PointerEvent::up(to.0, to.1, hold + FRAME_MS));
    }
    events
}

/// Down and up at the same point.
pub fn tap(x: f32, y: f32, start_ms: u64) -> Vec<PointerEvent> {
    vec![
        PointerEvent::down(x, y, start_ms),
        PointerEvent::up(x, y, start_ms + FRAME_MS),
    ]
}

/// Deliver `events` through the handling pass, relaying layout requests.
pub fn feed(container: &mut PanelContainer, events: &[PointerEvent]) {
    for event in events {
        container.on_pointer_event(event);
        relay_layout(container);
    }
}

/// Pump [`PanelContainer::on_frame`] until it stops asking for frames or
/// `max_frames` is reached. Returns the number of frames run.
pub fn pump_frames(container: &mut PanelContainer, max_frames: usize) -> usize {
    let mut frames = 0;
    while frames < max_frames {
        let more = container.on_frame();
        relay_layout(container);
        frames += 1;
        if !more {
            break;
        }
    }
    frames
}

/// Pop host events, running a layout pass if one was requested.
pub fn relay_layout(container: &mut PanelContainer) -> Vec<HostEvent> {
    let events = container.pop_events();
    if events.contains(&HostEvent::RequestLayout) {
        container.layout();
    }
    events
}
