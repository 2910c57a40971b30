use std::cell::RefCell;
use std::rc::Rc;

use crate::core::models::GameEvent;

pub trait EventSink {
    fn on_event(&mut self, event: GameEvent);
}

/// Explicit observer list owned by the session. Collaborators subscribe here
/// instead of hanging off process-wide broadcast delegates.
pub struct EventHub {
    sinks: Vec<Rc<RefCell<dyn EventSink>>>,
}

impl EventHub {
    pub fn new() -> EventHub {
        EventHub { sinks: Vec::new() }
    }

    pub fn subscribe(&mut self, sink: Rc<RefCell<dyn EventSink>>) {
        self.sinks.push(sink);
    }

    pub fn raise(&self, event: GameEvent) {
        for sink in &self.sinks {
            sink.borrow_mut().on_event(event);
        }
    }
}

impl Default for EventHub {
    fn default() -> Self {
        EventHub::new()
    }
}
