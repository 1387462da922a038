//! Single-slot text output shared between the controller and its session.

use std::cell::RefCell;
use std::rc::Rc;

/// Callback receiving pre-formatted display lines.
pub type OutputSink = Box<dyn FnMut(&str)>;

/// Shared handle to the registered output sink.
///
/// Clones point at the same slot, so replacing the sink through one handle
/// is seen by every clone. With no sink registered, messages are dropped.
#[derive(Clone, Default)]
pub(crate) struct Outlet {
    sink: Rc<RefCell<Option<OutputSink>>>,
}

impl Outlet {
    /// Replaces the registered sink.
    pub(crate) fn set(&self, sink: OutputSink) {
        *self.sink.borrow_mut() = Some(sink);
    }

    /// Sends a message to the sink, if one is registered.
    pub(crate) fn emit(&self, message: &str) {
        if let Some(sink) = self.sink.borrow_mut().as_mut() {
            sink(message);
        }
    }
}

impl std::fmt::Debug for Outlet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Outlet")
            .field("registered", &self.sink.borrow().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_without_sink_is_dropped() {
        Outlet::default().emit("nobody listens");
    }

    #[test]
    fn test_clones_share_slot() {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let outlet = Outlet::default();
        let shared = outlet.clone();

        let captured = Rc::clone(&lines);
        outlet.set(Box::new(move |msg: &str| {
            captured.borrow_mut().push(msg.to_string())
        }));
        shared.emit("hello");

        assert_eq!(*lines.borrow(), vec!["hello".to_string()]);
    }
}
