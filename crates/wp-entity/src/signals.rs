//! Synchronous notification lists.

use std::fmt;

/// The three traversal notifications.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEvent {
    Started,
    WaypointWait,
    Completed,
}

impl fmt::Display for PathEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PathEvent::Started      => "started",
            PathEvent::WaypointWait => "waypoint_wait",
            PathEvent::Completed    => "completed",
        };
        f.write_str(name)
    }
}

type Listener = Box<dyn FnMut() + Send + 'static>;

/// A zero-argument signal with any number of listeners.
///
/// Listeners run in connection order, synchronously, inside the call that
/// emits.  Emitting with no listeners is a no-op.
#[derive(Default)]
pub struct Signal {
    listeners: Vec<Listener>,
}

impl Signal {
    pub fn connect<F: FnMut() + Send + 'static>(&mut self, listener: F) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self) {
        for listener in &mut self.listeners {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal").field("listeners", &self.listeners.len()).finish()
    }
}

/// One [`Signal`] per [`PathEvent`].
#[derive(Debug, Default)]
pub struct PathSignals {
    pub started:       Signal,
    pub waypoint_wait: Signal,
    pub completed:     Signal,
}

impl PathSignals {
    pub fn get_mut(&mut self, event: PathEvent) -> &mut Signal {
        match event {
            PathEvent::Started      => &mut self.started,
            PathEvent::WaypointWait => &mut self.waypoint_wait,
            PathEvent::Completed    => &mut self.completed,
        }
    }

    pub fn connect<F: FnMut() + Send + 'static>(&mut self, event: PathEvent, listener: F) {
        self.get_mut(event).connect(listener);
    }

    pub fn emit(&mut self, event: PathEvent) {
        self.get_mut(event).emit();
    }
}
