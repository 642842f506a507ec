//! # Event Bus
//!
//! Synchronous, priority-ordered event dispatch - the workload whose
//! throughput the estimator evaluates.
//!
//! Handlers are registered per event type and invoked in ascending
//! [`EventPriority`] order when an event of that type is fired; within one
//! priority band they run in registration order. Events may opt into
//! cancellation by carrying a [`Cancellation`] and exposing it through
//! [`Event::cancellation`]:
//!
//! - Cancelling an event does not stop handler invocation by itself; it
//!   only skips handlers registered with `ignore_cancelled`.
//! - Stopping propagation skips every remaining handler except those at
//!   [`EventPriority::Monitor`], which always run.

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Priority bands for event handlers, dispatched in declaration order.
///
/// `Monitor` runs after everything else and is intended for observers that
/// never modify the event; monitor handlers are invoked even when the
/// event's propagation has been stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventPriority {
    Lowest,
    Low,
    Normal,
    High,
    Highest,
    Monitor,
}

impl EventPriority {
    /// All priority bands, in dispatch order.
    pub const ALL: [EventPriority; 6] = [
        EventPriority::Lowest,
        EventPriority::Low,
        EventPriority::Normal,
        EventPriority::High,
        EventPriority::Highest,
        EventPriority::Monitor,
    ];
}

/// Cancellation state a cancellable event carries.
///
/// The two flags are independent: `cancelled` forbids the action the event
/// announces without affecting dispatch, while `propagation_stopped` cuts
/// off the remaining non-monitor handlers without cancelling the action.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cancellation {
    cancelled: bool,
    propagation_stopped: bool,
}

impl Cancellation {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }

    /// Marks the event as cancelled. Handlers keep running unless they
    /// were registered with `ignore_cancelled`.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Skips every remaining handler except [`EventPriority::Monitor`]
    /// ones. The cancelled flag is left untouched.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// A dispatchable event.
///
/// Plain events need no methods beyond the defaults. Cancellable events
/// embed a [`Cancellation`] and return it from both accessors:
///
/// ```
/// use tickload_core::bus::{Cancellation, Event};
///
/// struct ChatMessage {
///     text: String,
///     cancellation: Cancellation,
/// }
///
/// impl Event for ChatMessage {
///     fn cancellation(&self) -> Option<&Cancellation> {
///         Some(&self.cancellation)
///     }
///     fn cancellation_mut(&mut self) -> Option<&mut Cancellation> {
///         Some(&mut self.cancellation)
///     }
/// }
/// ```
pub trait Event: Any {
    /// The event's cancellation state, `None` for non-cancellable events.
    fn cancellation(&self) -> Option<&Cancellation> {
        None
    }

    fn cancellation_mut(&mut self) -> Option<&mut Cancellation> {
        None
    }
}

/// Handle returned by registration, used to unregister a single handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

struct Handler {
    id: HandlerId,
    priority: EventPriority,
    ignore_cancelled: bool,
    invoke: Box<dyn FnMut(&mut dyn Any)>,
}

/// Registers event handlers and dispatches events to them.
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<TypeId, Vec<Handler>>,
    next_handler: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for events of type `E` at
    /// [`EventPriority::Normal`], invoked for cancelled events too.
    pub fn register<E: Event>(&mut self, handler: impl FnMut(&mut E) + 'static) -> HandlerId {
        self.register_with(EventPriority::Normal, false, handler)
    }

    /// Registers a handler for events of type `E`.
    ///
    /// # Arguments
    /// * `priority` - Band the handler runs in; bands run in ascending
    ///   order, registration order within a band
    /// * `ignore_cancelled` - If `true`, the handler is skipped for events
    ///   already marked cancelled
    /// * `handler` - Invoked with mutable access to the fired event
    pub fn register_with<E: Event>(
        &mut self,
        priority: EventPriority,
        ignore_cancelled: bool,
        mut handler: impl FnMut(&mut E) + 'static,
    ) -> HandlerId {
        let id = HandlerId(self.next_handler);
        self.next_handler += 1;
        self.handlers.entry(TypeId::of::<E>()).or_default().push(Handler {
            id,
            priority,
            ignore_cancelled,
            invoke: Box::new(move |event| {
                if let Some(event) = event.downcast_mut::<E>() {
                    handler(event);
                }
            }),
        });
        id
    }

    /// Unregisters a single handler. Returns `false` if the id was not
    /// registered (or was already unregistered).
    pub fn unregister(&mut self, id: HandlerId) -> bool {
        for handlers in self.handlers.values_mut() {
            if let Some(index) = handlers.iter().position(|handler| handler.id == id) {
                handlers.remove(index);
                return true;
            }
        }
        false
    }

    /// Unregisters every handler listening for events of type `E`.
    pub fn unregister_all<E: Event>(&mut self) {
        self.handlers.remove(&TypeId::of::<E>());
    }

    /// Number of registered handlers across all event types.
    pub fn handler_count(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    /// Fires an event, dispatching it to every handler registered for its
    /// type in priority order.
    ///
    /// Cancellation state is re-read before each handler invocation, so a
    /// handler cancelling the event or stopping its propagation takes
    /// effect for the very next handler in line.
    pub fn fire<E: Event>(&mut self, event: &mut E) {
        for priority in EventPriority::ALL {
            let Some(handlers) = self.handlers.get_mut(&TypeId::of::<E>()) else {
                return;
            };
            for handler in handlers.iter_mut() {
                if handler.priority != priority {
                    continue;
                }
                if let Some(cancellation) = event.cancellation() {
                    let skip_cancelled =
                        cancellation.is_cancelled() && handler.ignore_cancelled;
                    let skip_stopped = cancellation.is_propagation_stopped()
                        && priority != EventPriority::Monitor;
                    if skip_cancelled || skip_stopped {
                        continue;
                    }
                }
                (handler.invoke)(&mut *event);
            }
        }
    }
}
