use std::sync::Arc;

/// Receives the events a filter emits while it works.
///
/// Events are informational only: nothing a sink does changes the records a
/// filter returns.
pub trait EventSink {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards events to the `log` facade. Installing a logger is left to the
/// host application.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn info(&self, message: &str) {
        log::info!(target: "extract_filter", "{}", message);
    }

    fn error(&self, message: &str) {
        log::error!(target: "extract_filter", "{}", message);
    }
}

impl<T: EventSink + ?Sized> EventSink for &T {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

impl<T: EventSink + ?Sized> EventSink for Arc<T> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}
