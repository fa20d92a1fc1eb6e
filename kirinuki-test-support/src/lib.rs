//! Shared test utilities used across kirinuki crates.

pub mod tracing {
    //! Capture layer utilities for asserting on spans and events in tests.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Layer installed during tests to capture spans and events for later
    /// assertions. Spans are captured when they close, events as they are
    /// emitted, both with their structured fields rendered as strings.
    #[derive(Clone, Default)]
    pub struct CaptureLayer {
        spans: Arc<Mutex<Vec<CapturedSpan>>>,
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    impl CaptureLayer {
        /// Returns the closed spans in completion order.
        ///
        /// # Examples
        /// ```
        /// use kirinuki_test_support::tracing::CaptureLayer;
        ///
        /// let layer = CaptureLayer::default();
        /// assert!(layer.spans().is_empty());
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<CapturedSpan> {
            self.spans.lock().expect("lock poisoned").clone()
        }

        /// Returns the emitted events in emission order.
        ///
        /// # Examples
        /// ```
        /// use kirinuki_test_support::tracing::CaptureLayer;
        ///
        /// let layer = CaptureLayer::default();
        /// assert!(layer.events().is_empty());
        /// ```
        #[must_use]
        pub fn events(&self) -> Vec<CapturedEvent> {
            self.events.lock().expect("lock poisoned").clone()
        }
    }

    /// Snapshot of a closed span: its name and recorded fields.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct CapturedSpan {
        /// Span name from the tracing metadata.
        pub name: String,
        /// Fields recorded against the span, rendered as strings.
        pub fields: HashMap<String, String>,
    }

    /// Snapshot of an emitted event: its level and recorded fields. The
    /// message, when present, is stored under the `message` field.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct CapturedEvent {
        /// Level the event was emitted at.
        pub level: Level,
        /// Fields attached to the event, rendered as strings.
        pub fields: HashMap<String, String>,
    }

    impl CapturedEvent {
        /// Returns whether the event carries the given message at the given
        /// level.
        #[must_use]
        pub fn matches(&self, level: Level, message: &str) -> bool {
            self.level == level
                && self
                    .fields
                    .get("message")
                    .is_some_and(|value| value == message)
        }
    }

    #[derive(Default)]
    struct OpenSpan {
        name: String,
        fields: HashMap<String, String>,
    }

    impl<S> Layer<S> for CaptureLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            id: &tracing::span::Id,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut open = OpenSpan {
                name: attrs.metadata().name().to_owned(),
                fields: HashMap::new(),
            };
            attrs.record(&mut Render(&mut open.fields));
            span.extensions_mut().insert(open);
        }

        fn on_record(
            &self,
            id: &tracing::span::Id,
            values: &tracing::span::Record<'_>,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut extensions = span.extensions_mut();
            let Some(open) = extensions.get_mut::<OpenSpan>() else {
                return;
            };
            values.record(&mut Render(&mut open.fields));
        }

        fn on_close(&self, id: tracing::span::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(open) = span.extensions_mut().remove::<OpenSpan>() else {
                return;
            };
            self.spans
                .lock()
                .expect("lock poisoned")
                .push(CapturedSpan {
                    name: open.name,
                    fields: open.fields,
                });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut Render(&mut fields));
            self.events
                .lock()
                .expect("lock poisoned")
                .push(CapturedEvent {
                    level: *event.metadata().level(),
                    fields,
                });
        }
    }

    struct Render<'a>(&'a mut HashMap<String, String>);

    impl Visit for Render<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_owned(), format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_owned(), value.to_owned());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }
    }

    #[cfg(test)]
    mod tests {
        use tracing::Level;
        use tracing_subscriber::layer::SubscriberExt;

        use super::CaptureLayer;

        #[test]
        fn captures_events_and_closed_spans() {
            let layer = CaptureLayer::default();
            let subscriber = tracing_subscriber::registry().with(layer.clone());

            tracing::subscriber::with_default(subscriber, || {
                let span = tracing::info_span!("work", step = 1_u64);
                let _guard = span.enter();
                tracing::warn!(detail = "context", "something happened");
            });

            let spans = layer.spans();
            assert_eq!(spans.len(), 1);
            assert_eq!(spans[0].name, "work");
            assert_eq!(spans[0].fields.get("step"), Some(&"1".to_owned()));

            let events = layer.events();
            assert_eq!(events.len(), 1);
            assert!(events[0].matches(Level::WARN, "something happened"));
            assert_eq!(events[0].fields.get("detail"), Some(&"context".to_owned()));
        }
    }
}
