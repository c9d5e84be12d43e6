// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test layer that records every span opened while it is installed.

use std::sync::{Arc, Mutex};
use tracing::span::{Attributes, Id};
use tracing::subscriber::DefaultGuard;
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

/// A span name paired with the name of its parent, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OpenedSpan {
    pub name: String,
    pub parent: Option<String>,
}

#[derive(Clone, Default)]
pub(crate) struct SpanRecorder {
    opened: Arc<Mutex<Vec<OpenedSpan>>>,
}

impl SpanRecorder {
    /// Install the recorder as the thread's default subscriber until the
    /// guard drops. Under a current-thread runtime spawned tasks see it too.
    pub(crate) fn install(&self) -> DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    pub(crate) fn named(&self, name: &str) -> Vec<OpenedSpan> {
        self.opened
            .lock()
            .unwrap()
            .iter()
            .filter(|span| span.name == name)
            .cloned()
            .collect()
    }
}

impl<S> Layer<S> for SpanRecorder
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let parent = ctx
            .span(id)
            .and_then(|span| span.parent())
            .map(|parent| parent.name().to_string());

        self.opened.lock().unwrap().push(OpenedSpan {
            name: attrs.metadata().name().to_string(),
            parent,
        });
    }
}
