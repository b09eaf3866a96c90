use crate::core::engine::CalculatorEngine;
use crate::domain::model::{InputEvent, Snapshot};
use crate::domain::ports::Render;
use crate::utils::error::Result;

/// Drives one engine from a stream of input events, pushing the display to
/// a renderer after every event.
pub struct Session<R: Render> {
    engine: CalculatorEngine,
    renderer: R,
    render_every_event: bool,
}

impl<R: Render> Session<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            renderer,
            render_every_event: true,
        }
    }

    /// With `false`, nothing is rendered until [`Session::finish`].
    pub fn with_trace(mut self, render_every_event: bool) -> Self {
        self.render_every_event = render_every_event;
        self
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn dispatch(&mut self, event: InputEvent) -> Result<Snapshot> {
        self.engine.handle(event);
        let snapshot = self.engine.snapshot();

        tracing::debug!(
            ?event,
            display = %snapshot.display,
            awaiting_next = snapshot.awaiting_next,
            "event handled"
        );

        if self.render_every_event {
            self.renderer.render_snapshot(&snapshot)?;
        }
        Ok(snapshot)
    }

    pub fn run<I>(&mut self, events: I) -> Result<Vec<Snapshot>>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut snapshots = Vec::new();
        for event in events {
            snapshots.push(self.dispatch(event)?);
        }
        Ok(snapshots)
    }

    /// Renders the final state when per-event rendering is off.
    pub fn finish(&mut self) -> Result<Snapshot> {
        let snapshot = self.engine.snapshot();
        if !self.render_every_event {
            self.renderer.render_snapshot(&snapshot)?;
        }
        Ok(snapshot)
    }
}
