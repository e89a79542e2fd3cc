use std::collections::VecDeque;

use crate::{error::RenderError, renderer::Renderer, surface::Surface};

/// The message boundary between the host page and the embedded application.
///
/// Batches coming out of the application are painted as soon as they arrive.
/// The inbox holds host messages for the application until it drains them,
/// and anything the application sends back on the outbox is logged.
pub struct Ports<S: Surface> {
    renderer: Renderer<S>,
    inbox: VecDeque<String>,
    outbox_count: u64,
}

impl<S: Surface> Ports<S> {
    pub fn new(renderer: Renderer<S>) -> Self {
        Ports {
            renderer,
            inbox: VecDeque::new(),
            outbox_count: 0,
        }
    }

    pub fn receive_batch(&mut self, json: &str) -> Result<(), RenderError> {
        self.renderer.paint_json(json)
    }

    pub fn send(&mut self, message: impl Into<String>) {
        self.inbox.push_back(message.into());
    }

    pub fn drain(&mut self) -> impl Iterator<Item = String> + '_ {
        self.inbox.drain(..)
    }

    pub fn pending(&self) -> usize {
        self.inbox.len()
    }

    pub fn outbox(&mut self, message: &str) {
        self.outbox_count += 1;
        log::info!("outbox #{}: {}", self.outbox_count, message);
    }

    pub fn outbox_count(&self) -> u64 {
        self.outbox_count
    }

    pub fn renderer(&self) -> &Renderer<S> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<S> {
        &mut self.renderer
    }
}
