use std::sync::Arc;

use async_channel::{Receiver, Sender};

use super::controller::{ResolveRequest, SelectionController, Source};
use super::resolver::RouteResolver;
use crate::{
    entities::Route,
    error::{session_closed_error, Error},
    store::LocationStore,
    ui::Renderer,
};

#[derive(Clone, Debug)]
pub enum Event {
    CardClick(usize),
    MarkerClick(usize),
    BackgroundClick,
    ClearAction,
    RouteResolved { generation: u64, route: Route },
}

#[derive(Clone)]
pub struct SessionHandle {
    sender: Sender<Event>,
}

impl SessionHandle {
    pub async fn send(&self, event: Event) -> Result<(), Error> {
        self.sender
            .send(event)
            .await
            .map_err(|_| session_closed_error())
    }

    /// Stops the event loop once queued events are handled. In-flight
    /// resolutions are discarded.
    pub fn close(&self) {
        self.sender.close();
    }
}

/// Single event loop owning the controller. Route resolutions run on their
/// own tasks and re-enter the loop as `Event::RouteResolved`.
pub struct Session<R> {
    controller: SelectionController,
    resolver: Arc<RouteResolver>,
    renderer: R,
    sender: Sender<Event>,
    receiver: Receiver<Event>,
}

impl<R: Renderer + Send + 'static> Session<R> {
    pub fn new(store: Arc<LocationStore>, resolver: RouteResolver, renderer: R) -> Self {
        let (sender, receiver) = async_channel::unbounded();

        Self {
            controller: SelectionController::new(store),
            resolver: Arc::new(resolver),
            renderer,
            sender,
            receiver,
        }
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            sender: self.sender.clone(),
        }
    }

    #[tracing::instrument(name = "Session::run", skip_all)]
    pub async fn run(mut self) -> R {
        let initial = self.controller.current();
        self.renderer.render(&initial);

        while let Ok(event) = self.receiver.recv().await {
            self.dispatch(event);
        }

        tracing::info!("session closed");

        self.renderer
    }

    fn dispatch(&mut self, event: Event) {
        tracing::debug!("handling {:?}", event);

        match event {
            Event::CardClick(index) => self.select(index, Source::Card),
            Event::MarkerClick(index) => self.select(index, Source::Marker),
            Event::BackgroundClick | Event::ClearAction => {
                let instruction = self.controller.clear();
                self.renderer.render(&instruction);
            }
            Event::RouteResolved { generation, route } => {
                if let Some(instruction) = self.controller.complete(generation, route) {
                    self.renderer.render(&instruction);
                }
            }
        }
    }

    fn select(&mut self, index: usize, source: Source) {
        let transition = self.controller.select(index, source);
        self.renderer.render(&transition.instruction);

        if let Some(request) = transition.request {
            self.spawn_resolution(request);
        }
    }

    fn spawn_resolution(&self, request: ResolveRequest) {
        let resolver = self.resolver.clone();
        let sender = self.sender.clone();

        tokio::spawn(async move {
            let route = resolver.resolve(&request.from, &request.to).await;
            let event = Event::RouteResolved {
                generation: request.generation,
                route,
            };

            if sender.send(event).await.is_err() {
                tracing::debug!("session closed before route resolved");
            }
        });
    }
}
