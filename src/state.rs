use crate::{config::collation::Collation, data::roster::Roster, routes::sse::SseEvent};
use maud::{DOCTYPE, Markup, html};
use std::{future::Future, sync::Arc};
use tokio::sync::{
    RwLock, RwLockReadGuard, RwLockWriteGuard,
    broadcast::{Receiver, Sender, channel},
    watch,
};

/// Owns the roster for the whole session. Cloning is cheap, every clone sees the same roster.
#[derive(Clone, Debug)]
pub struct InquisitorState {
    roster: Arc<RwLock<Roster>>,
    collation: Arc<Collation>,
    sse_events_sender: Sender<SseEvent>,
    shutdown_sender: Arc<watch::Sender<bool>>,
}

impl InquisitorState {
    pub fn new(roster: Roster, collation: Collation) -> Self {
        let (tx, _rx) = channel(16);
        let (shutdown_tx, _shutdown_rx) = watch::channel(false);

        Self {
            roster: Arc::new(RwLock::new(roster)),
            collation: Arc::new(collation),
            sse_events_sender: tx,
            shutdown_sender: Arc::new(shutdown_tx),
        }
    }

    #[allow(clippy::unused_self, clippy::needless_pass_by_value)]
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://unpkg.com/htmx-ext-sse@2.2.3" integrity="sha384-Y4gc0CK6Kg+hmulDc6rZPJu0tqvk7EWlih0Oh+2OkAi1ZDlCbBDCQEE2uVk472Ky" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Inquisitor" }
                }
                body hx-ext="sse" class="bg-gray-900 min-h-screen flex flex-col items-center py-8 text-white" {
                    (markup)
                }
            }
        }
    }

    pub async fn roster(&self) -> RwLockReadGuard<'_, Roster> {
        self.roster.read().await
    }

    pub async fn roster_mut(&self) -> RwLockWriteGuard<'_, Roster> {
        self.roster.write().await
    }

    pub fn collation(&self) -> &Collation {
        &self.collation
    }

    pub fn subscribe_to_sse_feed(&self) -> Receiver<SseEvent> {
        self.sse_events_sender.subscribe()
    }

    pub fn send_sse_event(&self, event: SseEvent) {
        //nobody listening is fine
        let _ = self.sse_events_sender.send(event);
    }

    ///ends every open sse feed, otherwise graceful shutdown waits on them forever
    pub fn begin_shutdown(&self) {
        self.shutdown_sender.send_replace(true);
    }

    ///resolves once [`Self::begin_shutdown`] has been called, immediately if it already has been
    pub fn wait_for_shutdown(&self) -> impl Future<Output = ()> + Send + 'static + use<> {
        let mut rx = self.shutdown_sender.subscribe();
        async move {
            let _ = rx.wait_for(|shutting_down| *shutting_down).await;
        }
    }
}
