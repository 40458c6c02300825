use std::{collections::HashSet, time::Duration};

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};

use gfc_core::{
    entities::*,
    gateways::{location::LocationGateway, notify::NotificationGateway},
    usecases::{self, RawRegionEvent, RAW_EVENT_KIND_ENTER, RAW_EVENT_KIND_EXIT},
};

const RAW_EVENT_CHANNEL_CAPACITY: usize = 16;

/// Owned handle of the background region monitoring.
///
/// Registration happens at most once by construction: whoever owns
/// the handle owns the subscription. There is no ambient "is
/// registered" flag to query or race against.
pub struct RegionWatch {
    shutdown_tx: watch::Sender<bool>,
    poller: JoinHandle<()>,
    dispatcher: JoinHandle<()>,
}

impl RegionWatch {
    pub fn is_active(&self) -> bool {
        !self.poller.is_finished() || !self.dispatcher.is_finished()
    }

    /// Request cancellation and wait for both tasks to finish.
    ///
    /// Best-effort: events already in flight on the channel are
    /// still dispatched while it drains.
    pub async fn cancel(self) {
        let _ = self.shutdown_tx.send(true);
        let _ = self.poller.await;
        let _ = self.dispatcher.await;
    }
}

/// Start monitoring the given regions.
pub fn start<L, N>(
    registry: GeofenceRegistry,
    location_gw: L,
    notification_gw: N,
    poll_interval: Duration,
) -> RegionWatch
where
    L: LocationGateway + Send + Sync + 'static,
    N: NotificationGateway + Send + Sync + 'static,
{
    let (raw_tx, raw_rx) = mpsc::channel(RAW_EVENT_CHANNEL_CAPACITY);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let poller = tokio::spawn(poll_positions(
        registry.clone(),
        location_gw,
        raw_tx,
        poll_interval,
        shutdown_rx,
    ));
    let dispatcher = tokio::spawn(dispatch_events(registry, notification_gw, raw_rx));
    RegionWatch {
        shutdown_tx,
        poller,
        dispatcher,
    }
}

/// Plays the platform side of the region-monitoring contract: poll
/// the position, evaluate transitions and push the raw payloads
/// onto the channel.
///
/// The containment state starts out empty on every process start;
/// after a restart the first evaluation may re-announce an Enter
/// for a region that was never left.
async fn poll_positions<L>(
    registry: GeofenceRegistry,
    location_gw: L,
    raw_tx: mpsc::Sender<RawRegionEvent>,
    poll_interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    L: LocationGateway + Send + Sync + 'static,
{
    let mut interval = tokio::time::interval(poll_interval);
    let mut inside: HashSet<RegionId> = HashSet::new();
    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = shutdown_rx.changed() => break,
        }
        let position = match location_gw.current_position() {
            Ok(position) => position,
            Err(err) => {
                log::warn!("Skipping geofence evaluation: {err}");
                continue;
            }
        };
        let evaluation =
            usecases::evaluate_transitions(position, &registry, &inside, Timestamp::now());
        for event in &evaluation.events {
            let raw = RawRegionEvent {
                identifier: event.region.to_string(),
                kind: match event.kind {
                    TransitionKind::Enter => RAW_EVENT_KIND_ENTER,
                    TransitionKind::Exit => RAW_EVENT_KIND_EXIT,
                },
                observed_at_ms: event.observed_at.as_millis(),
            };
            if raw_tx.send(raw).await.is_err() {
                log::warn!("Dropping geofence event: dispatcher is gone");
            }
        }
        inside = evaluation.current_inside;
    }
}

/// Consumes the raw event channel, maps payloads to domain events
/// and notifies. Mapping failures are logged and the event dropped,
/// no retry.
async fn dispatch_events<N>(
    registry: GeofenceRegistry,
    notification_gw: N,
    mut raw_rx: mpsc::Receiver<RawRegionEvent>,
) where
    N: NotificationGateway + Send + Sync + 'static,
{
    while let Some(raw) = raw_rx.recv().await {
        match usecases::map_region_event(&registry, raw) {
            Ok(Some(event)) => notification_gw.notify(&event),
            Ok(None) => (),
            Err(err) => log::warn!("Ignoring region event: {err}"),
        }
    }
}
