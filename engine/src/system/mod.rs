//! The trading system: instrument catalogue, request router and the
//! per-instrument worker pool.
//!
//! Each instrument is bound to exactly one worker thread; all book
//! mutations for that instrument serialise through its worker's queue in
//! arrival order, while instruments bound to different workers match in
//! parallel. The router resolves the instrument identity of every inbound
//! request under the read side of the catalogue lock and enqueues it,
//! never blocking on the matching path.

use arara_idgen::InstrumentIdContext;
use arara_markets::{Instrument, InstrumentId, MdRejectReason, PhaseTransition, SessionId};
use arara_refdata::{Listing, PriceSeed, Venue};
use chrono::{DateTime, Utc};
use fnv::FnvHashMap;
use parking_lot::{Mutex, RwLock};
use std::thread::JoinHandle;
use tracing::{error, info, warn};

mod catalogue;

pub use catalogue::InstrumentCatalogue;

use crate::{
    channel::{unbounded, Tx, UnboundedTx},
    clock::UtcClock,
    error::EngineError,
    market_state::InstrumentState,
    matching::MatchingEngine,
    protocol::{EngineTask, TradingReply, TradingRequest},
    reject::RejectNotifier,
    venue::{PhaseSchedule, VenueConfig},
};

/// Trading-system construction parameters.
#[derive(Debug)]
pub struct TradingSystemConfig {
    pub venue: VenueConfig,
    pub schedule: PhaseSchedule,
    pub workers: usize,
}

impl TradingSystemConfig {
    pub fn from_records(venue: &Venue, phases: &[arara_refdata::MarketPhase]) -> Self {
        Self {
            venue: VenueConfig::from_record(venue),
            schedule: PhaseSchedule::from_records(phases),
            workers: 4,
        }
    }
}

struct WorkerHandle {
    tx: Option<UnboundedTx<EngineTask>>,
    thread: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for WorkerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerHandle").finish_non_exhaustive()
    }
}

/// The running trading system.
#[derive(Debug)]
pub struct TradingSystem {
    catalogue: RwLock<InstrumentCatalogue>,
    routes: FnvHashMap<InstrumentId, usize>,
    workers: Vec<WorkerHandle>,
    rejects: Mutex<RejectNotifier>,
    replies: UnboundedTx<TradingReply>,
    venue: VenueConfig,
    schedule: PhaseSchedule,
    current_phase: Mutex<Option<PhaseTransition>>,
}

impl TradingSystem {
    /// Build the catalogue, spawn the workers and bind every instrument to
    /// one of them.
    pub fn start(
        config: TradingSystemConfig,
        listings: &[Listing],
        price_seeds: &[PriceSeed],
        restored: Vec<InstrumentState>,
        replies: UnboundedTx<TradingReply>,
    ) -> Result<Self, EngineError> {
        let mut instrument_ids = InstrumentIdContext::new();
        let catalogue =
            InstrumentCatalogue::from_listings(listings, &config.venue.venue_id, &mut instrument_ids)?;

        let worker_count = config.workers.max(1);
        let mut routes = FnvHashMap::default();
        let mut assignments: Vec<Vec<(Instrument, Option<PriceSeed>, Option<InstrumentState>)>> =
            (0..worker_count).map(|_| Vec::new()).collect();

        let mut restored = restored;
        for (index, instrument) in catalogue.instruments().iter().enumerate() {
            let worker_index = index % worker_count;
            routes.insert(instrument.id, worker_index);

            let seed = price_seeds
                .iter()
                .find(|seed| seed.symbol.as_ref() == Some(&instrument.symbol))
                .cloned();
            let state = restored
                .iter()
                .position(|state| state.symbol == instrument.symbol)
                .map(|position| restored.swap_remove(position));

            assignments[worker_index].push((instrument.clone(), seed, state));
        }

        let workers = assignments
            .into_iter()
            .enumerate()
            .map(|(worker_index, instruments)| {
                let (tx, mut rx) = unbounded::<EngineTask>();
                let venue = config.venue.clone();
                let reply_tx = replies.clone();

                let thread = std::thread::Builder::new()
                    .name(format!("arara-matching-{worker_index}"))
                    .spawn(move || {
                        let mut engines: FnvHashMap<
                            InstrumentId,
                            MatchingEngine<UtcClock, UnboundedTx<TradingReply>>,
                        > = FnvHashMap::default();
                        for (instrument, seed, state) in instruments {
                            let instrument_id = instrument.id;
                            let mut engine = MatchingEngine::new(
                                instrument,
                                venue.clone(),
                                UtcClock,
                                reply_tx.clone(),
                            );
                            if let Some(seed) = seed {
                                engine.apply_price_seed(&seed);
                            }
                            if let Some(state) = state {
                                engine.restore_state(state);
                            }
                            engines.insert(instrument_id, engine);
                        }

                        worker_loop(engines, &mut rx);
                    })
                    .map_err(|spawn_error| {
                        error!(%spawn_error, "failed to spawn a matching worker");
                        EngineError::ReplyRxDropped
                    })?;

                Ok(WorkerHandle {
                    tx: Some(tx),
                    thread: Some(thread),
                })
            })
            .collect::<Result<Vec<_>, EngineError>>()?;

        info!(
            instruments = catalogue.len(),
            workers = worker_count,
            venue_id = %config.venue.venue_id,
            "trading system started"
        );

        Ok(Self {
            catalogue: RwLock::new(catalogue),
            routes,
            workers,
            rejects: Mutex::new(RejectNotifier::new()),
            replies,
            venue: config.venue,
            schedule: config.schedule,
            current_phase: Mutex::new(None),
        })
    }

    pub fn venue(&self) -> &VenueConfig {
        &self.venue
    }

    pub fn instruments(&self) -> Vec<Instrument> {
        self.catalogue.read().instruments().to_vec()
    }

    /// Route an inbound request to the owning instrument worker, rejecting
    /// requests that address no listed instrument.
    pub fn dispatch(&self, request: TradingRequest) {
        let instrument_id = {
            let catalogue = self.catalogue.read();
            match &request {
                TradingRequest::Place(inner) => {
                    match catalogue.resolve(&inner.instrument) {
                        Some(instrument) => instrument.id,
                        None => {
                            self.rejects.lock().reject_placement(
                                &self.replies,
                                inner,
                                "unknown instrument",
                                arara_markets::OrderStatus::Rejected,
                                Utc::now(),
                            );
                            return;
                        }
                    }
                }
                TradingRequest::Modify(inner) => match catalogue.resolve(&inner.instrument) {
                    Some(instrument) => instrument.id,
                    None => {
                        self.rejects.lock().reject_modification_unknown_order(
                            &self.replies,
                            inner,
                            "unknown instrument",
                        );
                        return;
                    }
                },
                TradingRequest::Cancel(inner) => match catalogue.resolve(&inner.instrument) {
                    Some(instrument) => instrument.id,
                    None => {
                        self.rejects.lock().reject_cancellation(
                            &self.replies,
                            inner,
                            "unknown instrument",
                        );
                        return;
                    }
                },
                TradingRequest::MarketData(inner) => {
                    if inner.instruments.is_empty() {
                        self.rejects
                            .lock()
                            .notify_no_instruments_requested(&self.replies, inner);
                        return;
                    }
                    if inner.instruments.len() > 1 {
                        self.rejects
                            .lock()
                            .notify_multiple_instruments_requested(&self.replies, inner);
                        return;
                    }
                    match catalogue.resolve(&inner.instruments[0]) {
                        Some(instrument) => instrument.id,
                        None => {
                            self.rejects.lock().reject_market_data(
                                &self.replies,
                                inner,
                                Some(MdRejectReason::UnknownSymbol),
                                "unknown symbol",
                            );
                            return;
                        }
                    }
                }
                TradingRequest::SecurityStatus(inner) => {
                    match catalogue.resolve(&inner.instrument) {
                        Some(instrument) => instrument.id,
                        None => {
                            self.rejects.lock().reject_security_status(
                                &self.replies,
                                inner,
                                "unknown security",
                            );
                            return;
                        }
                    }
                }
            }
        };

        self.send_task(
            instrument_id,
            EngineTask::Request {
                instrument_id,
                request,
            },
        );
    }

    /// Periodic expiry sweep across every instrument.
    pub fn tick(&self) {
        self.broadcast(|| EngineTask::Tick);
    }

    /// Drive the phase schedule: broadcast a transition when the venue's
    /// local wall clock crosses into a different phase.
    pub fn update_phases(&self, now: DateTime<Utc>) {
        let transition = self.schedule.phase_at(self.venue.local_time(now));
        let mut current = self.current_phase.lock();
        if *current == Some(transition) {
            return;
        }
        *current = Some(transition);
        drop(current);

        self.broadcast_phase(transition);
    }

    /// Push an explicit phase transition (e.g. a halt) to every engine.
    pub fn broadcast_phase(&self, transition: PhaseTransition) {
        info!(phase = %transition.phase, status = %transition.status, "broadcasting phase transition");
        self.broadcast(|| EngineTask::Phase(transition));
    }

    /// A client session disconnected: drop its subscriptions everywhere
    /// and, when the venue runs cancel-on-disconnect, its open orders too.
    pub fn session_disconnected(&self, session: SessionId) {
        let cancel_orders = self.venue.cancel_on_disconnect;
        self.broadcast(|| EngineTask::SessionTerminated {
            session: session.clone(),
            cancel_orders,
        });
    }

    /// Collect a persisted-state snapshot of every instrument.
    pub fn snapshot(&self) -> Vec<InstrumentState> {
        let mut receivers = Vec::new();
        for worker in &self.workers {
            let (reply_tx, reply_rx) = tokio::sync::oneshot::channel();
            if let Some(tx) = &worker.tx {
                if tx.send(EngineTask::Snapshot { reply: reply_tx }).is_ok() {
                    receivers.push(reply_rx);
                }
            }
        }

        let mut states = Vec::new();
        for receiver in receivers {
            match receiver.blocking_recv() {
                Ok(worker_states) => states.extend(worker_states),
                Err(_) => warn!("a matching worker dropped its snapshot reply"),
            }
        }
        states.sort_by_key(|state| state.instrument_id);
        states
    }

    fn send_task(&self, instrument_id: InstrumentId, task: EngineTask) {
        let Some(worker_index) = self.routes.get(&instrument_id) else {
            warn!(%instrument_id, "no worker route for instrument");
            return;
        };
        if let Some(tx) = &self.workers[*worker_index].tx {
            if tx.send(task).is_err() {
                error!(%instrument_id, "matching worker queue is closed");
            }
        }
    }

    fn broadcast(&self, mut task: impl FnMut() -> EngineTask) {
        for worker in &self.workers {
            if let Some(tx) = &worker.tx {
                if tx.send(task()).is_err() {
                    error!("matching worker queue is closed");
                }
            }
        }
    }
}

impl Drop for TradingSystem {
    fn drop(&mut self) {
        for worker in &mut self.workers {
            worker.tx = None;
        }
        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                if thread.join().is_err() {
                    error!("a matching worker panicked");
                }
            }
        }
    }
}

fn worker_loop(
    mut engines: FnvHashMap<InstrumentId, MatchingEngine<UtcClock, UnboundedTx<TradingReply>>>,
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<EngineTask>,
) {
    while let Some(task) = rx.blocking_recv() {
        match task {
            EngineTask::Request {
                instrument_id,
                request,
            } => match engines.get_mut(&instrument_id) {
                Some(engine) => engine.handle(request),
                None => warn!(%instrument_id, "request routed to a worker that does not own the instrument"),
            },
            EngineTask::Tick => {
                for engine in engines.values_mut() {
                    engine.tick();
                }
            }
            EngineTask::Phase(transition) => {
                for engine in engines.values_mut() {
                    engine.handle_phase(transition);
                }
            }
            EngineTask::SessionTerminated {
                session,
                cancel_orders,
            } => {
                for engine in engines.values_mut() {
                    engine.session_terminated(&session, cancel_orders);
                }
            }
            EngineTask::Snapshot { reply } => {
                let states: Vec<InstrumentState> = engines
                    .values()
                    .map(|engine| engine.snapshot_state())
                    .collect();
                let _ = reply.send(states);
            }
        }
    }
}
