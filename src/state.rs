use std::sync::Arc;

use crate::{
    config::AppConfig,
    db::DbPool,
    services::{notifier::Notifier, participants::ParticipantService, trips::TripService},
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DbPool,
    pub trips: TripService,
    pub participants: ParticipantService,
}

impl AppState {
    pub fn new(config: AppConfig, db: DbPool, notifier: Arc<dyn Notifier>) -> Self {
        let trips = TripService::new(db.clone(), notifier);
        let participants = trips.participants().clone();
        Self {
            config,
            db,
            trips,
            participants,
        }
    }
}
