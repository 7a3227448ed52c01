pub mod activities;
pub mod links;
pub mod notifier;
pub mod participants;
pub mod trips;
