pub mod activity;
pub mod link;
pub mod participant;
pub mod trip;
