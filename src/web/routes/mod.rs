pub mod activities;
pub mod activity;
