pub mod directory;
pub mod models;
pub mod web;
