// Service module exports

pub mod calendar;
pub mod controller;
pub mod persistence;
pub mod projection;
pub mod selection;
pub mod settings;
