#[macro_use]
extern crate rocket;

mod health_check;
mod helpers;
mod preflight;
