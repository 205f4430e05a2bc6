use wasm_bindgen::prelude::*;

pub mod bodies;
pub mod config;
pub mod game;
pub mod orbit;
pub mod viewport;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");
