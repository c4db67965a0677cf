#[macro_use]
extern crate pest_derive;

pub mod config;
pub mod go;
pub mod script;
