pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod single_instance;
pub mod state;
pub mod status;
pub mod ui;

#[cfg(test)]
mod tests;
