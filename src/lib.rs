pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod event;
pub mod led;
pub mod router;
pub mod trail;

#[cfg(test)]
mod test;
