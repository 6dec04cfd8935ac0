mod address;
mod display;
mod engine;
mod gradient;
