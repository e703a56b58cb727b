mod classifier;
mod common;
mod comparison;
mod memory;
mod persistence;
