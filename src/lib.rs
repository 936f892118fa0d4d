//! Command-line driver for the naive convolution kernel resolver.

pub mod cli;
