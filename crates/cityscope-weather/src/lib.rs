//! Current weather lookup via the Open-Meteo forecast API.

pub mod client;

pub use client::WeatherClient;
