mod client;
mod types;

pub use client::{OpenWeatherClient, WeatherProvider};
pub use types::{CurrentWeather, Units};
