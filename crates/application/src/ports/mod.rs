//! Port definitions (interfaces for adapters)

mod address_resolver_port;
mod weather_port;

#[cfg(test)]
pub use address_resolver_port::MockAddressResolverPort;
pub use address_resolver_port::AddressResolverPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
