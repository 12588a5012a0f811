//! Background workers feeding the dashboard

pub mod core;
pub mod locations;
pub mod poller;

pub use self::core::EventSender;
pub use locations::start_location_loader;
pub use poller::start_poller;
