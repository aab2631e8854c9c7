//! Ports module for Composition Ordering
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::CompositionOrderingApi;
pub use outbound::DependencyAnalyzer;
