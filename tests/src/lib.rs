//! # Composition Ordering Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-crate behaviour
//!     ├── scenarios.rs  # Reference orderings and failures
//!     ├── properties.rs # Property tests over random analyzers
//!     ├── declared.rs   # Declaration-driven units end to end
//!     ├── service.rs    # Service, config and telemetry together
//!     └── concurrency.rs# One analyzer shared across threads
//!
//! tests/benches/
//! └── ordering_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p co-tests
//!
//! # By category
//! cargo test -p co-tests integration::scenarios::
//! cargo test -p co-tests integration::properties::
//!
//! # Benchmarks
//! cargo bench -p co-tests
//! ```
