//! # Wardrobe Testkit
//!
//! Testing utilities for the wardrobe.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: the standard test catalog plus instrumented stores
//!   (write-order recording, fault injection, full unavailability)
//! - **Generators**: proptest strategies for operation sequences
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use wardrobe_testkit::generators::op_sequence;
//!
//! proptest! {
//!     #[test]
//!     fn invariants_hold(ops in op_sequence(40)) {
//!         // hydrate a wardrobe, apply each op, assert invariants
//!     }
//! }
//! ```
//!
//! ## Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust,ignore
//! use wardrobe_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let wardrobe = fixture.wardrobe().await;
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{standard_catalog, FailingStore, RecordingStore, TestFixture, UnavailableStore};
pub use generators::{op, op_sequence, Op};
