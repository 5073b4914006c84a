//! # Metadata Map Generator
//!
//! This crate generates the route metadata map for the client pages tree.
//! It discovers metadata descriptor files, derives a route key from each
//! file's location, and emits a single source module mapping every route
//! to its metadata import.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Map Generator                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  GeneratorConfig ──► scan::discover ──► RouteTable ──► emit     │
//! │        │                   │                │            │      │
//! │        ▼                   ▼                ▼            ▼      │
//! │   glob pattern        Descriptor      last-wins      write or   │
//! │                       (route, ident)  collapse       skip       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The emitted module is compared byte for byte against the file already
//! on disk; an unchanged map is never rewritten, so downstream build
//! steps that trigger on modification see no spurious changes.

pub mod config;
pub mod emit;
pub mod error;
pub mod generator;
pub mod route;
pub mod scan;

pub use config::GeneratorConfig;
pub use error::{GeneratorError, Result};
pub use generator::{GenerateOutcome, MapGenerator};
pub use route::{RouteKey, RouteTable};
pub use scan::Descriptor;
