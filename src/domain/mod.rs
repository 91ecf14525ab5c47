//! Domain Layer
//!
//! Pure types and rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The compliance report
//! - `value_objects/` - Profile references, catalog endpoint, digests
//! - `ports/` - Interface definitions for infrastructure (catalog, engine, installer, fs)

pub mod entities;
pub mod ports;
pub mod value_objects;
