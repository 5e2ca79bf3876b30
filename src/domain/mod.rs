//! Domain Layer
//!
//! The node-action and branch-propagation core of branchtree, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Tree nodes and the records lazy-load produces
//! - `value_objects/` - Notices, placement, storage URL parameters
//! - `services/` - Branch propagation, action resolution, branch selection, rows
//! - `ports/` - Host, modal, storage API and remote store interfaces
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Remote calls and rendering go through ports
//! 2. **Pure Functions** - Resolvers and builders are stateless
//! 3. **Explicit collaborators** - The host and modal are passed in, never global

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
