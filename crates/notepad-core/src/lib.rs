//! # notepad-core
//!
//! Core types, traits, and the concurrent in-memory note store shared by the
//! notepad server and client.

pub mod defaults;
pub mod error;
pub mod ids;
pub mod logging;
pub mod memory;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use ids::{IdGenerator, RandomIds};
pub use memory::InMemoryNoteStore;
pub use models::{Note, NoteContent};
pub use traits::NoteRepository;
