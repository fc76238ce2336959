//! # notepad-client
//!
//! Exercises a notepad server: generates a note, creates it, fetches it back
//! by the returned id and reports both.
//!
//! Nothing in this crate terminates the process. Every failure comes back as
//! a [`ClientError`] and the binary decides what to do with it.

pub mod client;
pub mod error;
pub mod generator;
pub mod run;

pub use client::NoteClient;
pub use error::ClientError;
pub use generator::{FakeNoteContent, FixedNoteContent, NoteContentSource};
pub use run::{run, RunReport};
