#![deny(unsafe_code)]

//! Export containers, share actions, and the stage handoff store.

pub mod handoff;
pub mod serialize;
pub mod share;

pub use handoff::{HANDOFF_KEY, HandoffPayload, HandoffStore};
pub use serialize::{ExportKind, ExportPayload, UnknownExportKind, serialize, write_payload};
pub use share::{mailto_url, share_link};
