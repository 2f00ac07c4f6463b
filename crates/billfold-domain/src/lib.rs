//! billfold-domain
//!
//! Pure domain models for bill tracking (Bill, BillDraft, month windows)
//! plus the calendar arithmetic they rely on. No I/O, no storage.

pub mod bill;
pub mod dates;
pub mod month;

pub use bill::*;
pub use dates::*;
pub use month::*;
