//! billfold-core
//!
//! Business logic for bill tracking: draft validation, recurring-bill
//! expansion, the bill store with its injected persistence port, and
//! month-windowed aggregation. Depends on billfold-domain. No terminal I/O,
//! no direct filesystem access.

pub mod clock;
pub mod error;
pub mod recurrence;
pub mod storage;
pub mod store;
pub mod summary;
pub mod validate;

pub use clock::{Clock, SystemClock};
pub use error::CoreError;
pub use recurrence::*;
pub use storage::BillStorage;
pub use store::*;
pub use summary::*;
pub use validate::*;
