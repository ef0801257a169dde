//! Domain entities for irkeyd.
//!
//! Pure business logic with no infrastructure dependencies: the
//! code → shortcut mapping and the repeat-suppression gate. Both are
//! owned exclusively by the single worker loop at runtime, so neither
//! needs any locking.

pub mod debounce;
pub mod keytable;
