//! Error shared by the in-memory store ports.

use super::define_port_error;

define_port_error! {
    /// Errors raised by store adapters.
    pub enum StoreError {
        /// The store's state cannot be read or written, e.g. after a writer
        /// panicked while holding its lock.
        StateUnavailable { store: String } => "{store} store state is unavailable",
    }
}
