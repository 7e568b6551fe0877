//! Error type shared by every Entity Store repository port.

use super::define_port_error;

define_port_error! {
    /// Errors raised by Entity Store adapters.
    pub enum EntityStoreError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "entity store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "entity store query failed: {message}",
        /// A uniqueness constraint rejected the write.
        DuplicateKey { message: String } =>
            "entity store duplicate key: {message}",
        /// Compare-and-swap write observed a different revision.
        RevisionMismatch { expected: u32, actual: u32 } =>
            "revision mismatch: expected {expected}, found {actual}",
        /// Conditional write targeted a record that no longer exists.
        Missing { entity: String } =>
            "{entity} no longer exists",
    }
}
