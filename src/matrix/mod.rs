//! Dense row-major integer matrix and the primitives being profiled.
//!
//! [`Matrix`] owns one flat buffer. Aggregations, transpose and reshape are
//! methods split across the submodules below; serialization and the seeded
//! random fill are free functions.

pub mod aggregate;
pub mod io;
pub mod random;
pub mod reshape;
pub mod store;
pub mod transpose;

pub use store::Matrix;
