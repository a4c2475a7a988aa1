/// StructureEngine core - storage and transform primitives for the scene runtime
///
/// This library provides the pieces every scene feature builds on: a
/// power-of-two growable array, a multi-child tree node on top of it, and a
/// 4x4 transform matrix.

pub mod error;
pub mod growable;
pub mod mat4;
pub mod tree;

// Re-export commonly used types
pub use error::{ArrayError, ArrayResult, MatrixError};
pub use growable::{checked_index, GrowableArray, GrowthPolicy, INITIAL_CAPACITY};
pub use mat4::{Mat4, RotationOrder};
pub use tree::TreeNode;
