//! Dataset Trees
//!
//! Generation of nested depth/width directory trees filled with
//! size-encoded random files, and linear scans of existing trees.

pub mod builder;
pub mod content;
pub mod naming;
pub mod path;
pub mod walker;
