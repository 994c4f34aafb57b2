/*!
# Utilities

Supporting data structures for the algorithms in [`crate::algo`]. Currently this is only
[`DisjointSets`], the union-find structure backing spanning forest construction.
*/

pub mod dsu;

pub use dsu::DisjointSets;
