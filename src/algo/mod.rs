/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of [`AdjMap`](crate::repr::AdjMap).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to depth-first traversal, spanning forest construction, and topological
sorting. Each algorithm returns a structured result; rendering it (joining node names,
warning about disconnected forests, ...) is the caller's concern.
*/

mod mst;
mod topo;
mod traversal;

use crate::{prelude::*, utils::*};

pub use mst::*;
pub use topo::*;
pub use traversal::*;
