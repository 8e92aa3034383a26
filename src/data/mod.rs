//! Data layer: the in-memory matrix, raw binary I/O, and output naming.
//!
//! Architecture:
//! ```text
//!   model.bin (raw native-endian f32, row-major)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  bytes → Matrix (n_rows derived from n_cols)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Matrix   │  Vec<f32> + dims, row/col addressing
//!   └──────────┘
//!        │  (displaced in place by `crate::curve`)
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  Matrix → <stem>_curvy.bin
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod path;
