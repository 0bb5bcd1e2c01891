//! Scene file support.
//!
//! Two formats are accepted:
//!
//! - **Text**: one entry per line, keyed by its first token
//!   (`NEAR`, `LEFT`, `RIGHT`, `BOTTOM`, `TOP`, `RES`, `SPHERE`, `LIGHT`,
//!   `BACK`, `AMBIENT`, `OUTPUT`)
//! - **JSON**: the serde representation of `Scene`, picked by a `.json`
//!   extension
//!
//! Both paths validate the scene before returning it.
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::scene_file::parse_scene;
//!
//! let scene = parse_scene("NEAR 1\nLEFT -1\nRIGHT 1\nBOTTOM -1\nTOP 1\nRES 64 64\n")?;
//! assert_eq!(scene.pixel_count(), 64 * 64);
//! ```

mod loader;
mod parser;

pub use loader::*;
pub use parser::*;
