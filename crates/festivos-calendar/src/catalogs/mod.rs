//! Built-in country catalogs.

mod colombia;

pub use colombia::colombia;
