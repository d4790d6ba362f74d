//! Foliage storage: procedurally placed tree instances on a terrain tile.

pub mod instance;
pub mod data;

pub use instance::TreeInstance;
pub use data::FoliageData;
