//! Legacy classname handling

pub mod mapping;

pub use mapping::LegacyClassnameMapping;
