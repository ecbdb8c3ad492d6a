// wealthscope-core/src/infrastructure/source/mod.rs

pub mod file;

pub use file::FileSource;
