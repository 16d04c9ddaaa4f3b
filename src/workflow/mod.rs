pub mod cascade;

pub use cascade::ClassificationCascade;
