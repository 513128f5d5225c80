pub mod lab;

pub use lab::LabConfig;
