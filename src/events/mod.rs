pub mod keyboard;
pub mod pointer;

pub use pointer::DomInput;
