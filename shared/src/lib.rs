// Types and helpers shared between the conversion engine and its front ends.
pub mod models;
pub mod utils;
