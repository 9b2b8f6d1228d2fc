pub mod hampel;
mod padding;
pub mod statistics;
