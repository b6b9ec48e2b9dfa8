pub mod errors;
pub mod mvi;
pub mod store;
