pub mod check;
pub mod resolve;
pub mod schemes;
