pub mod estate;

pub use estate::{format_usd, Estate, EstateType, Picture};
