pub mod discord;
pub mod emojify;
pub mod invocation;
pub mod notation;
pub mod roll;
