pub mod interaction;
pub mod response;
