pub mod dispatch;
pub mod prompt;
pub mod session;
pub mod status;
