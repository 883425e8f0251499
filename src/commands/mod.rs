pub mod check;
pub mod form;
pub mod help;
pub mod result;
pub mod upload;

pub use result::CommandResult;
