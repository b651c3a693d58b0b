pub mod operation;
pub mod result;

pub use operation::*;
pub use result::*;
