pub mod classification;
pub mod work_log;

pub use classification::*;
pub use work_log::*;
