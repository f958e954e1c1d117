pub use course::*;
pub use faculty::*;
pub use payment::*;
pub use stats::*;
pub use video::*;

mod course;
mod faculty;
mod payment;
mod stats;
mod video;
