//! Testing utilities and harness for Swipelist

pub mod fake_list;
pub mod robot;
pub mod robot_assertions;

pub use fake_list::*;
pub use robot::*;

pub mod prelude {
    pub use crate::fake_list::*;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
