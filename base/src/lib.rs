#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod builder;
pub mod error;
pub mod field;
pub mod kind;
pub mod name;
mod primitive;
pub mod traits;
pub mod value;
pub mod walk;


pub mod prelude {
    pub use crate::traits::{Handle, Record, Reflect};
}
