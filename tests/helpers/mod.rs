#![allow(unused_imports, dead_code)]
pub mod stubs;
pub mod test_env;

pub use stubs::*;
pub use test_env::*;
