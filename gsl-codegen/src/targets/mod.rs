mod blocks;
mod classes;
mod executor;
mod sdk;

pub use blocks::{BlocksTarget, DEFAULT_LANG};
pub use classes::ClassesTarget;
pub use executor::ExecutorTarget;
pub use sdk::{SdkTarget, command_name};
