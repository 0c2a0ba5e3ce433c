mod kernel_config;
mod kernel_error;
mod kernel_handle;
mod process_id;
mod shared;
mod sim_kernel;
mod sleep;
mod task_waker;

pub use kernel_config::{KernelConfig, DEFAULT_IDLE_TIMEOUT};
pub use kernel_error::KernelError;
pub use kernel_handle::KernelHandle;
pub use process_id::ProcessId;
pub use sim_kernel::SimKernel;
pub use sleep::Sleep;
