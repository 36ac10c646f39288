//! 应用生命周期：启动准备与停机监听

pub mod shutdown;
pub mod startup;

pub use shutdown::listen_for_shutdown;
pub use startup::{StartupContext, prepare};
