pub mod adb;
pub mod logging;
