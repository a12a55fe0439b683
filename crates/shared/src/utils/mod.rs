mod gracefullshutdown;
mod logs;
mod patch;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::patch::double_option;
