mod duration;

pub use duration::Duration;
