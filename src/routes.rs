mod hello;

pub use hello::*;
