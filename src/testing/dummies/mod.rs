mod functions;

pub use functions::*;
