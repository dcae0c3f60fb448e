mod content;
mod counts;

pub use content::*;
pub use counts::*;
