pub mod text;

pub use text::{join_limited, truncate_string, wrap_words};
