mod text;
mod time;

pub use self::text::{normalize, split_list};
pub use self::time::{format_timestamp, parse_timestamp};
