pub mod dates;
pub mod money;
pub mod text;

pub use dates::{is_new_release, parse_release_date, today, RECENCY_WINDOW_DAYS};
pub use money::format_price;
pub use text::pluralize;
