pub mod item;
pub mod key;

pub use item::{column_name, Likert, ITEM_COUNT};
pub use key::{all_scales, is_reversed, Scale, ScaleKind, DOMAINS, FACETS, REVERSED_ITEMS};
