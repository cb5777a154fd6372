pub mod card_group;
pub mod items;
pub mod search;

pub use card_group::{CardGroup, CardGroupState, ProfileCard};
pub use items::{CompactItemView, GridItemView, ItemLayout, ResultItemView};
pub use search::{OverrideRegistry, SEARCH_APP_NAME};
