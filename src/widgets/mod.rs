//! Ratatui widgets for the tag-assignment popover
//!
//! Each widget renders from a [`PopoverView`](crate::state::PopoverView)
//! snapshot; none of them touch the state machine.

mod applied_bar;
mod popover;
mod search_bar;
mod tag_list;

pub use applied_bar::AppliedBar;
pub use popover::Popover;
pub use search_bar::SearchBar;
pub use tag_list::TagList;
