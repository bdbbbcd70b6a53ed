pub mod concert_filters;
pub mod concert_list;
pub mod filter_panel;
pub mod notice;
pub mod sticky_date;
