pub mod app;
pub mod error_notice;
pub mod grid_view;
pub mod row;
pub mod selection_lines;
pub mod spinner;
pub mod word_list;
