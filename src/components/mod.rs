//! Shared presentation components used across the tool pages.

pub mod bullet_list;
pub mod detail_row;
pub mod error_panel;
pub mod form_fields;
pub mod loading;
pub mod nav_bar;
pub mod notice;
pub mod tool_card;
