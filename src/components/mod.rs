//! Reusable view components shared by pages.

pub mod bank_form;
pub mod nav_menu;
