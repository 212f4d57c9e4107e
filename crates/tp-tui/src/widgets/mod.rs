pub mod detail_modal;
pub mod filter_bar;
pub mod gauge_bar;
pub mod help_modal;
pub mod status_bar;
