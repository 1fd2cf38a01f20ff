pub mod bar;
pub mod project_card;
pub mod stats_card;
