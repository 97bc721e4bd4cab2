pub mod catalog;
pub mod config;
pub mod constants;
pub mod lyrics;
pub mod moods;
pub mod playlist;
pub mod utils;
