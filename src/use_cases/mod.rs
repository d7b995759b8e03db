pub mod create_movie;
pub mod show_movie;
