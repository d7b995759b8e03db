use chrono::Datelike;

use crate::domain::entities::Movie;
use crate::domain::ports::Clock;
use crate::domain::validator::{Validator, ValidationErrors, unique};
use crate::interface_adapters::protocol::CreateMovieRequest;

// Movie creation use case with an injected clock. No store exists yet, so a
// successful run only yields the validated movie.
pub struct CreateMovieUseCase<C> {
    pub clock: C,
}

impl<C> CreateMovieUseCase<C>
where
    C: Clock,
{
    pub fn execute(&self, input: &CreateMovieRequest) -> Result<Movie, ValidationErrors> {
        let now = self.clock.now();
        let movie = Movie {
            id: 0,
            created_at: now,
            title: input.title.clone(),
            year: input.year,
            runtime: input.runtime,
            genres: input.genres.clone(),
            version: 1,
        };

        let mut v = Validator::new();
        validate_movie(&mut v, &movie, now.year());
        if !v.is_valid() {
            return Err(v.into_errors());
        }

        Ok(movie)
    }
}

// All rules run independently; per field, the first failure wins.
pub fn validate_movie(v: &mut Validator, movie: &Movie, current_year: i32) {
    v.check(!movie.title.is_empty(), "title", "must be provided");
    v.check(
        movie.title.len() <= 500,
        "title",
        "must not be more than 500 bytes long",
    );

    v.check(movie.year != 0, "year", "must be provided");
    v.check(movie.year >= 1888, "year", "must be greater than 1888");
    v.check(movie.year <= current_year, "year", "must not be in the future");

    v.check(!movie.runtime.is_zero(), "runtime", "must be provided");
    v.check(
        movie.runtime.minutes() > 0,
        "runtime",
        "must be a positive integer",
    );

    v.check(movie.genres.is_some(), "genres", "must be provided");
    let genres = movie.genres.as_deref().unwrap_or(&[]);
    v.check(!genres.is_empty(), "genres", "must contain at least 1 genre");
    v.check(
        genres.len() <= 5,
        "genres",
        "must not contain more than 5 genres",
    );
    v.check(unique(genres), "genres", "must not contain duplicate values");
}
