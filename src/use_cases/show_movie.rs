use crate::domain::entities::Movie;
use crate::domain::ports::Clock;
use crate::domain::runtime::Runtime;

// Movie lookup use case. No store exists yet, so a placeholder record is
// returned for any positive identifier.
pub struct ShowMovieUseCase<C> {
    pub clock: C,
}

impl<C> ShowMovieUseCase<C>
where
    C: Clock,
{
    // The identifier is already validated positive by the route layer.
    pub fn execute(&self, id: i64) -> Movie {
        Movie {
            id,
            created_at: self.clock.now(),
            title: "Casablanca".to_string(),
            year: 0,
            runtime: Runtime::new(102),
            genres: Some(
                ["drama", "romance", "war"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            ),
            version: 1,
        }
    }
}
