/// Test data factories using builder pattern
///
/// Provides convenient methods to create movies with sensible defaults
use chrono::NaiveDate;
use serde_json::{Map, Value};
use cinestory_lib::modules::movie::{
    domain::entities::movie::{Genre, MovieCollection, ProductionCompany},
    Movie,
};

pub struct MovieFactory {
    id: u32,
    title: String,
    overview: String,
    release_date: Option<NaiveDate>,
    budget: Option<u64>,
    backdrop_path: Option<String>,
    poster_path: Option<String>,
    collection: Option<MovieCollection>,
    genres: Vec<Genre>,
    companies: Vec<ProductionCompany>,
    extra: Map<String, Value>,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            id: 1,
            title: "Test Movie".to_string(),
            overview: String::new(),
            release_date: None,
            budget: None,
            backdrop_path: None,
            poster_path: None,
            collection: None,
            genres: Vec::new(),
            companies: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl MovieFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The movie most tests navigate to
    pub fn matrix() -> Movie {
        Self::new()
            .with_id(603)
            .with_title("The Matrix")
            .with_overview("Set in the 22nd century, The Matrix tells the story of a computer hacker.")
            .with_release_date(1999, 3, 30)
            .with_budget(63_000_000)
            .with_backdrop("/fNG7i7RqMErkcqhohV2a6cV1Ehy.jpg")
            .with_poster("/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg")
            .with_collection(2344, "The Matrix Collection")
            .with_genre(28, "Action")
            .with_genre(878, "Science Fiction")
            .with_company(79, "Village Roadshow Pictures")
            .with_company(372, "Groucho II Film Partnership")
            .build()
    }

    /// `count` minimal movies with ids starting at `first_id`
    pub fn similar_batch(first_id: u32, count: u32) -> Vec<Movie> {
        (0..count)
            .map(|offset| {
                Self::new()
                    .with_id(first_id + offset)
                    .with_title(&format!("Similar {}", offset + 1))
                    .with_backdrop(&format!("/similar-{}.jpg", offset + 1))
                    .build()
            })
            .collect()
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_overview(mut self, overview: &str) -> Self {
        self.overview = overview.to_string();
        self
    }

    pub fn with_release_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.release_date = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_backdrop(mut self, path: &str) -> Self {
        self.backdrop_path = Some(path.to_string());
        self
    }

    pub fn with_poster(mut self, path: &str) -> Self {
        self.poster_path = Some(path.to_string());
        self
    }

    pub fn with_collection(mut self, id: u32, name: &str) -> Self {
        self.collection = Some(MovieCollection {
            id,
            name: name.to_string(),
            extra: Map::new(),
        });
        self
    }

    pub fn with_genre(mut self, id: u32, name: &str) -> Self {
        self.genres.push(Genre {
            id,
            name: name.to_string(),
        });
        self
    }

    pub fn with_company(mut self, id: u32, name: &str) -> Self {
        self.companies.push(ProductionCompany {
            id,
            name: name.to_string(),
            extra: Map::new(),
        });
        self
    }

    /// Any upstream key the typed fields do not cover
    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            overview: self.overview,
            release_date: self.release_date.map(|d| d.format("%Y-%m-%d").to_string()),
            budget: self.budget,
            backdrop_path: self.backdrop_path,
            poster_path: self.poster_path,
            belongs_to_collection: self.collection.map(Some),
            genres: (!self.genres.is_empty()).then_some(self.genres),
            production_companies: (!self.companies.is_empty()).then_some(self.companies),
            extra: self.extra,
        }
    }
}
