//! Movie catalog endpoints.
//!
//! URL builders for the TMDb-shaped REST API the client consumes. The rest
//! of the crate treats URLs as opaque strings; this module is the only
//! place that knows the path layout and the `api_key` query parameter.

/// Endpoint catalog for one API host + key.
#[derive(Debug, Clone)]
pub struct Catalog {
    base_url: String,
    api_key: String,
}

impl Catalog {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.themoviedb.org/3";

    /// Catalog against the default host.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL, api_key)
    }

    /// Catalog against a custom host (tests point this at a mock server).
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}?api_key={}",
            self.base_url,
            path,
            urlencoding::encode(&self.api_key)
        )
    }

    /// Currently popular movies (paginated envelope).
    pub fn popular(&self) -> String {
        self.url("movie/popular")
    }

    /// Movies now playing in theaters (paginated envelope).
    pub fn now_playing(&self) -> String {
        self.url("movie/now_playing")
    }

    /// The full genre list, under the `"genres"` key.
    pub fn genres(&self) -> String {
        self.url("genre/movie/list")
    }

    /// A single movie's detail envelope.
    pub fn movie(&self, id: i64) -> String {
        self.url(&format!("movie/{id}"))
    }

    /// Videos (trailers etc.) for a movie.
    pub fn videos(&self, id: i64) -> String {
        self.url(&format!("movie/{id}/videos"))
    }

    /// Cast and crew for a movie, under the `"cast"` key.
    pub fn credits(&self, id: i64) -> String {
        self.url(&format!("movie/{id}/credits"))
    }

    /// Discover movies in a genre (paginated envelope).
    pub fn discover_genre(&self, genre_id: i64) -> String {
        format!("{}&with_genres={genre_id}", self.url("discover/movie"))
    }
}

/// Append the `page` query parameter the paginated endpoints understand.
pub fn with_page(url: &str, page: u32) -> String {
    if url.contains('?') {
        format!("{url}&page={page}")
    } else {
        format!("{url}?page={page}")
    }
}

/// The genres the browse screen features, with their catalog ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeaturedGenre {
    Fantasy,
    Adventure,
    Action,
    SciFi,
}

impl FeaturedGenre {
    pub const ALL: [FeaturedGenre; 4] = [
        FeaturedGenre::Fantasy,
        FeaturedGenre::Adventure,
        FeaturedGenre::Action,
        FeaturedGenre::SciFi,
    ];

    pub fn id(self) -> i64 {
        match self {
            FeaturedGenre::Fantasy => 14,
            FeaturedGenre::Adventure => 12,
            FeaturedGenre::Action => 28,
            FeaturedGenre::SciFi => 878,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FeaturedGenre::Fantasy => "Fantasy",
            FeaturedGenre::Adventure => "Adventure",
            FeaturedGenre::Action => "Action",
            FeaturedGenre::SciFi => "Sci-Fi",
        }
    }
}
