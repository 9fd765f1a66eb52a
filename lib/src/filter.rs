use crate::models::{Category, Link};
use std::str::FromStr;

/// Which tab of the collection is being looked at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkView {
    #[default]
    All,
    Favorites,
    Category(Category),
}

impl LinkView {
    pub fn matches(&self, link: &Link) -> bool {
        match self {
            LinkView::All => true,
            LinkView::Favorites => link.favorite,
            LinkView::Category(c) => link.category == *c,
        }
    }

    /// Heading and hint shown when nothing matches
    pub fn empty_state(&self) -> (String, String) {
        match self {
            LinkView::Favorites => (
                "No favorites yet!".to_string(),
                "Star your favorite links to see them here.".to_string(),
            ),
            LinkView::Category(c) => (
                format!("No {} links yet!", c),
                format!(
                    "Start building your {} collection by adding your first link.",
                    c
                ),
            ),
            LinkView::All => (
                "No links yet!".to_string(),
                "Start building your link collection by adding your first link or importing your browser bookmarks.".to_string(),
            ),
        }
    }
}

impl FromStr for LinkView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(LinkView::All),
            "favorites" | "favourites" | "fav" => Ok(LinkView::Favorites),
            other => Category::from_name(other)
                .map(LinkView::Category)
                .ok_or_else(|| format!("Unknown view: {}", s)),
        }
    }
}

/// A view plus an optional free-text search
#[derive(Debug, Clone, Default)]
pub struct LinkQuery {
    pub view: LinkView,
    pub search: Option<String>,
}

impl LinkQuery {
    pub fn new(view: LinkView, search: Option<String>) -> Self {
        Self { view, search }
    }

    pub fn matches(&self, link: &Link) -> bool {
        if !self.view.matches(link) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(q) => {
                let q = q.to_lowercase();
                link.title.to_lowercase().contains(&q)
                    || link.url.to_lowercase().contains(&q)
                    || link.description.to_lowercase().contains(&q)
            }
        }
    }

    /// Matching links, store order preserved
    pub fn apply<'a>(&self, links: &'a [Link]) -> Vec<&'a Link> {
        links.iter().filter(|l| self.matches(l)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkStats {
    pub total: usize,
    pub favorites: usize,
    pub learning: usize,
    pub work: usize,
    pub personal: usize,
}

impl LinkStats {
    pub fn from_links(links: &[Link]) -> Self {
        links.iter().fold(Self::default(), |mut stats, link| {
            stats.total += 1;
            if link.favorite {
                stats.favorites += 1;
            }
            match link.category {
                Category::Learning => stats.learning += 1,
                Category::Work => stats.work += 1,
                Category::Personal => stats.personal += 1,
            }
            stats
        })
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Learning => self.learning,
            Category::Work => self.work,
            Category::Personal => self.personal,
        }
    }
}
