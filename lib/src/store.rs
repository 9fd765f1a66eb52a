use crate::error::{LinkVaultError, Result};
use crate::models::{Link, LinkInput};
use crate::storage::{LocalStorage, LINKS_KEY};
use crate::validate::{extract_title_from_url, is_valid_link};
use chrono::Utc;

/// The authoritative link collection plus its persisted form.
///
/// Newest links sit at the front. Every mutation rewrites the whole
/// collection under [`LINKS_KEY`]; a failed write is logged and leaves the
/// in-memory state untouched and usable.
pub struct LinkStore {
    storage: LocalStorage,
    links: Vec<Link>,
    last_save_failed: bool,
}

impl LinkStore {
    /// Load the collection from `storage`. Unreadable data yields an empty collection.
    pub fn open(storage: LocalStorage) -> Self {
        let links = read_links(&storage);
        log::debug!(
            "Loaded {} link(s) from {}",
            links.len(),
            storage.get_path().display()
        );
        Self {
            storage,
            links,
            last_save_failed: false,
        }
    }

    pub fn init_in_memory() -> Result<Self> {
        Ok(Self::open(LocalStorage::init_in_memory()?))
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    /// Whether the most recent write to storage failed
    pub fn last_save_failed(&self) -> bool {
        self.last_save_failed
    }

    /// Add a link at the front of the collection. Duplicate URLs are allowed here.
    pub fn add_link(&mut self, input: LinkInput) -> Result<&Link> {
        let input = sanitize_input(input)?;
        let link = Link {
            id: crate::models::link::generate_id(),
            title: input.title,
            url: input.url,
            category: input.category,
            description: input.description,
            created_at: Utc::now(),
            favorite: false,
        };
        log::debug!("Adding link {} ({})", link.id, link.url);
        self.links.insert(0, link);
        self.persist();
        Ok(&self.links[0])
    }

    /// Replace the editable fields of a link; id, createdAt and favorite are kept.
    pub fn update_link(&mut self, id: &str, input: LinkInput) -> Result<&Link> {
        let input = sanitize_input(input)?;
        let index = self.index_of(id)?;

        let link = &mut self.links[index];
        link.title = input.title;
        link.url = input.url;
        link.category = input.category;
        link.description = input.description;

        self.persist();
        Ok(&self.links[index])
    }

    pub fn delete_link(&mut self, id: &str) -> Result<Link> {
        let index = self.index_of(id)?;
        let removed = self.links.remove(index);
        self.persist();
        Ok(removed)
    }

    /// Flip the favorite flag, returning the new value
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let index = self.index_of(id)?;
        let link = &mut self.links[index];
        link.favorite = !link.favorite;
        let favorite = link.favorite;
        self.persist();
        Ok(favorite)
    }

    /// Rewrite the full collection to storage
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.links)?;
        self.storage.set_item(LINKS_KEY, &json)?;
        Ok(())
    }

    /// Save, logging instead of failing. Returns whether the write succeeded.
    pub(crate) fn persist(&mut self) -> bool {
        match self.save() {
            Ok(()) => {
                self.last_save_failed = false;
                true
            }
            Err(e) => {
                log::error!("Error saving links to storage: {}", e);
                self.last_save_failed = true;
                false
            }
        }
    }

    pub(crate) fn prepend(&mut self, link: Link) {
        self.links.insert(0, link);
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.links
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| LinkVaultError::LinkNotFound(id.to_string()))
    }
}

fn read_links(storage: &LocalStorage) -> Vec<Link> {
    let data = match storage.get_item(LINKS_KEY) {
        Ok(Some(data)) => data,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("Error reading from storage: {}", e);
            return Vec::new();
        }
    };

    let records: Vec<serde_json::Value> = match serde_json::from_str(&data) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("Stored links could not be parsed, starting empty: {}", e);
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| match serde_json::from_value::<Link>(record) {
            Ok(link) => Some(link),
            Err(e) => {
                log::warn!("Skipping malformed stored link #{}: {}", i, e);
                None
            }
        })
        .collect()
}

fn sanitize_input(input: LinkInput) -> Result<LinkInput> {
    let url = input.url.trim().to_string();
    if !is_valid_link(&url) {
        return Err(LinkVaultError::InvalidUrl(url));
    }

    let title = match input.title.trim() {
        "" => extract_title_from_url(&url),
        t => t.to_string(),
    };

    Ok(LinkInput {
        title,
        url,
        category: input.category,
        description: input.description.trim().to_string(),
    })
}
