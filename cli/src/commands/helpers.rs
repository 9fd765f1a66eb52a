use crate::output::colorize::{Colorize, ColorizeLink};
use linkvault::error::{LinkVaultError, Result};
use linkvault::models::Link;
use linkvault::LinkStore;

/// Number of id characters shown in listings
pub const SHORT_ID_LEN: usize = 8;

/// Resolve a full id or a unique id prefix to the stored id
pub fn resolve_id(store: &LinkStore, input: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LinkVaultError::InvalidInput("Link ID is empty".to_string()));
    }
    if let Some(link) = store.get(input) {
        return Ok(link.id.clone());
    }

    let matches: Vec<&Link> = store
        .links()
        .iter()
        .filter(|l| l.id.starts_with(input))
        .collect();

    match matches.as_slice() {
        [] => Err(LinkVaultError::LinkNotFound(input.to_string())),
        [link] => Ok(link.id.clone()),
        _ => Err(LinkVaultError::InvalidInput(format!(
            "ID prefix '{}' matches {} links; use more characters",
            input,
            matches.len()
        ))),
    }
}

pub fn print_links(links: &[&Link], no_color: bool) {
    for link in links {
        let card = ColorizeLink(*link);
        if no_color {
            println!("{}", card.to_plain());
        } else {
            println!("{}", card.to_colored());
        }
    }
}

/// Warn on stderr when the last write to storage did not go through
pub fn report_save_failure(store: &LinkStore) {
    if store.last_save_failed() {
        eprintln!("Warning: changes could not be saved; they will be lost when this session ends.");
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::TestEnv;
    use super::*;
    use linkvault::models::Category;

    #[test]
    fn test_resolve_full_and_prefix() {
        let env = TestEnv::with_links(&[("A", "https://a.io", Category::Work)]);
        let id = env.store.links()[0].id.clone();

        assert_eq!(resolve_id(&env.store, &id).unwrap(), id);
        assert_eq!(resolve_id(&env.store, &id[..SHORT_ID_LEN]).unwrap(), id);
    }

    #[test]
    fn test_resolve_missing_and_empty() {
        let env = TestEnv::with_links(&[("A", "https://a.io", Category::Work)]);
        assert!(matches!(
            resolve_id(&env.store, "zzzz-not-there"),
            Err(LinkVaultError::LinkNotFound(_))
        ));
        assert!(matches!(
            resolve_id(&env.store, "  "),
            Err(LinkVaultError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_resolve_ambiguous_prefix() {
        let storage = linkvault::storage::LocalStorage::init_in_memory().unwrap();
        storage
            .set_item(
                linkvault::storage::LINKS_KEY,
                r#"[{"id":"abc1","title":"A","url":"https://a.io","category":"work","createdAt":"2024-01-01T00:00:00Z"},
                    {"id":"abc2","title":"B","url":"https://b.io","category":"work","createdAt":"2024-01-01T00:00:00Z"}]"#,
            )
            .unwrap();
        let store = LinkStore::open(storage);

        assert!(matches!(
            resolve_id(&store, "abc"),
            Err(LinkVaultError::InvalidInput(_))
        ));
        assert_eq!(resolve_id(&store, "abc2").unwrap(), "abc2");
    }
}
