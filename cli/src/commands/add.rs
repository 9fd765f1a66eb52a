use super::helpers::{report_save_failure, resolve_id};
use super::{AppContext, VaultCommand};
use linkvault::error::{LinkVaultError, Result};
use linkvault::models::{Category, LinkInput};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommand {
    pub url: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl VaultCommand for AddCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let category = self
            .category
            .as_deref()
            .map(Category::normalize)
            .unwrap_or(ctx.config.default_category);

        let link = ctx.store.add_link(LinkInput {
            title: self.title.clone().unwrap_or_default(),
            url: self.url.clone(),
            category,
            description: self.description.clone().unwrap_or_default(),
        })?;
        eprintln!("Link added successfully! ({})", link.id);
        report_save_failure(ctx.store);
        Ok(())
    }
}

/// Change some fields of an existing link; omitted fields keep their value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditCommand {
    pub id: String,
    pub url: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl VaultCommand for EditCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let id = resolve_id(ctx.store, &self.id)?;
        let current = ctx
            .store
            .get(&id)
            .cloned()
            .ok_or_else(|| LinkVaultError::LinkNotFound(id.clone()))?;

        let input = LinkInput {
            title: self.title.clone().unwrap_or(current.title),
            url: self.url.clone().unwrap_or(current.url),
            category: self
                .category
                .as_deref()
                .map(Category::normalize)
                .unwrap_or(current.category),
            description: self.description.clone().unwrap_or(current.description),
        };

        ctx.store.update_link(&id, input)?;
        eprintln!("Link updated successfully!");
        report_save_failure(ctx.store);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::helpers::test_support::TestEnv;
    use super::*;
    use rstest::rstest;

    fn add(url: &str) -> AddCommand {
        AddCommand {
            url: url.to_string(),
            title: None,
            category: None,
            description: None,
        }
    }

    #[rstest]
    #[case(Some("Rust"), Some("tutorial"), "Rust", Category::Learning)]
    #[case(None, None, "Example.com", Category::Personal)]
    #[case(Some("  "), Some("business"), "Example.com", Category::Work)]
    fn test_add_command(
        #[case] title: Option<&str>,
        #[case] category: Option<&str>,
        #[case] expected_title: &str,
        #[case] expected_category: Category,
    ) {
        let mut env = TestEnv::new();
        let cmd = AddCommand {
            title: title.map(str::to_string),
            category: category.map(str::to_string),
            description: Some("notes".to_string()),
            ..add("https://www.example.com/page")
        };

        cmd.execute(&mut env.ctx()).unwrap();

        let link = &env.store.links()[0];
        assert_eq!(link.title, expected_title);
        assert_eq!(link.category, expected_category);
        assert_eq!(link.description, "notes");
    }

    #[test]
    fn test_add_uses_configured_default_category() {
        let mut env = TestEnv::new();
        env.config.default_category = Category::Work;
        add("https://a.io").execute(&mut env.ctx()).unwrap();
        assert_eq!(env.store.links()[0].category, Category::Work);
    }

    #[test]
    fn test_add_invalid_url() {
        let mut env = TestEnv::new();
        let err = add("ftp://files.example.com")
            .execute(&mut env.ctx())
            .unwrap_err();
        assert!(matches!(err, LinkVaultError::InvalidUrl(_)));
        assert!(env.store.is_empty());
    }

    #[test]
    fn test_edit_partial_fields() {
        let mut env = TestEnv::with_links(&[("Old", "https://old.io", Category::Learning)]);
        let id = env.store.links()[0].id.clone();

        let cmd = EditCommand {
            id: id[..8].to_string(),
            url: None,
            title: Some("New".to_string()),
            category: None,
            description: Some("desc".to_string()),
        };
        cmd.execute(&mut env.ctx()).unwrap();

        let link = env.store.get(&id).unwrap();
        assert_eq!(link.title, "New");
        assert_eq!(link.url, "https://old.io");
        assert_eq!(link.category, Category::Learning);
        assert_eq!(link.description, "desc");
    }

    #[test]
    fn test_edit_rejects_invalid_url() {
        let mut env = TestEnv::with_links(&[("Old", "https://old.io", Category::Learning)]);
        let id = env.store.links()[0].id.clone();

        let cmd = EditCommand {
            id: id.clone(),
            url: Some("old.io".to_string()),
            title: None,
            category: None,
            description: None,
        };
        assert!(cmd.execute(&mut env.ctx()).is_err());
        assert_eq!(env.store.get(&id).unwrap().url, "https://old.io");
    }
}
