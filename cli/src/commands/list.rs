use super::helpers::print_links;
use super::{AppContext, VaultCommand};
use linkvault::error::{LinkVaultError, Result};
use linkvault::filter::{LinkQuery, LinkStats, LinkView};
use linkvault::models::{Category, Link};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommand {
    /// all, favorites, or a category name
    pub view: String,
    pub keywords: Vec<String>,
    pub limit: Option<usize>,
}

impl ListCommand {
    fn query(&self) -> Result<LinkQuery> {
        let view: LinkView = self.view.parse().map_err(LinkVaultError::InvalidInput)?;
        let search = (!self.keywords.is_empty()).then(|| self.keywords.join(" "));
        Ok(LinkQuery::new(view, search))
    }

    /// Links to show, newest first, capped at `limit`
    pub fn select<'a>(&self, links: &'a [Link]) -> Result<Vec<&'a Link>> {
        let mut selected = self.query()?.apply(links);
        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }
        Ok(selected)
    }
}

impl VaultCommand for ListCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let query = self.query()?;
        let selected = self.select(ctx.store.links())?;

        if selected.is_empty() {
            if query.search.is_some() {
                eprintln!("No links found matching the search criteria.");
            } else {
                let (title, hint) = query.view.empty_state();
                eprintln!("{}", title);
                eprintln!("{}", hint);
            }
            return Ok(());
        }

        print_links(&selected, ctx.no_color);
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsCommand;

impl StatsCommand {
    pub fn render(stats: &LinkStats, no_color: bool) -> String {
        let mut rows = vec![
            ("Total".to_string(), stats.total),
            ("Favorites".to_string(), stats.favorites),
        ];
        rows.extend(
            Category::ALL
                .iter()
                .map(|c| (c.display_name().to_string(), stats.count(*c))),
        );

        rows.iter()
            .map(|(label, count)| {
                if no_color {
                    format!("{:<10} {}", label, count)
                } else {
                    format!("{:<10} {}", label, count.bold())
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl VaultCommand for StatsCommand {
    fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        let stats = LinkStats::from_links(ctx.store.links());
        println!("{}", Self::render(&stats, ctx.no_color));
        Ok(())
    }
}
