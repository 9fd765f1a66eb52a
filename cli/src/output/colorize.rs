use crate::commands::helpers::SHORT_ID_LEN;
use linkvault::models::{Category, Link};
use linkvault::utils::{extract_domain, format_date, truncate_text};
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
    fn to_plain(&self) -> String;
}

pub struct ColorizeLink<'a>(pub &'a Link);

impl ColorizeLink<'_> {
    fn short_id(&self) -> &str {
        let id = self.0.id.as_str();
        id.char_indices()
            .nth(SHORT_ID_LEN)
            .map(|(i, _)| &id[..i])
            .unwrap_or(id)
    }

    fn star(&self) -> &'static str {
        if self.0.favorite {
            "★"
        } else {
            "☆"
        }
    }

    fn description(&self) -> Option<String> {
        let desc = self.0.description.trim();
        (!desc.is_empty()).then(|| truncate_text(desc, 100))
    }

    fn footer(&self) -> String {
        format!(
            "{} · {} · {}",
            self.0.category,
            extract_domain(&self.0.url),
            format_date(&self.0.created_at)
        )
    }
}

impl Colorize for ColorizeLink<'_> {
    fn to_colored(&self) -> String {
        let mut s = String::new();
        let id = self.short_id();
        let star = if self.0.favorite {
            self.star().yellow().to_string()
        } else {
            self.star().to_string()
        };
        s.push_str(&format!(
            "{}. {} {}\n",
            id.bright_blue(),
            star,
            self.0.title.bold().green(),
        ));
        let padding = id.len() + 3;
        s.push_str(&format!(
            "{:>padding$} {}\n",
            ">".red(),
            self.0.url.yellow()
        ));

        if let Some(desc) = self.description() {
            s.push_str(&format!("{:>padding$} {}\n", "+".red(), desc));
        }

        let footer = self.footer();
        let footer = match self.0.category {
            Category::Learning => footer.cyan().to_string(),
            Category::Work => footer.magenta().to_string(),
            Category::Personal => footer.blue().to_string(),
        };
        s.push_str(&format!("{:>padding$} {}\n", "#".red(), footer));
        s
    }

    fn to_plain(&self) -> String {
        let mut s = String::new();
        let id = self.short_id();
        s.push_str(&format!("{}. {} {}\n", id, self.star(), self.0.title));
        let padding = id.len() + 3;
        s.push_str(&format!("{:>padding$} {}\n", ">", self.0.url));
        if let Some(desc) = self.description() {
            s.push_str(&format!("{:>padding$} {}\n", "+", desc));
        }
        s.push_str(&format!("{:>padding$} {}\n", "#", self.footer()));
        s
    }
}
