//! Command-line interface: global options plus headless subcommands.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::api::HttpPostsApi;
use crate::config::Config;
use crate::controller::Session;
use crate::posts::{Post, PostDraft, PostId};
use crate::ui::post_item::PostItem;

#[derive(Debug, Parser)]
#[command(name = "postboard", version, about = "Browse and edit posts on a posts REST service")]
pub struct Cli {
    /// Service root URL; posts are served at <URL>/posts (overrides config)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print every post, newest first as served
    List,
    /// Create a post
    Add {
        #[arg(long)]
        author: String,
        #[arg(long)]
        body: String,
    },
    /// Replace the author and body of an existing post
    Edit {
        id: PostId,
        #[arg(long)]
        author: String,
        #[arg(long)]
        body: String,
    },
    /// Delete a post
    Delete { id: PostId },
}

impl Cli {
    /// Resolve configuration: explicit file or default location, then flags.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
            config.validate()?;
        }
        Ok(config)
    }
}

/// Run one headless command, writing results to `out`.
pub async fn run_command(
    config: &Config,
    command: Command,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let api = HttpPostsApi::new(&config.api)?;
    let mut session = Session::new(api);

    match command {
        Command::List => {
            session.list().await?;
            let posts = session.state().posts();
            if posts.is_empty() {
                writeln!(out, "No posts yet.")?;
            }
            for post in posts {
                writeln!(out, "{}", PostItem::new(post).summary())?;
            }
        }
        Command::Add { author, body } => {
            session.create(PostDraft::new(author, body)).await?;
            let created = session
                .state()
                .posts()
                .first()
                .context("created post missing from collection")?;
            writeln!(out, "Created {}", PostItem::new(created).summary())?;
        }
        Command::Edit { id, author, body } => {
            let post = Post {
                id: id.clone(),
                author,
                body,
            };
            session.save_edit(post).await?;
            writeln!(out, "Updated post #{}", id)?;
        }
        Command::Delete { id } => {
            session.delete(id.clone()).await?;
            writeln!(out, "Deleted post #{}", id)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_options_without_subcommand() {
        let cli = Cli::try_parse_from(["postboard", "--base-url", "http://h:1"]).unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://h:1"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_edit_with_numeric_id() {
        let cli = Cli::try_parse_from([
            "postboard", "edit", "2", "--author", "X", "--body", "Y",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Edit { id, author, body }) => {
                assert_eq!(id, PostId::Number(2));
                assert_eq!(author, "X");
                assert_eq!(body, "Y");
            }
            other => panic!("expected Edit, got {:?}", other),
        }
    }

    #[test]
    fn add_accepts_empty_fields() {
        let cli =
            Cli::try_parse_from(["postboard", "add", "--author", "", "--body", ""]).unwrap();
        assert!(matches!(cli.command, Some(Command::Add { .. })));
    }

    #[test]
    fn base_url_flag_is_validated() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();
        let cli = Cli::try_parse_from([
            "postboard",
            "--config",
            path.to_str().unwrap(),
            "--base-url",
            "ftp://example.com",
        ])
        .unwrap();
        assert!(cli.load_config().is_err());
    }
}
