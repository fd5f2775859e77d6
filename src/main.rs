//! AutoApply command line interface.
//!
//! Drives the fill engine against page snapshots: JSON captures of a form
//! page's element tree. Useful for replaying captured pages and for
//! tuning the matching heuristics offline.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use autoapply_dom::{Page, PageTree};
use autoapply_engine::{handle_request, is_target_url, EngineConfig};
use autoapply_protocols::{Profile, Request};

#[derive(Parser)]
#[command(name = "autoapply", version, about = "Fill job-application form snapshots from a saved profile")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fill a page snapshot from a profile and print the outcome.
    Fill {
        /// Page snapshot JSON.
        #[arg(long)]
        page: PathBuf,
        /// Profile JSON.
        #[arg(long, env = "AUTOAPPLY_PROFILE")]
        profile: PathBuf,
        /// Write the filled snapshot back out.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Detect fillable fields in a page snapshot.
    Detect {
        /// Page snapshot JSON.
        #[arg(long)]
        page: PathBuf,
    },
    /// Check whether a URL belongs to a supported vendor domain.
    Check {
        url: String,
    },
}

fn load_page(path: &Path) -> Result<Arc<Page>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading page snapshot {}", path.display()))?;
    let tree: PageTree = serde_json::from_str(&raw)
        .with_context(|| format!("parsing page snapshot {}", path.display()))?;
    Ok(Page::from_tree(tree))
}

fn load_profile(path: &Path) -> Result<Profile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading profile {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing profile {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Fill { page, profile, out } => {
            let page_handle = load_page(&page)?;
            let user_data = load_profile(&profile)?;
            let request = Request::FillForm { user_data };
            let outcome =
                handle_request(Arc::clone(&page_handle), EngineConfig::default(), request).await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);

            if let Some(out) = out {
                let snapshot = serde_json::to_string_pretty(&*page_handle.tree())?;
                std::fs::write(&out, snapshot)
                    .with_context(|| format!("writing filled snapshot {}", out.display()))?;
                info!(path = %out.display(), "filled snapshot written");
            }
        }
        Command::Detect { page } => {
            let page_handle = load_page(&page)?;
            let outcome =
                handle_request(page_handle, EngineConfig::default(), Request::DetectFields).await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Command::Check { url } => {
            if is_target_url(&url) {
                println!("supported");
            } else {
                println!("unsupported");
                std::process::exit(1);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoapply_dom::ElementNode;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_profile_parses_surface_json() {
        let file = write_temp(r#"{"personal":{"firstName":"Jane","lastName":"Doe"}}"#);
        let profile = load_profile(file.path()).unwrap();
        assert_eq!(
            profile.personal.unwrap().first_name.as_deref(),
            Some("Jane")
        );
    }

    #[test]
    fn test_load_page_round_trips_snapshot() {
        let mut tree = PageTree::new("https://acme.wd5.myworkdayjobs.com/apply");
        tree.attach(ElementNode::text_input("firstName"), None);
        let file = write_temp(&serde_json::to_string(&tree).unwrap());

        let page = load_page(file.path()).unwrap();
        assert!(page.tree().contains("firstName"));
        assert!(is_target_url(&page.url()));
    }

    #[test]
    fn test_load_page_rejects_garbage() {
        let file = write_temp("not json");
        assert!(load_page(file.path()).is_err());
    }
}
