use clap::{Parser, Subcommand};
use folio::catalog::Catalog;
use folio::config::{self, GalleryConfig};
use folio::facets::Facets;
use folio::lightbox::{self, Viewer};
use folio::output;
use folio::render::{self, PageState};
use folio::search::SearchEngine;
use folio::theme::{self, FileThemeStore, Theme, ThemeStore};
use folio::view::{Action, SessionState};
use std::collections::BTreeSet;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Selection flags shared by the commands that show a view.
#[derive(clap::Args, Clone)]
struct SelectionArgs {
    /// Search text
    #[arg(short, long)]
    query: Option<String>,

    /// Category to include (repeatable; any match)
    #[arg(short, long = "category")]
    categories: Vec<String>,

    /// Tag to include (repeatable; any match)
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Pages to reveal
    #[arg(long, default_value_t = 1)]
    pages: usize,
}

impl SelectionArgs {
    /// Replay the flags as session actions.
    fn session(&self, page_size: usize) -> SessionState {
        let mut state = SessionState::new(page_size);
        let categories: BTreeSet<&String> = self.categories.iter().collect();
        let tags: BTreeSet<&String> = self.tags.iter().collect();
        for category in categories {
            state.apply(Action::ToggleCategory(category.clone()));
        }
        for tag in tags {
            state.apply(Action::ToggleTag(tag.clone()));
        }
        if let Some(query) = &self.query {
            state.apply(Action::SetQuery(query.clone()));
        }
        for _ in 1..self.pages {
            state.apply(Action::LoadMore);
        }
        state
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse an artwork portfolio from the terminal")]
#[command(long_about = "\
Browse an artwork portfolio from the terminal

The dataset is a JSON array of artwork records:

  [
    {
      \"id\": \"1\",
      \"title\": \"Grandmother\",
      \"description\": \"Charcoal study\",
      \"imagePath\": \"/images/grandmother.jpg\",
      \"category\": \"Drawing\",
      \"tags\": [\"portrait\", \"charcoal\"],
      \"date\": \"2024-02-11\"
    }
  ]

Filters: categories match if any selected category matches, tags likewise,
and both must hold when both are set. Search is typo tolerant and ranks
title hits above description, category and tag hits.

Set RUST_LOG=debug to see search and pagination events.
Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory holding config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Dataset file (overrides data_path from config.toml)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Directory for the saved theme preference
    #[arg(long, default_value = ".folio", global = true)]
    state_dir: PathBuf,

    /// Treat the system color scheme as dark
    #[arg(long, global = true)]
    prefers_dark: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the current view
    List(SelectionArgs),
    /// Print the category and tag lists
    Facets {
        /// Show every tag instead of the preview
        #[arg(long)]
        all: bool,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Interactive session on stdin (type 'help' for commands)
    Browse,
    /// Write an HTML snapshot of the view
    Render {
        /// Output file
        #[arg(long, default_value = "gallery.html")]
        out: PathBuf,
        /// Show every tag instead of the preview
        #[arg(long)]
        all_tags: bool,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Validate the dataset without browsing
    Check,
    /// Show or change the light/dark preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the active theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Save an explicit preference
    Set { theme: Theme },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let store = FileThemeStore::new(&cli.state_dir);

    match &cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Theme { action } => match action {
            ThemeAction::Show => {
                println!("{}", theme::resolve_theme(&store, cli.prefers_dark));
            }
            ThemeAction::Toggle => {
                println!("{}", theme::toggle_theme(&store, cli.prefers_dark)?);
            }
            ThemeAction::Set { theme } => {
                store.save(*theme)?;
                println!("{}", theme);
            }
        },
        Command::Check => {
            let config = config::load_config(&cli.config_dir)?;
            let data = data_path(&cli, &config);
            println!("==> Checking {}", data.display());
            let (_, report) = Catalog::load(&data)?;
            output::print_check(&report);
            if report.is_clean() {
                println!("==> Dataset is valid");
            }
        }
        Command::List(selection) => {
            let (config, catalog) = load(&cli)?;
            let engine = SearchEngine::new(&config.search);
            let state = selection.session(config.pagination.page_size);
            let view = state.view(catalog.items(), &engine);
            output::print_view(&view, state.selection(), catalog.len());
        }
        Command::Facets { all, selection } => {
            let (config, catalog) = load(&cli)?;
            let state = selection.session(config.pagination.page_size);
            let facets = Facets::from_items(catalog.items());
            output::print_facets(&facets, state.selection(), config.facets.tag_preview, *all);
        }
        Command::Render {
            out,
            all_tags,
            selection,
        } => {
            let (config, catalog) = load(&cli)?;
            let engine = SearchEngine::new(&config.search);
            let state = selection.session(config.pagination.page_size);
            let view = state.view(catalog.items(), &engine);
            let facets = Facets::from_items(catalog.items());
            let page = PageState {
                view: &view,
                selection: state.selection(),
                facets: &facets,
                catalog_total: catalog.len(),
                show_all_tags: *all_tags,
            };
            let theme = theme::resolve_theme(&store, cli.prefers_dark);
            let html = render::render_page(&page, &config, theme);
            std::fs::write(out, html.into_string())?;
            println!("Wrote {}", out.display());
        }
        Command::Browse => {
            let (config, catalog) = load(&cli)?;
            browse(&config, &catalog)?;
        }
    }

    Ok(())
}

fn data_path(cli: &Cli, config: &GalleryConfig) -> PathBuf {
    cli.data
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data_path))
}

fn load(cli: &Cli) -> Result<(GalleryConfig, Catalog), Box<dyn std::error::Error>> {
    let config = config::load_config(&cli.config_dir)?;
    let (catalog, _) = Catalog::load(&data_path(cli, &config))?;
    Ok((config, catalog))
}

// ============================================================================
// Interactive session
// ============================================================================

const BROWSE_HELP: &str = "\
Commands:
  search <text>   set the search query (empty clears it)
  cat <name>      toggle a category
  tag <name>      toggle a tag
  clear           clear categories, tags and search
  more            load more results
  facets          show categories and tags
  open <n>        open result n in the lightbox
  next / prev     step through the lightbox
  close           close the lightbox
  quit";

/// One parsed line of `browse` input.
#[derive(Debug, PartialEq, Eq)]
enum BrowseCommand {
    Act(Action),
    Open(usize),
    Next,
    Prev,
    Facets,
    Help,
    Quit,
}

impl BrowseCommand {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        let command = match word {
            "search" => BrowseCommand::Act(Action::SetQuery(rest.to_string())),
            "cat" | "tag" if rest.is_empty() => return Err(format!("usage: {word} <name>")),
            "cat" => BrowseCommand::Act(Action::ToggleCategory(rest.to_string())),
            "tag" => BrowseCommand::Act(Action::ToggleTag(rest.to_string())),
            "clear" => BrowseCommand::Act(Action::ClearFilters),
            "more" => BrowseCommand::Act(Action::LoadMore),
            "close" => BrowseCommand::Act(Action::CloseLightbox),
            "open" => match rest.parse::<usize>() {
                Ok(n) if n > 0 => BrowseCommand::Open(n),
                _ => return Err("usage: open <n> (n from the listing)".to_string()),
            },
            "next" => BrowseCommand::Next,
            "prev" => BrowseCommand::Prev,
            "facets" => BrowseCommand::Facets,
            "help" | "?" => BrowseCommand::Help,
            "quit" | "exit" => BrowseCommand::Quit,
            other => return Err(format!("unknown command '{other}' (try 'help')")),
        };
        Ok(command)
    }
}

fn browse(config: &GalleryConfig, catalog: &Catalog) -> io::Result<()> {
    let engine = SearchEngine::new(&config.search);
    let facets = Facets::from_items(catalog.items());
    let mut state = SessionState::new(config.pagination.page_size);
    let mut viewer: Option<Viewer> = None;

    let show = |state: &SessionState| {
        let view = state.view(catalog.items(), &engine);
        output::print_view(&view, state.selection(), catalog.len());
    };
    show(&state);

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match BrowseCommand::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                eprintln!("{msg}");
                continue;
            }
        };

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => println!("{BROWSE_HELP}"),
            BrowseCommand::Facets => output::print_facets(
                &facets,
                state.selection(),
                config.facets.tag_preview,
                false,
            ),
            BrowseCommand::Act(action) => {
                state.apply(action);
                if state.lightbox().is_none() {
                    viewer = None;
                }
                show(&state);
            }
            BrowseCommand::Open(n) => {
                let view = state.view(catalog.items(), &engine);
                if n > view.displayed().len() || !state.open(&view, n - 1) {
                    eprintln!("no result {n} on screen");
                    continue;
                }
                viewer = Viewer::open(lightbox::slides(view.filtered()), n - 1);
                if let Some(v) = &viewer {
                    output::print_slide(v);
                }
            }
            BrowseCommand::Next => step(viewer.as_mut(), &mut state, Viewer::next),
            BrowseCommand::Prev => step(viewer.as_mut(), &mut state, Viewer::prev),
        }
    }

    Ok(())
}

/// Move an open viewer one slide and keep the session index in step.
fn step(viewer: Option<&mut Viewer>, state: &mut SessionState, advance: fn(&mut Viewer) -> bool) {
    match viewer {
        Some(v) => {
            if advance(v) {
                state.apply(Action::OpenItem(v.index()));
            }
            output::print_slide(v);
        }
        None => eprintln!("lightbox is closed (use 'open <n>')"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filter_commands() {
        assert_eq!(
            BrowseCommand::parse("search  cracked mirror ").unwrap(),
            BrowseCommand::Act(Action::SetQuery("cracked mirror".into()))
        );
        assert_eq!(
            BrowseCommand::parse("cat Digital Art").unwrap(),
            BrowseCommand::Act(Action::ToggleCategory("Digital Art".into()))
        );
        assert_eq!(
            BrowseCommand::parse("search").unwrap(),
            BrowseCommand::Act(Action::SetQuery(String::new()))
        );
    }

    #[test]
    fn parses_lightbox_commands() {
        assert_eq!(BrowseCommand::parse("open 3").unwrap(), BrowseCommand::Open(3));
        assert_eq!(BrowseCommand::parse("next").unwrap(), BrowseCommand::Next);
        assert!(BrowseCommand::parse("open 0").is_err());
        assert!(BrowseCommand::parse("open x").is_err());
    }

    #[test]
    fn rejects_unknown_and_incomplete() {
        assert!(BrowseCommand::parse("tag").is_err());
        assert!(BrowseCommand::parse("dance").is_err());
    }

    #[test]
    fn selection_flags_replay_as_actions() {
        let args = SelectionArgs {
            query: Some("fox".into()),
            categories: vec!["Drawing".into(), "Drawing".into()],
            tags: vec!["ink".into()],
            pages: 3,
        };
        let state = args.session(8);
        assert!(state.selection().categories.contains("Drawing"));
        assert!(state.selection().tags.contains("ink"));
        assert_eq!(state.selection().search_query, "fox");
        assert_eq!(state.pagination().items_to_show(), 24);
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
