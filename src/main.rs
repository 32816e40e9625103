#[cfg(feature = "gui")]
mod cli {
    use std::path::PathBuf;

    use clap::{Parser, ValueEnum};
    use tracing_subscriber::EnvFilter;

    use recipeshelf::gui::{self, Flags, StartPage};

    #[derive(Parser)]
    #[command(name = "recipeshelf")]
    #[command(about = "Browse a recipe catalog, keep a personal shelf, and author new recipes")]
    struct Cli {
        /// Path to the recipe catalog JSON file
        #[arg(long, value_name = "FILE", default_value = "data.json")]
        catalog: PathBuf,

        /// Path to the personal recipe store
        #[arg(long, value_name = "FILE", default_value = "my-recipes.db")]
        store: PathBuf,

        /// Page to open on startup
        #[arg(long, value_enum, default_value = "browse-all")]
        page: PageArg,

        /// Recipe id to show when starting on the detail page
        #[arg(long, value_name = "ID")]
        id: Option<i64>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    }

    #[derive(Debug, Clone, Copy, ValueEnum)]
    enum PageArg {
        BrowseAll,
        MyRecipes,
        AddRecipe,
        Detail,
    }

    pub fn main() -> anyhow::Result<()> {
        let args = Cli::parse();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
        tracing_subscriber::fmt().with_env_filter(filter).init();

        let start_page = match args.page {
            PageArg::BrowseAll => StartPage::BrowseAll,
            PageArg::MyRecipes => StartPage::MyRecipes,
            PageArg::AddRecipe => StartPage::AddRecipe,
            PageArg::Detail => StartPage::Detail(args.id),
        };

        gui::run(Flags {
            catalog_path: args.catalog,
            store_path: args.store,
            start_page,
        })?;
        Ok(())
    }
}

#[cfg(feature = "gui")]
fn main() -> anyhow::Result<()> {
    cli::main()
}

#[cfg(not(feature = "gui"))]
fn main() -> anyhow::Result<()> {
    anyhow::bail!("recipeshelf was built without the `gui` feature")
}
