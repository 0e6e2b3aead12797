use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use catalog_app::controllers::{
    CreateController, EditController, EditView, Field, ListController, Navigation,
};
use catalog_kernel::settings::Settings;
use catalog_store::{BookId, BookStore};
use clap::{Args, Parser, Subcommand};

mod render;

/// Manage a personal book collection stored behind a REST API.
#[derive(Debug, Parser)]
#[command(name = "catalog", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every book in the collection
    List,
    /// Show one book
    Show { id: BookId },
    /// Add a new book
    Add(AddArgs),
    /// Change fields of an existing book
    Edit {
        id: BookId,
        #[command(flatten)]
        changes: EditArgs,
    },
    /// Delete a book after confirmation
    Delete {
        id: BookId,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Run the web front-end
    Serve,
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(long, default_value = "")]
    title: String,
    #[arg(long, default_value = "")]
    author: String,
    /// Publication year, 1000-2100
    #[arg(long, default_value = "")]
    year: String,
    #[arg(long, default_value = "")]
    isbn: String,
}

#[derive(Debug, Args)]
struct EditArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    author: Option<String>,
    /// Publication year, 1000-2100
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    isbn: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load catalog settings")?;
    catalog_telemetry::init(&settings.telemetry)?;
    tracing::debug!(env = ?settings.environment, api = %settings.api.base_url, "catalog cli starting");

    let store = catalog_app::store_from_settings(&settings);

    match cli.command {
        Command::List => list(store).await,
        Command::Show { id } => show(store, id).await,
        Command::Add(args) => add(store, args).await,
        Command::Edit { id, changes } => edit(store, id, changes).await,
        Command::Delete { id, yes } => delete(store, id, yes).await,
        Command::Serve => catalog_app::serve(&settings).await,
    }
}

async fn list(store: Arc<dyn BookStore>) -> anyhow::Result<()> {
    let mut list = ListController::new(store);
    list.load().await;

    if let Some(message) = list.error() {
        eprintln!("Run `catalog list` to try again.");
        bail!("{message}");
    }
    print!("{}", render::list(&list));
    Ok(())
}

async fn show(store: Arc<dyn BookStore>, id: BookId) -> anyhow::Result<()> {
    let mut form = EditController::new(store, id);
    form.load().await;

    match form.view() {
        EditView::Form { draft, .. } => {
            print!("{}", render::draft(id, draft));
            Ok(())
        }
        EditView::LoadFailed { message } => Err(anyhow!("{message}")),
        EditView::Loading => Err(anyhow!("book {id} did not load")),
    }
}

async fn add(store: Arc<dyn BookStore>, args: AddArgs) -> anyhow::Result<()> {
    let mut form = CreateController::new(store);
    form.set_field(Field::Title, args.title);
    form.set_field(Field::Author, args.author);
    form.set_field(Field::PublicationYear, args.year);
    form.set_field(Field::Isbn, args.isbn);

    match form.submit().await {
        Navigation::Collection => {
            println!("Book added.");
            Ok(())
        }
        Navigation::Stay => Err(anyhow!("{}", form.error().unwrap_or("Failed to create book"))),
    }
}

async fn edit(store: Arc<dyn BookStore>, id: BookId, changes: EditArgs) -> anyhow::Result<()> {
    let mut form = EditController::new(store, id);
    form.load().await;
    if !form.is_editing() {
        eprintln!("Run `catalog list` to see the collection.");
        bail!("{}", form.error().unwrap_or("Failed to load book details."));
    }

    let updates = [
        (Field::Title, changes.title),
        (Field::Author, changes.author),
        (Field::PublicationYear, changes.year),
        (Field::Isbn, changes.isbn),
    ];
    for (field, value) in updates {
        if let Some(value) = value {
            form.set_field(field, value);
        }
    }

    match form.submit().await {
        Navigation::Collection => {
            println!("Book {id} updated.");
            Ok(())
        }
        Navigation::Stay => Err(anyhow!("{}", form.error().unwrap_or("Failed to update book"))),
    }
}

async fn delete(store: Arc<dyn BookStore>, id: BookId, yes: bool) -> anyhow::Result<()> {
    let mut list = ListController::new(store);
    list.load().await;
    if let Some(message) = list.error() {
        bail!("{message}");
    }

    let Some(book) = list.request_delete(id) else {
        bail!("Book {id} is not in the collection");
    };
    let prompt = format!(
        "Are you sure you want to delete this book? \"{}\" by {} [y/N] ",
        book.title, book.author
    );

    let confirmed = yes || confirm(&prompt, &mut io::stdin().lock(), &mut io::stdout())?;
    if !confirmed {
        list.cancel_delete();
        println!("Deletion cancelled.");
        return Ok(());
    }

    if list.confirm_delete().await {
        println!("Book {id} deleted. {}", list.summary());
        Ok(())
    } else {
        Err(anyhow!("{}", list.error().unwrap_or("Failed to delete book")))
    }
}

/// Ask a yes/no question; anything other than `y`/`yes` is a no.
fn confirm(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
