use crate::models::Property;
use crate::sync::{FormMode, PropertyListSynchronizer};
use crate::view::{render_table, ConfirmPrompt, TableView};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::error;

/// Table view that prints the rendered table to stdout.
pub struct TerminalTable;

impl TableView for TerminalTable {
    fn replace_rows(&mut self, rows: &[Property]) {
        print!("{}", render_table(rows));
    }
}

/// Confirmation prompt reading a yes/no answer from stdin.
pub struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }

        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

const HELP: &str = "Commands:
  list                      reload and show the property table
  edit <id>                 load a property into the form
  delete <id>               delete a property (asks for confirmation)
  set <field> <value>       set a form field (address, price, size, description)
  form                      show the form buffer and its mode
  submit                    create or update, depending on the form id
  reset                     clear the form
  help                      show this help
  quit                      exit";

/// Interactive command loop. One initial list load, then one command at a
/// time; failures are printed to the user rather than aborting the loop.
pub async fn run(mut sync: PropertyListSynchronizer<TerminalTable, StdinPrompt>) -> Result<()> {
    if let Err(err) = sync.load_properties().await {
        error!("Initial load failed: {:#}", err);
        println!("Could not load properties: {:#}", err);
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if matches!(line, "quit" | "exit") {
            break;
        }

        if let Err(err) = dispatch(&mut sync, line).await {
            error!("Command '{}' failed: {:#}", line, err);
            println!("Error: {:#}", err);
        }
    }

    Ok(())
}

async fn dispatch(
    sync: &mut PropertyListSynchronizer<TerminalTable, StdinPrompt>,
    line: &str,
) -> Result<()> {
    let mut parts = line.splitn(3, char::is_whitespace);
    let command = parts.next().unwrap_or_default();

    match command {
        "list" => sync.load_properties().await,
        "edit" => {
            let id = parse_id(parts.next())?;
            sync.edit_property(id).await?;
            print_form(sync);
            Ok(())
        }
        "delete" => {
            let id = parse_id(parts.next())?;
            sync.delete_property(id).await
        }
        "set" => {
            let field = parts
                .next()
                .ok_or_else(|| anyhow::anyhow!("Usage: set <field> <value>"))?;
            let value = parts.next().unwrap_or_default().trim();
            sync.form_mut().set_field(field, value)
        }
        "form" => {
            print_form(sync);
            Ok(())
        }
        "submit" => sync.submit().await,
        "reset" => {
            sync.reset_form();
            Ok(())
        }
        "help" => {
            println!("{}", HELP);
            Ok(())
        }
        other => {
            println!("Unknown command '{}'. Try 'help'.", other);
            Ok(())
        }
    }
}

fn parse_id(arg: Option<&str>) -> Result<i64> {
    let arg = arg.ok_or_else(|| anyhow::anyhow!("Missing property id"))?;
    arg.trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid property id: '{}'", arg))
}

fn print_form(sync: &PropertyListSynchronizer<TerminalTable, StdinPrompt>) {
    let form = sync.form();
    let mode = match form.mode() {
        FormMode::Create => "create".to_string(),
        FormMode::Edit => format!(
            "edit (id {})",
            form.property_id().unwrap_or_default()
        ),
    };

    println!("Form [{}]", mode);
    println!("  address:     {}", form.address);
    println!("  price:       {}", form.price);
    println!("  size:        {}", form.size);
    println!("  description: {}", form.description);
}
