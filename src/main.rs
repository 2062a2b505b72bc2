//! Contactbook UI - terminal entry point.
//!
//! Wires the REST store client behind the `ContactStore` trait and drives the
//! add-contact form and the delete confirmation flow from a line-oriented
//! terminal prompt, standing in for the browser form.

use anyhow::Result;
use contactbook_ui::client::{AsyncStoreClient, AsyncStoreClientImpl};
use contactbook_ui::ui::{dialog, ContactListController, DialogGesture, FormField, SubmitOutcome};
use contactbook_ui::{
    Config, ContactForm, ContactStore, LoggingNavigator, Navigator, RestContactStore, StoreClient,
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Print a prompt and read one line from stdin.
fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Run the add-contact form until a submission goes through or the store fails.
async fn run_add_contact_form(
    store: Arc<dyn ContactStore>,
    navigator: Arc<dyn Navigator>,
) -> Result<()> {
    let mut form = ContactForm::new(store, navigator);

    loop {
        println!("\nAdd a New Contact");

        form.set_field(FormField::Name, prompt("Name and Surname")?);
        form.set_field(FormField::Address, prompt("Address")?);
        form.set_field(FormField::Phone, prompt("Phone Number")?);
        if let Some(warning) = form.warning() {
            println!("! {}", warning);
        }
        form.set_field(FormField::Email, prompt("Email Address")?);

        match form.submit().await {
            SubmitOutcome::Rejected => {
                // Warning explains which check failed; re-run the form.
                if let Some(warning) = form.warning() {
                    println!("! {}", warning);
                }
            }
            SubmitOutcome::Completed => {
                println!("Contact saved.");
                return Ok(());
            }
            SubmitOutcome::CreateFailed(e) => {
                error!("Contact could not be saved: {}", e);
                return Err(e.into());
            }
            SubmitOutcome::RefreshFailed(e) => {
                // The contact was saved; only the list reload failed.
                println!("Contact saved.");
                error!("Contact list refresh failed: {}", e);
                return Ok(());
            }
        }
    }
}

/// Show the contact list and offer the delete confirmation flow.
async fn run_contact_list(store: Arc<dyn ContactStore>) -> Result<()> {
    let mut list = ContactListController::new(store);
    list.refresh().await?;

    println!("\nContacts");
    for contact in list.contacts() {
        println!("  [{}] {} <{}>", contact.id, contact.name, contact.email);
    }

    let target = prompt("\nContact id to delete (blank to quit)")?;
    if target.is_empty() {
        return Ok(());
    }

    list.request_delete(target);

    println!("\n{}", dialog::DIALOG_TITLE);
    println!("{}", dialog::DIALOG_BODY);
    let answer = prompt(&format!(
        "{} / {}",
        dialog::CONFIRM_LABEL,
        dialog::CANCEL_LABEL
    ))?;

    let gesture = if answer.eq_ignore_ascii_case(dialog::CONFIRM_LABEL) {
        DialogGesture::Yes
    } else {
        DialogGesture::No
    };

    list.handle_dialog(gesture).await?;

    println!("\nContacts");
    for contact in list.contacts() {
        println!("  [{}] {} <{}>", contact.id, contact.name, contact.email);
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging on stderr so prompts on stdout stay readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Contact store API URL: {}", config.api_base_url);

    // Wire the store client behind the collaborator traits
    let sync_client = StoreClient::new(&config);
    let client = Arc::new(AsyncStoreClientImpl::new(sync_client)) as Arc<dyn AsyncStoreClient>;
    let store =
        Arc::new(RestContactStore::new(client, config.list_page_size)) as Arc<dyn ContactStore>;
    let navigator = Arc::new(LoggingNavigator) as Arc<dyn Navigator>;

    run_add_contact_form(store.clone(), navigator).await?;
    run_contact_list(store).await?;

    Ok(())
}
