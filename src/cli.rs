//! DocVault command line
//!
//! ```bash
//! # List documents, newest first, filtered by name
//! docvault list --search report --sort date-newest
//!
//! # Upload, rename and delete
//! docvault upload ./scan.pdf ./id-card.png
//! docvault rename 1700000000000-scan.pdf passport.pdf
//! docvault delete 1700000000000-passport.pdf
//!
//! # Links and downloads
//! docvault link 1700000000000-scan.pdf --purpose share
//! docvault download 1700000000000-scan.pdf --out ./scan.pdf
//!
//! # Session
//! docvault logout
//! docvault login user-1
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use dv_app::usecases::{RenameOutcome, UploadFile};
use dv_app::DocumentError;
use dv_core::ids::{StorageKey, UserId};
use dv_core::links::LinkPurpose;
use dv_core::profile::ProfileUpdate;
use dv_core::view::SortOption;
use tokio::fs;
use tracing::info_span;
use tracing::Instrument;

use crate::bootstrap::AppRuntime;

/// DocVault - personal document vault
#[derive(Parser, Debug)]
#[command(name = "docvault")]
#[command(about = "Personal document vault on top of object storage")]
#[command(version)]
pub struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = "docvault.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List documents
    List {
        /// Case-insensitive substring of the document name
        #[arg(short, long)]
        search: Option<String>,
        /// name-asc, name-desc, date-newest or date-oldest
        #[arg(long)]
        sort: Option<SortOption>,
    },
    /// Upload one or more files
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Delete a document by storage key
    Delete { key: String },
    /// Rename a document, keeping its storage prefix
    Rename { key: String, name: String },
    /// Issue a signed link for a document
    Link {
        key: String,
        /// preview, download or share
        #[arg(long, default_value = "share")]
        purpose: LinkPurpose,
    },
    /// Download a document through a short-lived link
    Download {
        key: String,
        /// Output path (defaults to the document name)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show or edit the profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Start a session as the given user
    Login { user_id: String },
    /// End the current session
    Logout,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show the profile
    Show,
    /// Update editable profile fields
    Update(ProfileUpdateArgs),
    /// Replace the profile picture
    Picture { file: PathBuf },
}

#[derive(Args, Debug)]
pub struct ProfileUpdateArgs {
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub username: Option<String>,
}

impl From<ProfileUpdateArgs> for ProfileUpdate {
    fn from(args: ProfileUpdateArgs) -> Self {
        Self {
            full_name: args.full_name,
            phone_number: args.phone,
            username: args.username,
        }
    }
}

/// Runs one command against `runtime`.
pub async fn run(command: Commands, runtime: &AppRuntime) -> anyhow::Result<()> {
    match command {
        Commands::List { search, sort } => {
            cmd_list(runtime, search, sort, &mut io::stdout())
                .instrument(info_span!("cli.list"))
                .await
        }
        Commands::Upload { files } => {
            cmd_upload(runtime, files)
                .instrument(info_span!("cli.upload"))
                .await
        }
        Commands::Delete { key } => {
            runtime
                .usecases()
                .delete_document()
                .execute(&StorageKey::from(key))
                .instrument(info_span!("cli.delete"))
                .await?;
            Ok(())
        }
        Commands::Rename { key, name } => {
            let outcome = runtime
                .usecases()
                .rename_document()
                .execute(&StorageKey::from(key), &name)
                .instrument(info_span!("cli.rename"))
                .await?;
            match outcome {
                RenameOutcome::Renamed { to } => println!("{to}"),
                RenameOutcome::Unchanged => println!("Name unchanged"),
            }
            Ok(())
        }
        Commands::Link { key, purpose } => {
            let url = runtime
                .usecases()
                .issue_document_link()
                .execute(&StorageKey::from(key), purpose)
                .instrument(info_span!("cli.link"))
                .await?;
            println!("{url}");
            Ok(())
        }
        Commands::Download { key, out } => {
            cmd_download(runtime, key, out)
                .instrument(info_span!("cli.download"))
                .await
        }
        Commands::Profile { command } => {
            cmd_profile(runtime, command)
                .instrument(info_span!("cli.profile"))
                .await
        }
        Commands::Login { user_id } => {
            let user = UserId::from(user_id);
            runtime
                .usecases()
                .sign_in()
                .execute(user.clone())
                .instrument(info_span!("cli.login"))
                .await?;
            println!("Signed in as {}", user.as_str().trim());
            Ok(())
        }
        Commands::Logout => {
            runtime
                .usecases()
                .sign_out()
                .execute()
                .instrument(info_span!("cli.logout"))
                .await?;
            println!("Signed out");
            Ok(())
        }
    }
}

async fn cmd_list(
    runtime: &AppRuntime,
    search: Option<String>,
    sort: Option<SortOption>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let session = runtime.usecases().document_view();
    // A failed listing leaves an empty view; it is rendered before the
    // error is reported.
    let listing = match session.refresh().await {
        Ok(_) => Ok(()),
        Err(err @ DocumentError::ListingFailed(_)) => Err(err),
        Err(err) => {
            session.close().await;
            return Err(err.into());
        }
    };
    if let Some(query) = search {
        session.set_search_query(query).await;
    }
    if let Some(sort) = sort {
        session.set_sort_option(sort).await;
    }

    let state = session.snapshot().await;
    session.close().await;

    if state.displayed_entries().is_empty() {
        writeln!(out, "No documents found.")?;
    }
    for entry in state.displayed_entries() {
        let size = entry
            .size_bytes
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<40} {:<12} {:>10}  {}  {}",
            entry.display_name(),
            entry.kind().as_str(),
            size,
            entry.created_at.format("%Y-%m-%d %H:%M"),
            entry.storage_key
        )?;
    }
    Ok(listing?)
}

async fn cmd_upload(runtime: &AppRuntime, paths: Vec<PathBuf>) -> anyhow::Result<()> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("not a file name: {}", path.display()))?
            .to_string();
        let bytes = fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        files.push(UploadFile { name, bytes });
    }

    let outcomes = runtime.usecases().upload_documents().execute(files).await?;
    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(key) => println!("{}  ->  {key}", outcome.file_name),
            Err(err) => {
                failed += 1;
                println!("{}  !!  {err}", outcome.file_name);
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} uploads failed", outcomes.len());
    }
    Ok(())
}

async fn cmd_download(
    runtime: &AppRuntime,
    key: String,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let document = runtime
        .usecases()
        .download_document()
        .execute(&StorageKey::from(key))
        .await?;
    let out = out.unwrap_or_else(|| PathBuf::from(&document.file_name));
    fs::write(&out, &document.bytes)
        .await
        .with_context(|| format!("Failed to write {}", out.display()))?;
    println!("{} ({} bytes)", out.display(), document.bytes.len());
    Ok(())
}

async fn cmd_profile(runtime: &AppRuntime, command: ProfileCommand) -> anyhow::Result<()> {
    match command {
        ProfileCommand::Show => {
            let profile = runtime.usecases().get_profile().execute().await?;
            println!("Full name:       {}", profile.full_name);
            println!("Email:           {}", profile.email);
            println!("Phone number:    {}", profile.phone_number);
            println!("Username:        {}", profile.username);
            println!("Aadhaar:         {}", profile.aadhaar);
            println!("Member since:    {}", profile.created_at);
            println!("Profile picture: {}", profile.profile_picture);
        }
        ProfileCommand::Update(args) => {
            runtime
                .usecases()
                .update_profile()
                .execute(args.into())
                .await?;
        }
        ProfileCommand::Picture { file } => {
            let name = file
                .file_name()
                .and_then(|n| n.to_str())
                .with_context(|| format!("not a file name: {}", file.display()))?
                .to_string();
            let bytes = fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let url = runtime
                .usecases()
                .update_profile_picture()
                .execute(&name, bytes)
                .await?;
            println!("{url}");
        }
    }
    Ok(())
}
