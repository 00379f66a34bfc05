// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use kiosk::{
    AuditLogViewer, AuthExpiryGuard, CollectionController, ConfirmPrompt, DirectoryController,
    FormMode, SessionVerdict,
};
use kiosk_client::ApiClient;
use kiosk_domain::RemoteError;
use kiosk_session::{JsonFileStore, MemoryStore, SessionChannel, SessionEvent, SessionStore};
use std::io::{BufRead, Write as _};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;
use tracing::info;

/// Kiosk Console - interactive admin client for the kiosk catalog backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the kiosk backend.
    #[arg(short, long, default_value = "http://localhost:3000")]
    base_url: String,

    /// Path to the JSON session state file. If not provided, session
    /// state is kept in memory and lost on exit.
    #[arg(short, long)]
    state: Option<PathBuf>,

    /// Seconds between token expiry checks.
    #[arg(short, long, default_value_t = 20)]
    poll_secs: u64,
}

/// Confirmation prompt that reads a `y` line from stdin.
struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        let _ = std::io::stdout().flush();
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y")
    }
}

fn read_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
    line.trim().to_string()
}

struct Console {
    client: ApiClient,
    channel: Arc<SessionChannel>,
    events: broadcast::Receiver<SessionEvent>,
    directory: DirectoryController,
    collection: CollectionController,
    audit: AuditLogViewer,
}

impl Console {
    fn new(base_url: &str, channel: Arc<SessionChannel>) -> Self {
        Self {
            client: ApiClient::new(base_url, Arc::clone(&channel)),
            events: channel.subscribe(),
            directory: DirectoryController::new(Arc::clone(&channel)),
            collection: CollectionController::new(Arc::clone(&channel)),
            audit: AuditLogViewer::new(),
            channel,
        }
    }

    /// Applies every pending session event, so state published by the
    /// background guard or by an earlier command reaches the grid
    /// before the next command runs.
    fn drain_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(event) => self.collection.on_event(&event),
                Err(TryRecvError::Lagged(_)) => self.collection.sync(),
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }

    fn show_message(message: Option<&str>) {
        if let Some(message) = message {
            println!("{message}");
        }
    }

    async fn cmd_login(&self) -> Result<(), RemoteError> {
        let username = read_line("username: ");
        let password = read_line("password: ");
        let response = self.client.login(&username, &password).await?;
        println!(
            "Logged in as {} ({})",
            response.user.full_name,
            response.user.role.as_str()
        );
        Ok(())
    }

    async fn cmd_connections(&mut self) -> Result<(), RemoteError> {
        self.directory.refresh(&self.client).await?;
        for connection in self.directory.connections() {
            let code = connection.local_code.as_deref().unwrap_or("-");
            println!(
                "{:>5}  {:<8}  {:<30}  {}",
                connection.id, code, connection.name, connection.host
            );
        }
        Self::show_message(self.directory.message());
        Ok(())
    }

    async fn cmd_select(&mut self, id: i64) -> Result<(), RemoteError> {
        self.directory.select(&self.client, id).await?;
        self.drain_events();
        Self::show_message(self.directory.message());
        Ok(())
    }

    async fn cmd_code(&mut self, value: &str) -> Result<(), RemoteError> {
        self.directory.lookup_local_code(&self.client, value).await?;
        match self.directory.mode() {
            FormMode::Create => println!("No match; saving will create a new connection"),
            FormMode::Edit { id } => {
                println!("Editing connection {id}: {}", self.directory.form().name);
            }
        }
        Ok(())
    }

    async fn cmd_save(&mut self) -> Result<(), RemoteError> {
        let name = read_line("name (empty keeps current): ");
        if !name.is_empty() {
            self.directory.form_mut().name = name;
        }
        let host = read_line("host (empty keeps current): ");
        if !host.is_empty() {
            self.directory.form_mut().host = host;
        }
        self.directory.save(&self.client).await?;
        Self::show_message(self.directory.message());
        Ok(())
    }

    async fn cmd_delete_connection(&mut self) -> Result<(), RemoteError> {
        self.directory.remove(&self.client).await?;
        Self::show_message(self.directory.message());
        Ok(())
    }

    async fn cmd_load(&mut self) -> Result<(), RemoteError> {
        self.collection.load(&self.client).await?;
        self.print_page();
        Ok(())
    }

    fn print_page(&self) {
        for record in self.collection.current_page() {
            let visible = if record.visible { "web" } else { "   " };
            println!(
                "{:>8}  {}  {:<40}  {}",
                record.code, visible, record.description, record.annotation
            );
        }
        println!(
            "page {}/{} ({} matching)",
            self.collection.page(),
            self.collection.page_count(),
            self.collection.filtered().len()
        );
        Self::show_message(self.collection.message());
    }

    async fn cmd_toggle(&mut self, code: &str) -> Result<(), RemoteError> {
        self.collection
            .toggle_visibility(&self.client, &mut StdinPrompt, code)
            .await?;
        Self::show_message(self.collection.message());
        Ok(())
    }

    async fn cmd_users(&self) -> Result<(), RemoteError> {
        let users = self.client.list_users().await?;
        for user in users {
            println!(
                "{:>5}  {:<16}  {:<24}  {}",
                user.id, user.username, user.full_name, user.role
            );
        }
        Ok(())
    }

    async fn cmd_logs(&mut self, args: &[&str]) -> Result<(), RemoteError> {
        let filter = self.audit.filter_mut();
        filter.date_from = args.first().map(ToString::to_string);
        filter.date_to = args.get(1).map(ToString::to_string);
        filter.user = args.get(2).map(ToString::to_string);
        self.audit.refresh(&self.client).await?;
        for entry in self.audit.entries() {
            println!("{}  {}", entry.created_at, AuditLogViewer::detail_line(entry));
        }
        Self::show_message(self.audit.message());
        Ok(())
    }

    async fn cmd_report(&self, date: &str) -> Result<(), RemoteError> {
        let report = self.client.daily_report(date).await?;
        println!("actions on {date}:");
        for stat in &report.stats {
            println!("{:>6}  {}", stat.actions, stat.username);
        }
        println!("recent:");
        for activity in &report.recent {
            println!(
                "{}  {}  {}",
                activity.timestamp, activity.username, activity.action
            );
        }
        Ok(())
    }

    async fn cmd_export(&self, kind: &str, from: &str, to: &str) -> Result<(), RemoteError> {
        let bytes = self.client.export_report(kind, from, to).await?;
        let path = format!("{kind}-{from}-{to}.xlsx");
        match std::fs::write(&path, &bytes) {
            Ok(()) => println!("Wrote {} bytes to {path}", bytes.len()),
            Err(e) => println!("Could not write {path}: {e}"),
        }
        Ok(())
    }

    fn cmd_logout(&self) {
        self.client.logout();
        println!("Session cleared");
    }

    /// Runs one command line. `Unauthorized` from any command clears
    /// the session before surfacing.
    async fn dispatch(&mut self, line: &str) -> bool {
        self.drain_events();
        let parts: Vec<&str> = line.split_whitespace().collect();
        let result = match parts.as_slice() {
            [] => Ok(()),
            ["quit"] => return false,
            ["help"] => {
                print_help();
                Ok(())
            }
            ["login"] => self.cmd_login().await,
            ["connections"] => self.cmd_connections().await,
            ["select", id] => match id.parse() {
                Ok(id) => self.cmd_select(id).await,
                Err(_) => {
                    println!("usage: select <id>");
                    Ok(())
                }
            },
            ["code", value] => self.cmd_code(value).await,
            ["save"] => self.cmd_save().await,
            ["delete-connection"] => self.cmd_delete_connection().await,
            ["load"] => self.cmd_load().await,
            ["search", rest @ ..] => {
                self.collection.set_search(&rest.join(" "));
                self.print_page();
                Ok(())
            }
            ["page", n] => {
                if let Ok(n) = n.parse::<usize>() {
                    if self.collection.set_page(n) {
                        self.print_page();
                    } else {
                        println!(
                            "page must be between 1 and {}",
                            self.collection.page_count()
                        );
                    }
                } else {
                    println!("usage: page <n>");
                }
                Ok(())
            }
            ["toggle", code] => self.cmd_toggle(code).await,
            ["users"] => self.cmd_users().await,
            ["logs", rest @ ..] => self.cmd_logs(rest).await,
            ["report", date] => self.cmd_report(date).await,
            ["export", kind, from, to] => self.cmd_export(kind, from, to).await,
            ["logout"] => {
                self.cmd_logout();
                Ok(())
            }
            _ => {
                println!("Unknown command; try 'help'");
                Ok(())
            }
        };
        match result {
            Ok(()) => {}
            Err(RemoteError::Unauthorized) => {
                self.channel.clear_session();
                println!("Session expired; please log in again");
            }
            Err(e) => println!("{}", e.user_message()),
        }
        self.drain_events();
        true
    }
}

fn print_help() {
    println!("commands:");
    println!("  login                     authenticate against the backend");
    println!("  connections               list known data sources");
    println!("  select <id>               validate and activate a data source");
    println!("  code <local-code>         look up a data source by store code");
    println!("  save                      create or update the looked-up connection");
    println!("  delete-connection         delete the looked-up connection");
    println!("  load                      load the active source's record collection");
    println!("  search <term>             filter loaded records by code or annotation");
    println!("  page <n>                  show another page of results");
    println!("  toggle <code>             flip one record's web visibility");
    println!("  users                     list user accounts");
    println!("  logs [from] [to] [user]   show the audit log");
    println!("  report <date>             show the daily activity report");
    println!("  export <kind> <from> <to> download a report spreadsheet");
    println!("  logout                    clear the stored session");
    println!("  quit                      exit");
}

fn open_store(state: Option<&PathBuf>) -> Box<dyn SessionStore> {
    state.map_or_else(
        || {
            info!("Using in-memory session state");
            Box::new(MemoryStore::new()) as Box<dyn SessionStore>
        },
        |path| {
            info!(path = %path.display(), "Using file-backed session state");
            Box::new(JsonFileStore::open(path)) as Box<dyn SessionStore>
        },
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing kiosk console");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let channel = Arc::new(SessionChannel::new(open_store(args.state.as_ref())));
    let mut console = Console::new(&args.base_url, Arc::clone(&channel));

    // Background expiry guard. Restarted after each teardown so a
    // fresh login is guarded again.
    let guard_channel = Arc::clone(&channel);
    let poll = Duration::from_secs(args.poll_secs);
    runtime.spawn(async move {
        loop {
            let guard = AuthExpiryGuard::with_interval(Arc::clone(&guard_channel), poll);
            if guard.run().await == SessionVerdict::Idle {
                tokio::time::sleep(poll).await;
            }
        }
    });

    print_help();
    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !runtime.block_on(console.dispatch(line.trim())) {
            break;
        }
    }

    info!("Shutting down");
    Ok(())
}
