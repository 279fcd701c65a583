mod actions;
mod error;
mod listing;
mod paths;
mod render;

use std::fs;
use std::fs::File;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use log::debug;
use log::info;
use log::warn;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use crm_lib::auth::LoginFlow;
use crm_lib::auth::Role;
use crm_lib::auth::Session;
use crm_lib::directory::AGENT_ENTITY;
use crm_lib::directory::ClientFilter;
use crm_lib::directory::ClientStatus;
use crm_lib::directory::DuplicateThreshold;
use crm_lib::directory::MockDirectory;
use crm_lib::directory::NoteType;
use crm_lib::directory::Priority;
use crm_lib::directory::RecordSource;
use crm_lib::forms::VisitNoteForm;
use crm_lib::model::Record;
use crm_lib::nav::Resolution;
use crm_lib::nav::Route;
use crm_lib::nav::resolve;
use crm_lib::settings::CrmConfig;
use crm_lib::settings::LatencySettings;
use crm_lib::settings::SettingsProvider;

use actions::ActionQueue;
use error::CliError;
use listing::Listing;

#[derive(Parser)]
#[command(name = "crm", about = "Browse CRM records from the terminal")]
struct Cli {
    /// Account email; addresses containing "admin" sign in as admin
    #[arg(long, default_value = "agent@company.com")]
    email: String,

    #[arg(long, default_value = "password")]
    password: String,

    /// One-time password, any non-empty value is accepted
    #[arg(long, default_value = "123456")]
    otp: String,

    /// Skip the simulated network latency
    #[arg(long)]
    no_delay: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List clients; agents only see their own
    Clients {
        #[command(flatten)]
        table: TableArgs,

        #[command(flatten)]
        filters: ClientFilterArgs,
    },
    /// List agents (admins only)
    Agents {
        #[command(flatten)]
        table: TableArgs,
    },
    /// List visit notes
    Notes {
        #[command(flatten)]
        table: TableArgs,
    },
    /// List likely duplicate clients (admins only)
    Duplicates {
        #[command(flatten)]
        table: TableArgs,

        /// Detection threshold: high, medium or all
        #[arg(long, default_value = "high")]
        threshold: String,
    },
    /// Record a visit note for one of your clients
    AddNote {
        /// Client id
        #[arg(long)]
        client: Option<i32>,

        /// Visit type: phone, meeting, email, visit or other
        #[arg(long = "type", default_value = "phone")]
        note_type: String,

        /// Duration in minutes
        #[arg(long)]
        duration: Option<i32>,

        /// Note text
        content: Vec<String>,
    },
}

#[derive(Args)]
struct ClientFilterArgs {
    /// Only clients in this status (lead, prospect, client, inactive)
    #[arg(long)]
    status: Option<String>,

    /// Only clients assigned to this agent (admins only)
    #[arg(long)]
    agent: Option<String>,

    /// Only clients from this lead source, e.g. "Referral"
    #[arg(long)]
    source: Option<String>,

    /// Only clients in this industry, e.g. "Technology"
    #[arg(long)]
    industry: Option<String>,

    /// Only clients with this priority (low, medium, high)
    #[arg(long)]
    priority: Option<String>,
}

#[derive(Args)]
struct TableArgs {
    /// Free-text search over every field
    #[arg(short, long, default_value = "")]
    search: String,

    /// Column key to sort by
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    desc: bool,

    /// 1-based page number
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Rows per page
    #[arg(long)]
    per_page: Option<usize>,

    /// Activate the row at this 0-based position of the shown page
    #[arg(long)]
    select: Option<usize>,

    /// Run this row action on the selected row instead
    #[arg(long, requires = "select")]
    action: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, Config::default(), file);
        }
        Err(e) => eprintln!("warning: no log file at {}: {}", path.display(), e),
    }
}

/// Where a listing's rows come from, kept so they can be reloaded.
enum RowSource {
    Clients(ClientFilter),
    Agents,
    Notes,
    Duplicates(DuplicateThreshold),
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = SettingsProvider::in_memory();
    let mut config: CrmConfig = settings.config().await?;
    if cli.no_delay {
        config.latency = LatencySettings::none();
    }
    debug!("config: {:?}", config);

    let session = login(&cli, &config).await?;
    let directory = MockDirectory::with_delay(config.latency.fetch);

    let (listing, source, args) = match cli.command {
        Command::AddNote {
            client,
            note_type,
            duration,
            content,
        } => {
            let note_type = NoteType::parse(&note_type).ok_or(CliError::UnknownValue {
                kind: "visit type",
                value: note_type,
                expected: "phone, meeting, email, visit or other",
            })?;
            let form = VisitNoteForm {
                client_id: client,
                note_type,
                content: content.join(" "),
                duration_minutes: duration,
            };
            return add_note(&directory, &session, form).await;
        }
        Command::Clients { table, filters } => (
            Listing::Clients,
            RowSource::Clients(client_filter(&session, filters)?),
            table,
        ),
        Command::Agents { table } => (Listing::Agents, RowSource::Agents, table),
        Command::Notes { table } => (Listing::Notes, RowSource::Notes, table),
        Command::Duplicates { table, threshold } => {
            let threshold = DuplicateThreshold::parse(&threshold).ok_or(CliError::UnknownValue {
                kind: "threshold",
                value: threshold,
                expected: "high, medium or all",
            })?;
            (Listing::Duplicates, RowSource::Duplicates(threshold), table)
        }
    };
    authorize(&session, listing.route(session.role()))?;

    let per_page = args.per_page.unwrap_or(config.table.items_per_page);
    show(&directory, &session, listing, &source, &args, per_page).await
}

async fn login(cli: &Cli, config: &CrmConfig) -> Result<Session, CliError> {
    let pending = LoginFlow::with_delay(config.latency.login)
        .submit_credentials(&cli.email, &cli.password)
        .await?;
    eprintln!("OTP sent to {}", pending.email());
    let session = pending.verify(&cli.otp).await?;
    eprintln!(
        "Signed in as {} ({})",
        session.user().name,
        session.role()
    );
    Ok(session)
}

/// Fail unless the session's role may open `route`.
fn authorize(session: &Session, route: Route) -> Result<(), CliError> {
    match resolve(Some(session), route.path()) {
        Resolution::Allow(_) => Ok(()),
        _ => Err(CliError::Forbidden {
            role: session.role(),
            page: route.label(),
        }),
    }
}

fn client_filter(session: &Session, args: ClientFilterArgs) -> Result<ClientFilter, CliError> {
    let status = match args.status {
        Some(s) => Some(ClientStatus::parse(&s).ok_or(CliError::UnknownValue {
            kind: "client status",
            value: s,
            expected: "lead, prospect, client or inactive",
        })?),
        None => None,
    };
    let priority = match args.priority {
        Some(p) => Some(Priority::parse(&p).ok_or(CliError::UnknownValue {
            kind: "priority",
            value: p,
            expected: "low, medium or high",
        })?),
        None => None,
    };
    let agent = match session.role() {
        Role::Admin => args.agent,
        Role::Agent => {
            if args.agent.is_some() {
                warn!("--agent ignored for agent accounts");
            }
            Some(session.user().name.clone())
        }
    };
    Ok(ClientFilter {
        status,
        agent,
        source: args.source,
        industry: args.industry,
        priority,
    })
}

async fn load(
    directory: &MockDirectory,
    session: &Session,
    source: &RowSource,
) -> Result<Vec<Record>, CliError> {
    Ok(match source {
        RowSource::Clients(filter) => directory.clients(filter).await,
        RowSource::Agents => directory.fetch(AGENT_ENTITY).await?,
        RowSource::Notes => directory.visit_notes_for(session).await,
        RowSource::Duplicates(threshold) => directory.duplicates(*threshold).await,
    })
}

async fn add_note(
    directory: &MockDirectory,
    session: &Session,
    form: VisitNoteForm,
) -> Result<(), CliError> {
    authorize(session, Route::VisitNotes)?;
    let note = directory.add_visit_note(session, form).await?;
    println!(
        "Visit note {} saved for {} ({}, {})",
        note.id, note.client_name, note.note_type, note.date
    );
    Ok(())
}

async fn show(
    directory: &MockDirectory,
    session: &Session,
    listing: Listing,
    source: &RowSource,
    args: &TableArgs,
    per_page: usize,
) -> Result<(), CliError> {
    let role = session.role();
    let rows = load(directory, session, source).await?;
    info!("{} rows loaded for {}", rows.len(), listing.route(role).path());

    let queue = ActionQueue::new();
    let mut table = listing.table(per_page, role, &queue);

    if let Some(key) = &args.sort {
        if !table.click_header(key) {
            return Err(CliError::NotSortable {
                key: key.clone(),
                available: listing.sortable_keys(),
            });
        }
        if args.desc {
            table.click_header(key);
        }
    }

    table.go_to_page(args.page);
    let view = table.render(&rows, &args.search);
    if view.current_page != args.page {
        eprintln!(
            "page {} is out of range, showing page {} of {}",
            args.page, view.current_page, view.total_pages
        );
    }

    println!("{}\n", listing.title(role));
    println!("{}", render::render_table(&view));

    let Some(index) = args.select else {
        return Ok(());
    };
    match &args.action {
        Some(action) => {
            if !table.trigger_action(&rows, &args.search, index, action) {
                return Err(CliError::NoSuchAction {
                    action: action.clone(),
                    index,
                });
            }
        }
        None => {
            let row = table
                .select_row(&rows, &args.search, index)
                .ok_or(CliError::NoSuchRow(index))?;
            println!("\n{}", render::render_record(row));
        }
    }

    let mut changed = false;
    for request in queue.drain() {
        let outcome = actions::apply(directory, &request).await?;
        println!("\n{}", outcome.message);
        changed |= outcome.changed;
    }
    if changed {
        let rows = load(directory, session, source).await?;
        let view = table.render(&rows, &args.search);
        println!("\n{}", render::render_table(&view));
    }
    Ok(())
}
