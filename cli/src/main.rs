mod http;
mod render;

use clap::{Args, Parser, Subcommand};
use records::{GroupChoice, LeadEditor, LeadForm, LeadType, RemoteError, SubmitOutcome, TranscriptBrowser, ValidationError};
use uuid::Uuid;

use crate::http::ApiClient;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

#[derive(Parser, Debug)]
#[command(name = "growthlens", about = "GrowthLens leads and sample transcripts CLI")]
struct Cli {
    #[arg(long, env = "GROWTHLENS_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    Transcripts(TranscriptsCommand),
    Leads(LeadsCommand),
    Groups(GroupsCommand),
}

#[derive(Args, Debug)]
struct TranscriptsCommand {
    #[command(subcommand)]
    command: TranscriptsSubcommand,
}

#[derive(Subcommand, Debug)]
enum TranscriptsSubcommand {
    List,
    Show {
        transcript_id: Uuid,
    },
    /// Write the raw transcript text to stdout.
    Use {
        transcript_id: Uuid,
    },
}

#[derive(Args, Debug)]
struct LeadsCommand {
    #[command(subcommand)]
    command: LeadsSubcommand,
}

#[derive(Subcommand, Debug)]
enum LeadsSubcommand {
    List,
    Show {
        lead_id: Uuid,
    },
    Update {
        lead_id: Uuid,
        #[command(flatten)]
        changes: LeadOverrides,
    },
}

#[derive(Args, Debug)]
struct GroupsCommand {
    #[command(subcommand)]
    command: GroupsSubcommand,
}

#[derive(Subcommand, Debug)]
enum GroupsSubcommand {
    List,
}

/// Field overrides applied on top of the stored lead before submitting.
#[derive(Args, Debug, Default)]
struct LeadOverrides {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    contact: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long, help = "Hot, Warm, Warm-Cold or Cold")]
    lead_type: Option<LeadType>,
    #[arg(long, conflicts_with = "no_group")]
    group: Option<Uuid>,
    #[arg(long, default_value_t = false)]
    no_group: bool,
}

impl LeadOverrides {
    fn apply(self, form: &mut LeadForm) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(email) = self.email {
            form.email = email;
        }
        if let Some(contact) = self.contact {
            form.contact = contact;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(lead_type) = self.lead_type {
            form.lead_type = lead_type;
        }
        if let Some(group_id) = self.group {
            form.group = GroupChoice::Group(group_id);
        } else if self.no_group {
            form.group = GroupChoice::None;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let api = ApiClient::new(&cli.base_url);

    match cli.command {
        Command::Ping => {
            api.ping().await?;
            println!("ok");
            Ok(())
        }
        Command::Transcripts(cmd) => run_transcripts(&api, cmd).await,
        Command::Leads(cmd) => run_leads(&api, cmd).await,
        Command::Groups(cmd) => match cmd.command {
            GroupsSubcommand::List => {
                println!("{}", render::group_rows(&api.lead_groups().await?));
                Ok(())
            }
        },
    }
}

async fn run_transcripts(api: &ApiClient, cmd: TranscriptsCommand) -> Result<(), CliError> {
    let mut browser = TranscriptBrowser::default();
    browser.load(api.sample_transcripts().await?);

    match cmd.command {
        TranscriptsSubcommand::List => {
            println!("{}", render::transcript_rows(browser.transcripts()));
            Ok(())
        }
        TranscriptsSubcommand::Show { transcript_id } => {
            let transcript = select(&mut browser, transcript_id)?;
            println!("{}", render::transcript_detail(transcript));
            Ok(())
        }
        TranscriptsSubcommand::Use { transcript_id } => {
            select(&mut browser, transcript_id)?;
            let consumer = |text: String| print!("{text}");
            if let Some(toast) = browser.use_selected(Some(consumer)) {
                eprintln!("{}", render::toast_line(&toast));
            }
            Ok(())
        }
    }
}

fn select(browser: &mut TranscriptBrowser, transcript_id: Uuid) -> Result<&records::SampleTranscript, CliError> {
    if !browser.select(transcript_id) {
        return Err(CliError::NotFound { kind: "transcript", id: transcript_id });
    }
    browser.selected().ok_or(CliError::NotFound { kind: "transcript", id: transcript_id })
}

async fn run_leads(api: &ApiClient, cmd: LeadsCommand) -> Result<(), CliError> {
    match cmd.command {
        LeadsSubcommand::List => {
            println!("{}", render::lead_rows(&api.leads().await?));
            Ok(())
        }
        LeadsSubcommand::Show { lead_id } => {
            println!("{}", render::lead_detail(&api.lead(lead_id).await?));
            Ok(())
        }
        LeadsSubcommand::Update { lead_id, changes } => {
            let lead = api.lead(lead_id).await?;
            let mut editor = LeadEditor::open(&lead);
            changes.apply(editor.form_mut());

            let outcome = editor.submit(api).await;
            eprintln!("{}", render::toast_line(&outcome.toast()));
            match outcome {
                SubmitOutcome::Saved(lead) => {
                    println!("{}", render::lead_detail(&lead));
                    Ok(())
                }
                SubmitOutcome::Invalid(err) => Err(err.into()),
                SubmitOutcome::Failed(err) => Err(err.into()),
            }
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
