use clap::{Parser, Subcommand};
use dialoguer::Password;
use showshelf::{
    Credential, DirectoryError, EpisodeDraft, HttpShowDirectory, SessionStore, ShowshelfError,
    add_episode, load_show_list, logout,
};
use std::process;

#[derive(Parser)]
#[command(name = "showshelf", version, about = "Browse your TV show directory and register new episodes")]
struct Cli {
    /// Base URL of the shows API
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the shows visible to your account
    Shows {
        /// Session token; prompted for interactively when omitted
        #[arg(long)]
        token: Option<String>,

        /// Remember the signed-in identity across runs
        #[arg(long)]
        remember: bool,

        /// Identity to remember, e.g. your email
        #[arg(long)]
        user: Option<String>,
    },

    /// Register a new episode for a show
    AddEpisode {
        /// Session token; prompted for interactively when omitted
        #[arg(long)]
        token: Option<String>,

        /// Identifier of the show the episode belongs to
        #[arg(long)]
        show_id: String,

        /// Identifier of the uploaded media asset
        #[arg(long)]
        media_id: String,

        /// Episode title
        #[arg(long)]
        title: String,

        /// Short description of the episode
        #[arg(long, default_value = "")]
        description: String,

        /// Season the episode belongs to
        #[arg(long)]
        season: u32,

        /// Episode number within the season
        #[arg(long)]
        episode_number: u32,
    },

    /// Sign out and forget the remembered identity
    Logout,
}

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let directory = match cli.api_url.as_deref() {
        Some(url) => HttpShowDirectory::new().with_base_url(url),
        None => HttpShowDirectory::new(),
    };

    let result = match cli.command {
        Command::Shows {
            token,
            remember,
            user,
        } => run_shows(&directory, token, remember, user),
        Command::AddEpisode {
            token,
            show_id,
            media_id,
            title,
            description,
            season,
            episode_number,
        } => {
            let draft = EpisodeDraft {
                title,
                description,
                season,
                episode_number,
                media_id,
            };
            run_add_episode(&directory, token, &show_id, &draft)
        }
        Command::Logout => run_logout(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Lists the shows visible to the supplied session token
fn run_shows(
    directory: &HttpShowDirectory,
    token: Option<String>,
    remember: bool,
    user: Option<String>,
) -> Result<(), ShowshelfError> {
    let mut store = SessionStore::open()?;

    // Surface the identity remembered by a previous run, if any
    match store.remembered_profile() {
        Ok(Some(profile)) => {
            if let Some(identity) = profile.identity {
                println!("Welcome back, {}", identity);
            }
        }
        Ok(None) => {}
        Err(e) => log::warn!("could not read remembered profile: {}", e),
    }

    let token = obtain_token(token);
    store.set_credential(Credential {
        token,
        remember_me: remember,
        identity: user,
    })?;

    let shows = match load_show_list(&store, directory) {
        Ok(shows) => shows,
        Err(e) => {
            if matches!(e, DirectoryError::Http { status: 401 | 403 }) {
                eprintln!("The server rejected your session. Please sign in again.");
            }
            return Err(e.into());
        }
    };

    if shows.is_empty() {
        println!("No shows available for this account.");
        return Ok(());
    }

    println!("Your shows:\n");
    for show in &shows {
        match &show.description {
            Some(description) => println!("  {}  {} - {}", show.id, show.title, description),
            None => println!("  {}  {}", show.id, show.title),
        }
    }

    Ok(())
}

/// Registers a new episode for a show
fn run_add_episode(
    directory: &HttpShowDirectory,
    token: Option<String>,
    show_id: &str,
    draft: &EpisodeDraft,
) -> Result<(), ShowshelfError> {
    let mut store = SessionStore::open()?;

    let token = obtain_token(token);
    store.set_credential(Credential::new(token))?;

    match add_episode(&store, directory, show_id, draft) {
        Ok(()) => {
            println!("Episode added.");
            Ok(())
        }
        Err(e) => {
            // The user gets one generic message regardless of the cause;
            // the distinguishing kind only goes to the log
            log::warn!("episode submission failed: {}", e);
            eprintln!("Could not add new episode. Please check the validity of the provided data.");
            process::exit(1);
        }
    }
}

/// Signs out, clearing the session and any remembered identity
fn run_logout() -> Result<(), ShowshelfError> {
    let mut store = SessionStore::open()?;
    logout(&mut store)?;

    println!("Signed out.");
    Ok(())
}

/// Returns the token from the flag, or prompts for it interactively
fn obtain_token(token: Option<String>) -> String {
    match token {
        Some(token) => token,
        None => match Password::new().with_prompt("Session token").interact() {
            Ok(token) => token,
            Err(e) => {
                eprintln!("Error: could not read session token: {}", e);
                process::exit(1);
            }
        },
    }
}
