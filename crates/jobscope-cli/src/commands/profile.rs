//! Energy profile commands.
//!
//! The profile is only ever replaced through `profile update`, which bumps
//! its version and archives the previous revision.

use clap::Subcommand;
use std::path::{Path, PathBuf};

use jobscope_core::energy::{Profile, ProfileVersion};
use jobscope_core::ProfileStore;

use super::today;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Write a starter profile to the data directory
    Init {
        /// Overwrite an existing profile
        #[arg(long)]
        force: bool,
    },
    /// Show the current profile
    Show {
        /// Show an archived version instead (e.g. "1.0")
        #[arg(long)]
        version: Option<ProfileVersion>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a profile YAML file without storing it
    Validate {
        /// Path to the profile YAML
        file: PathBuf,
    },
    /// Replace the profile with an edited draft, bumping its version
    Update {
        /// Path to the edited profile YAML
        file: PathBuf,
    },
    /// List archived profile versions
    History,
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Init { force } => init(force),
        ProfileAction::Show { version, json } => show(version, json),
        ProfileAction::Validate { file } => validate(&file),
        ProfileAction::Update { file } => update(&file),
        ProfileAction::History => history(),
    }
}

fn init(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = ProfileStore::open()?;
    if store.exists() && !force {
        return Err(format!(
            "profile already exists at {} (use --force to overwrite)",
            store.path().display()
        )
        .into());
    }

    let profile = Profile::starter(today())?;
    store.save(&profile)?;
    println!("Profile created: {}", store.path().display());
    println!("  Version: {}", profile.version);
    println!("  Edit a copy and apply it with `jobscope profile update <file>`.");
    Ok(())
}

fn show(
    version: Option<ProfileVersion>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = ProfileStore::open()?;
    let profile = match version {
        Some(version) => store.load_version(version)?,
        None => store.load()?,
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", serde_yaml::to_string(&profile)?);
    }
    Ok(())
}

fn validate(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let profile = Profile::from_yaml_file(file)?;
    println!(
        "ok: profile v{} ({} drains, {} generators, {} strengths)",
        profile.version,
        profile.energy_drains.len(),
        profile.energy_generators.len(),
        profile.core_strengths.len(),
    );
    Ok(())
}

fn update(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let draft = Profile::from_yaml_file(file)?;
    let store = ProfileStore::open()?;
    let previous = store.load()?.version;
    let next = store.update(today(), move |profile| *profile = draft)?;

    println!("Profile updated: v{} -> v{}", previous, next.version);
    println!("  Last updated: {}", next.last_updated);
    Ok(())
}

fn history() -> Result<(), Box<dyn std::error::Error>> {
    let store = ProfileStore::open()?;
    let current = store.load()?;
    let versions = store.history()?;

    println!("Profile history:");
    for version in versions {
        println!("  v{version}");
    }
    println!("  v{} (current, {})", current.version, current.last_updated);
    Ok(())
}
