use clap::Subcommand;
use std::path::{Path, PathBuf};

use jobscope_core::energy::{
    EnergyMatrix, EnergySynthesis, Profile, Quadrant, QuadrantCalculator, VersionAdvisory,
};
use jobscope_core::storage::load_task_file;
use jobscope_core::{CompanyStore, Config, ProfileStore};

use super::today;

#[derive(Subcommand)]
pub enum MatrixAction {
    /// Classify a task list against the profile and synthesize the result
    Classify {
        /// Path to a YAML task list
        file: PathBuf,
        /// Company name (defaults to the task file name)
        #[arg(long)]
        company: Option<String>,
        /// Use this profile file instead of the stored profile
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Store the evaluation under the company directory
        #[arg(long)]
        save: bool,
        /// Show the score breakdown for every task
        #[arg(long)]
        explain: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a stored evaluation
    Show {
        /// Company name or slug
        company: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List companies with stored evaluations
    List,
}

pub fn run(action: MatrixAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MatrixAction::Classify {
            file,
            company,
            profile,
            save,
            explain,
            json,
        } => classify(&file, company, profile.as_deref(), save, explain, json),
        MatrixAction::Show { company, json } => show(&company, json),
        MatrixAction::List => list(),
    }
}

fn load_profile(path: Option<&Path>) -> Result<Profile, Box<dyn std::error::Error>> {
    let profile = match path {
        Some(path) => Profile::from_yaml_file(path)?,
        None => ProfileStore::open()?.load()?,
    };
    Ok(profile)
}

fn classify(
    file: &Path,
    company: Option<String>,
    profile_path: Option<&Path>,
    save: bool,
    explain: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let profile = load_profile(profile_path)?;
    let tasks = load_task_file(file)?;

    let company = company.unwrap_or_else(|| {
        file.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string())
    });

    let matrix = EnergyMatrix::evaluate(&company, &tasks, &profile, &config.matrix, today());

    let calculator = QuadrantCalculator::new(config.matrix.weights.clone());
    let scores: Vec<_> = if explain {
        matrix
            .tasks
            .iter()
            .map(|task| calculator.explain(&task.characteristics, &profile))
            .collect()
    } else {
        Vec::new()
    };

    if json {
        let output = if explain {
            serde_json::json!({ "matrix": matrix, "scores": scores })
        } else {
            serde_json::to_value(&matrix)?
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_matrix(&matrix);
        if explain {
            println!();
            println!("Score breakdown:");
            for (task, score) in matrix.tasks.iter().zip(&scores) {
                println!("  {}", task.description);
                println!(
                    "    strength {:+} ({}), energy {:+} ({})",
                    score.strength_score,
                    if score.good_at { "good at" } else { "not good at" },
                    score.energy_score,
                    if score.energizes { "energizing" } else { "draining" },
                );
                if !score.matched_strengths.is_empty() {
                    println!("    strengths:  {}", join(&score.matched_strengths));
                }
                if score.growth_bonus_applied {
                    println!("    growth bonus applied");
                }
                if !score.matched_drains.is_empty() {
                    println!("    drains:     {}", join(&score.matched_drains));
                }
                if !score.matched_generators.is_empty() {
                    println!("    generators: {}", join(&score.matched_generators));
                }
                if !score.violated_coherence_needs.is_empty() {
                    println!("    coherence:  {}", score.violated_coherence_needs.join(", "));
                }
            }
        }
    }

    if save || config.evaluation.auto_save {
        let path = CompanyStore::open()?.save(&matrix)?;
        if !json {
            println!();
            println!("Saved: {}", path.display());
        }
    }

    Ok(())
}

fn show(company: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let matrix = CompanyStore::open()?.load(company)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
    } else {
        print_matrix(&matrix);
    }

    if config.evaluation.warn_on_stale_profile {
        let profiles = ProfileStore::open()?;
        if profiles.exists() {
            let current = profiles.load()?;
            if let VersionAdvisory::Stale {
                evaluated_with,
                current,
            } = matrix.check_profile_version(&current)
            {
                eprintln!(
                    "note: evaluated with profile v{evaluated_with}; \
                     current profile is v{current}. \
                     Re-run `jobscope matrix classify` to refresh."
                );
            }
        }
    }

    Ok(())
}

fn list() -> Result<(), Box<dyn std::error::Error>> {
    let store = CompanyStore::open()?;
    let companies = store.list()?;
    if companies.is_empty() {
        println!("No evaluations stored.");
        return Ok(());
    }

    for slug in companies {
        let matrix = store.load(&slug)?;
        println!(
            "{:<24} {:<7} v{:<6} {}",
            slug,
            matrix.synthesis.sustainability.to_string(),
            matrix.profile_version.to_string(),
            matrix.evaluated_on
        );
    }
    Ok(())
}

fn print_matrix(matrix: &EnergyMatrix) {
    println!(
        "{} (profile v{}, {})",
        matrix.company, matrix.profile_version, matrix.evaluated_on
    );
    println!();
    println!("  {:<16} {:<8} TASK", "QUADRANT", "SHARE");
    for task in &matrix.tasks {
        let quadrant = task
            .quadrant
            .map(|q| q.as_str())
            .unwrap_or("unclassified");
        println!(
            "  {:<16} {:<8} {}",
            quadrant,
            task.time_share.as_str(),
            task.description
        );
    }
    println!();
    print_synthesis(&matrix.synthesis);
}

fn print_synthesis(synthesis: &EnergySynthesis) {
    println!("Distribution:");
    for quadrant in Quadrant::ALL {
        let bucket = synthesis.distribution.get(quadrant);
        println!(
            "  {:<16} {:>3}%  {:<7} ({} task{})",
            quadrant.as_str(),
            bucket.percentage,
            bucket.zone.to_string(),
            bucket.task_count,
            if bucket.task_count == 1 { "" } else { "s" },
        );
    }

    let checks = &synthesis.thresholds;
    println!();
    println!("Thresholds:");
    println!("  green minimum met:     {}", yes_no(checks.meets_green_minimum));
    println!("  red maximum exceeded:  {}", yes_no(checks.exceeds_red_maximum));
    println!("  yellow maximum exceeded: {}", yes_no(checks.exceeds_yellow_maximum));
    println!();
    println!("Sustainability: {}", synthesis.sustainability);

    if !synthesis.decision_factors.is_empty() {
        println!("Decision factors:");
        for factor in &synthesis.decision_factors {
            println!("  - {factor}");
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_uses_display_names() {
        use jobscope_core::energy::DrainKind;
        let joined = join(&[DrainKind::InterpersonalConflict, DrainKind::Misalignment]);
        assert_eq!(joined, "interpersonal_conflict, misalignment");
    }

    #[test]
    fn yes_no_labels() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }
}
