//! `--pkg-rm`: drop declarations, then unlock and clean in one batch.

use super::Project;
use crate::mix::MixTask;

#[derive(Debug, Default)]
pub struct RemoveReport {
    pub removed: Vec<String>,
    pub missing: Vec<String>,
    pub failed: Vec<String>,
    /// Whether both `deps.unlock` and `deps.clean` ran and succeeded.
    pub cleaned: bool,
}

pub fn run(project: &Project, names: &[String]) -> RemoveReport {
    let style = project.style();
    let file = project.manifest_name();
    let mut report = RemoveReport::default();

    println!(
        "\n{}\n",
        style.info(format!("Removing dependencies from {}...", file))
    );

    for name in names {
        match project.manifest().remove(name) {
            Ok(true) => {
                println!(
                    "{}",
                    style.success("Removed", format!("{} from {}", name, file))
                );
                report.removed.push(name.clone());
            }
            Ok(false) => {
                println!(
                    "{}",
                    style.warning("Skipping", format!("{} not found in {}", name, file))
                );
                report.missing.push(name.clone());
            }
            Err(err) => {
                eprintln!("{}", style.error(err.to_string()));
                report.failed.push(name.clone());
            }
        }
    }

    if report.removed.is_empty() {
        return report;
    }

    // mix ignores names it has nothing locked or fetched for, so every
    // requested name is passed through.
    println!("\n{}", style.info("Unlocking dependencies from mix.lock..."));
    let unlocked = project
        .mix(&MixTask::DepsUnlock(names.to_vec()), "Unlocking")
        .map_err(|err| project.report_failure("Failed to run mix deps.unlock", &err))
        .is_ok();

    println!(
        "\n{}",
        style.info("Cleaning dependencies from deps directory...")
    );
    let cleaned = project
        .mix(&MixTask::DepsClean(names.to_vec()), "Cleaning")
        .map_err(|err| project.report_failure("Failed to run mix deps.clean", &err))
        .is_ok();

    if unlocked && cleaned {
        println!("\n{}", style.done("Dependencies fully removed!"));
        report.cleaned = true;
    }

    report
}
