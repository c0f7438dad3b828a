//! Precondition check run before any mode.

use super::Project;
use crate::error::{MixError, Result};
use crate::mix::MixTask;

/// The manifest must exist and `mix compile --dry-run` must pass.
pub fn run(project: &Project) -> Result<()> {
    if !project.manifest().exists() {
        return Err(MixError::MissingConfigFile {
            path: project.manifest().path().to_path_buf(),
        });
    }

    project.mix(&MixTask::CompileCheck, "Checking project")?;
    Ok(())
}

/// Render a failed check for stderr.
pub fn describe_failure(project: &Project, err: &MixError) -> String {
    let style = project.style();
    match err {
        MixError::ExternalToolFailure { stderr, .. } => {
            format!("{}\n{}", style.error("mix is errored:"), stderr.trim_end())
        }
        other => style.error(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{FakeMix, MIX_EXS, project_dir};
    use crate::config::Settings;
    use crate::ui::Style;

    #[test]
    fn test_missing_manifest_is_fatal_without_running_mix() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            manifest: dir.path().join("mix.exs"),
            ..Settings::default()
        };
        let mix = FakeMix::default();
        let project = Project::new(&settings, &mix, Style::new(false), false);

        let err = run(&project).unwrap_err();
        assert!(matches!(err, MixError::MissingConfigFile { .. }));
        assert!(describe_failure(&project, &err).ends_with("mix.exs not found."));
        assert!(mix.calls().is_empty());
    }

    #[test]
    fn test_compile_failure_is_fatal() {
        let (_dir, settings) = project_dir(MIX_EXS);
        let mix = FakeMix::default().failing("compile");
        let project = Project::new(&settings, &mix, Style::new(false), false);

        let err = run(&project).unwrap_err();
        assert_eq!(
            describe_failure(&project, &err),
            "ERROR: mix is errored:\n** (Mix) boom"
        );
        assert_eq!(mix.calls(), vec!["compile --dry-run"]);
    }

    #[test]
    fn test_healthy_project_passes() {
        let (_dir, settings) = project_dir(MIX_EXS);
        let mix = FakeMix::default();
        let project = Project::new(&settings, &mix, Style::new(false), false);

        assert!(run(&project).is_ok());
    }
}
