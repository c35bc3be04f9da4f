use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use crate::error::Error;

/// Clone a repository into `target_dir`
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Personal access tokens
/// - Any authentication configured in ~/.gitconfig
///
/// With `shallow` set only the tip of the default branch is fetched, which
/// is enough for reading files but leaves no tags to choose from.
pub fn clone(url: &str, target_dir: &Path, shallow: bool) -> Result<(), Error> {
    // Remove target directory if it exists (git won't clone into existing non-empty dir)
    if target_dir.exists() {
        fs::remove_dir_all(target_dir)?;
    }

    // Create parent directory if it doesn't exist
    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut command = Command::new("git");
    command.args(["clone", "--quiet"]);
    if shallow {
        command.arg("--depth=1");
    }
    command.arg("--").arg(url).arg(target_dir);

    log::debug!("Cloning {} into {}", url, target_dir.display());
    let output = command.output().map_err(|e| Error::GitClone {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Provide helpful error message for common auth failures
        let message = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            format!(
                "Authentication failed. Make sure you have access to the repository.\n\
                For private repos, ensure you have:\n\
                - SSH key added to ssh-agent\n\
                - Git credentials configured\n\
                - Personal access token set up\n\
                Error: {}",
                stderr.trim_end()
            )
        } else {
            stderr.trim_end().to_string()
        };

        return Err(Error::GitClone {
            url: url.to_string(),
            message,
        });
    }

    Ok(())
}

/// List all tags of a cloned repository
pub fn list_tags(repo_dir: &Path) -> Result<Vec<String>, Error> {
    let output = run_in(repo_dir, &["tag", "--list"])?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    Ok(stdout
        .lines()
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect())
}

/// Check out `ref_name` (typically a tag) in a cloned repository
pub fn checkout(repo_dir: &Path, ref_name: &str) -> Result<(), Error> {
    run_in(repo_dir, &["checkout", "--quiet", ref_name])?;
    Ok(())
}

fn run_in(repo_dir: &Path, args: &[&str]) -> Result<Output, Error> {
    let command = args.join(" ");
    log::debug!("Running git {} in {}", command, repo_dir.display());

    let output = Command::new("git")
        .arg("-C")
        .arg(repo_dir)
        .args(args)
        .output()
        .map_err(|e| Error::GitCommand {
            command: command.clone(),
            dir: repo_dir.display().to_string(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command,
            dir: repo_dir.display().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clone_invalid_source_reports_url() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no-such-repo");
        let target = temp_dir.path().join("clone");

        let err = clone(&missing.display().to_string(), &target, false).unwrap_err();
        match err {
            Error::GitClone { url, .. } => assert!(url.contains("no-such-repo")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_clone_treats_dash_url_as_repository() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("clone");

        let err = clone("-bogus", &target, true).unwrap_err();
        match err {
            Error::GitClone { url, message } => {
                assert_eq!(url, "-bogus");
                assert!(message.contains("'-bogus'"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    // Cloning and checking out real repositories is covered by the
    // integration tests, which build local repositories with git.
}
