use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn main() {
    // Shown by `linescribe --version`
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=LINESCRIBE_GIT_HASH={hash}");

    if let Some(git_dir) = resolve_git_dir() {
        emit_rerun(&git_dir.join("HEAD"));
        emit_rerun(&git_dir.join("refs"));
        emit_rerun(&git_dir.join("packed-refs"));
    }
}

fn resolve_git_dir() -> Option<PathBuf> {
    if let Some(from_env) = env::var_os("GIT_DIR") {
        return Some(PathBuf::from(from_env));
    }

    let dot_git = PathBuf::from(".git");
    if dot_git.is_dir() {
        return Some(dot_git);
    }

    if dot_git.is_file() {
        let contents = fs::read_to_string(&dot_git).ok()?;
        let rest = contents.strip_prefix("gitdir:")?;
        let resolved = PathBuf::from(rest.trim());
        if resolved.is_relative() {
            return Some(PathBuf::from(".").join(resolved));
        }
        return Some(resolved);
    }

    None
}

fn emit_rerun(path: &Path) {
    match path.to_str() {
        Some(display) if path.exists() => println!("cargo:rerun-if-changed={display}"),
        _ => {}
    }
}
