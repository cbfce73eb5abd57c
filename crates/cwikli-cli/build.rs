use chrono::Local;
use std::process::Command;

/// Run git in the workspace and return its trimmed stdout on success.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() {
    let build_hash = match git(&["rev-parse", "--short", "HEAD"]) {
        // Uncommitted changes to tracked files get a build timestamp appended
        Some(hash) if git(&["diff", "--quiet", "HEAD"]).is_none() => {
            format!("{hash}-dirty-{}", Local::now().format("%Y%m%d-%H%M%S"))
        }
        Some(hash) => hash,
        None => "unknown".to_string(),
    };

    println!("cargo:rustc-env=BUILD_HASH={build_hash}");

    // .git lives at the workspace root, two levels up
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");
}
