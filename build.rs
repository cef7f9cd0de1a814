use std::process::Command;

fn main() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());

    // Git commit hash if available
    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=COLUMNA_GIT_HASH={}", git_hash);
    println!(
        "cargo:rustc-env=COLUMNA_PROFILE={}",
        if profile == "release" { "release" } else { "development" }
    );
    println!("cargo:rerun-if-env-changed=PROFILE");
}
