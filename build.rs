use std::env;

fn main() {
    // Allow packaging pipelines to stamp their own version string
    let version = env::var("SHROUD_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "0.0.1".to_string());

    println!("cargo:rustc-env=SHROUD_VERSION={}", version);
    println!("cargo:rerun-if-env-changed=SHROUD_VERSION");
}
