use chrono::Datelike;

fn main() {
    // Capture the build year for the footer copyright line
    let build_year = chrono::Utc::now().year();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
