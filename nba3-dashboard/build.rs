use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("dashboard.json");

    // Copy the dashboard config to OUT_DIR for include_str.
    // Without one the app runs on built-in defaults.
    let config_src = Path::new("../fixtures/dashboard.json");
    if config_src.exists() {
        fs::copy(config_src, &dest).unwrap();
    } else {
        println!("cargo:warning=fixtures/dashboard.json not found, using default dashboard config");
        fs::write(&dest, "").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/dashboard.json");
}
