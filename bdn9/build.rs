use std::path::{Path, PathBuf};
use std::{env, fs};

use bdn9_config::KeyboardTomlConfig;
use const_gen::*;

fn main() {
    // Ensure build.rs is re-run when files change
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=KEYBOARD_TOML_PATH");

    // Use keyboard.toml next to Cargo.toml unless another one is given
    let toml_path = match env::var("KEYBOARD_TOML_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => Path::new(&env::var("CARGO_MANIFEST_DIR").unwrap()).join("keyboard.toml"),
    };
    println!("cargo:rerun-if-changed={}", toml_path.display());

    let config = match KeyboardTomlConfig::new_from_toml_path(&toml_path) {
        Ok(config) => config,
        Err(e) => panic!("❌ {}", e),
    };

    // Write to constants.rs file
    let constants = get_constants_str(&config);
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("constants.rs");
    fs::write(&dest_path, constants).expect("Failed to write constants.rs file");
}

fn get_constants_str(config: &KeyboardTomlConfig) -> String {
    let layout = config.get_layout_config();
    let backlight = config.get_backlight_config();
    let rows = layout.rows as usize;
    let cols = layout.cols as usize;
    let layers = layout.layers as usize;
    let info = config.get_keyboard_info();
    let vendor_id = info.vendor_id;
    let product_id = info.product_id;
    let manufacturer = info.manufacturer.as_deref().unwrap_or("Unknown");
    let encoder_names: Vec<&str> = config.get_encoder_config().iter().map(|e| e.name.as_str()).collect();
    let num_encoder = encoder_names.len();

    let constant_strs = vec![
        // Matrix
        const_declaration!(pub ROW = rows),
        const_declaration!(pub COL = cols),
        const_declaration!(pub NUM_LAYER = layers),
        const_declaration!(pub NUM_ENCODER = num_encoder),
        // Backlight
        const_declaration!(pub BACKLIGHT_LEVELS = backlight.levels),
        const_declaration!(pub BREATHING_PERIOD = backlight.breathing_period),
        const_declaration!(pub DIM_LEVEL = backlight.dim_level),
        const_declaration!(pub BRIGHT_LEVEL = backlight.bright_level),
        // Keyboard info
        const_declaration!(pub VENDOR_ID = vendor_id),
        const_declaration!(pub PRODUCT_ID = product_id),
        format!("pub const PRODUCT_NAME: &str = {:?};", info.product_name()),
        format!("pub const MANUFACTURER: &str = {:?};", manufacturer),
        format!("pub const ENCODER_NAMES: [&str; NUM_ENCODER] = {:?};", encoder_names),
    ];

    constant_strs.join("\n")
}
