fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/romaji/default_kana.toml",
        include_str!("src/romaji/default_kana.toml"),
    );
    validate_toml(
        "src/target/tables/toki_pona.toml",
        include_str!("src/target/tables/toki_pona.toml"),
    );
    validate_toml(
        "src/target/tables/russian.toml",
        include_str!("src/target/tables/russian.toml"),
    );
    validate_toml(
        "src/target/tables/ukrainian.toml",
        include_str!("src/target/tables/ukrainian.toml"),
    );
    validate_toml(
        "src/target/tables/lithuanian.toml",
        include_str!("src/target/tables/lithuanian.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    println!("cargo:rerun-if-changed={path}");
    if toml::from_str::<toml::Table>(content).is_err() {
        panic!("{path} contains invalid TOML");
    }
}
