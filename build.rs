const FORMAT_PATH: &str = "src/xml/default_format.toml";
const FORMAT_SECTIONS: [&str; 3] = ["wordlist", "bigram", "shortcut"];

fn main() {
    println!("cargo:rerun-if-changed={FORMAT_PATH}");
    // Validate the embedded tag configuration at compile time.
    validate_format(include_str!("src/xml/default_format.toml"));
}

fn validate_format(content: &str) {
    let table: toml::Table = match toml::from_str(content) {
        Ok(table) => table,
        Err(e) => panic!("{FORMAT_PATH} contains invalid TOML: {e}"),
    };
    for section in FORMAT_SECTIONS {
        match table.get(section) {
            Some(toml::Value::Table(_)) => {}
            Some(_) => panic!("{FORMAT_PATH}: [{section}] must be a table"),
            None => panic!("{FORMAT_PATH}: missing [{section}] section"),
        }
    }
}
