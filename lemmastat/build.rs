//! Compiles the language configurations in configs/ into one file so they can be inlined.
//! These configs are included at compile time because they define the language-specific parameters of the
//! lemmatizer pipelines and stopword filters. They are NOT user configuration.

use fs::File;
use fs_err as fs;
use std::{collections::BTreeMap, io::BufWriter, path::Path};

fn main() {
    let path = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(path).join("configs");

    let out_dir =
        std::env::var("OUT_DIR").expect("OUT_DIR env var must be set when build.rs is run");
    let out_dir = Path::new(&out_dir);

    println!("cargo:rerun-if-changed={}", path.display());

    let mut config_map: BTreeMap<String, serde_json::Value> = BTreeMap::new();

    for entry in fs::read_dir(&path).expect("must be able to read config dir") {
        let entry = entry.expect("must be able to read config dir entry");

        if entry.path().is_dir() {
            let lang_code = entry
                .path()
                .file_name()
                .expect("directory must have name")
                .to_str()
                .expect("directory name must be unicode")
                .to_string();

            let path = entry.path().join("pipeline.json");

            println!("cargo:rerun-if-changed={}", path.display());

            let json_str = fs::read_to_string(path)
                .unwrap_or_else(|_| panic!("pipeline.json for '{}' must exist", lang_code));

            config_map.insert(
                lang_code,
                serde_json::from_str(&json_str)
                    .expect("pipeline.json for language must be valid json"),
            );
        }
    }

    let config_writer = BufWriter::new(
        File::create(out_dir.join("pipeline_configs.json"))
            .expect("must be able to create file in out dir"),
    );
    serde_json::to_writer_pretty(config_writer, &config_map)
        .expect("must be able to write JSON to file");
}
