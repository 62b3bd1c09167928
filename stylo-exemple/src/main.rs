use std::env;
use std::path::{Path, PathBuf};

use log::info;
use stylo_core::{ModelStore, TextModel};

/// Candidate authors: (model name, text file)
const SOURCES: [(&str, &str); 2] = [("Homer", "homer_o.txt"), ("Andersen", "hca.txt")];

/// Texts to attribute to one of the sources
const UNKNOWN: [(&str, &str); 4] = [
    ("Romeo and Juliet", "raj.txt"),
    ("Grimms Tales", "grim.txt"),
    ("Frankenstein", "frank.txt"),
    ("The Iliad", "homer_i.txt"),
];

/// Loads a source model from the store, or builds it from its text file and saves it.
fn source_model(store: &ModelStore, data: &Path, name: &str, file: &str) -> Result<TextModel, Box<dyn std::error::Error>> {
    if store.contains(name) {
        info!("Reusing stored model '{}'", name);
        return Ok(store.load(name)?);
    }
    let mut model = TextModel::new(name);
    model.add_file(data.join(file))?;
    store.save(&model)?;
    Ok(model)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: stylo-exemple [data_dir] [store_dir]
    let mut args = env::args().skip(1);
    let data = PathBuf::from(args.next().unwrap_or_else(|| "./data".to_owned()));
    let store = ModelStore::new(args.next().map(PathBuf::from).unwrap_or_else(|| data.clone()));

    let stored = store.model_names()?;
    if !stored.is_empty() {
        println!("Stored models: {}\n", stored.join(", "));
    }

    let source1 = source_model(&store, &data, SOURCES[0].0, SOURCES[0].1)?;
    let source2 = source_model(&store, &data, SOURCES[1].0, SOURCES[1].1)?;
    println!("{}\n", source1);
    println!("{}\n", source2);

    for (name, file) in UNKNOWN {
        let mut model = TextModel::new(name);
        model.add_file(data.join(file))?;

        let result = model.classify(&source1, &source2)?;
        println!("scores for {} : {}", result.source1, result.scores1);
        println!("scores for {} : {}", result.source2, result.scores2);
        println!("{} ({} vs {} votes)\n", result, result.votes1, result.votes2);
    }

    Ok(())
}
