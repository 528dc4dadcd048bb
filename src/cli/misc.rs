use std::{fs::File, io::BufReader, path::Path};

use kb_entail::{
    context::{Context, RulesOk},
    types::err::ErrorKind,
};

/// Reads the rules of a file into the context.
///
/// With the xz feature, files with an `xz` extension are decompressed.
pub fn load_rules(context: &mut Context, path: &Path) -> Result<RulesOk, ErrorKind> {
    let file = File::open(path)?;

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            context.read_rules(BufReader::new(xz2::read::XzDecoder::new(file)))
        }

        _ => context.read_rules(BufReader::new(file)),
    }
}

pub fn examine_rules_report(path: &Path, report: &RulesOk) {
    println!("c Read {} rules ({} clauses) from {path:?}", report.rules, report.clauses);

    for (line, reason) in &report.skipped {
        println!("c Skipped line {line}: {reason}");
    }
}
