use crate::cmd;
use crate::context::Context;
use crate::error::Error;
use crate::manifest::{ASSIGNMENT, COURSE, GROUP_INFO_FILE, Manifest};
use crate::result::Result;
use crate::tpl::Tpl;
use crate::utils;
use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Archive file name template
const ARCHIVE_NAME: &str = "$COURSE-P$ASSIGNMENT-$IDENTITY.zip";

/// `STY25-P9-<identity>.zip`
pub fn archive_name(identity: &str) -> String {
    let mut tpl = Tpl::new();
    tpl.register("COURSE", COURSE);
    tpl.register("ASSIGNMENT", ASSIGNMENT.to_string());
    tpl.register("IDENTITY", identity);
    tpl.parse(ARCHIVE_NAME)
}

/// Inputs of the archive: discovered sources followed by the group info file
pub fn inputs(files: &[String]) -> Vec<String> {
    files
        .iter()
        .cloned()
        .chain(std::iter::once(GROUP_INFO_FILE.to_string()))
        .collect()
}

/// Package `files` and the group info file into `name` inside the submission directory
///
/// Returns the absolute archive path. The archiver's exit status is not
/// inspected; only a failure to start it at all switches to the built-in writer.
pub fn create(ctx: &Context, manifest: &Manifest, name: &str, files: &[String]) -> Result<PathBuf> {
    let archive_path = utils::absolute(&ctx.base_dir, Path::new(name));
    println!("\nCreating file {}", archive_path.display());

    let inputs = inputs(files);
    let mut args: Vec<&str> = vec!["-v", "-j", name];
    args.extend(inputs.iter().map(String::as_str));

    match cmd::execute(ctx, &manifest.archiver, &args) {
        Ok(_status) => {}
        Err(Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            cliclack::log::warning(format!(
                "{} not found, writing {} directly",
                manifest.archiver, name
            ))?;
            create_zip_file(ctx, &inputs, &archive_path)?;
        }
        Err(e) => return Err(e),
    }

    Ok(archive_path)
}

/// Write a Deflate zip storing each input under its bare file name
fn create_zip_file(ctx: &Context, inputs: &[String], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut seen = HashSet::new();
    for input in inputs {
        let src = ctx.path(input);
        let Some(name) = src.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };

        if !src.is_file() {
            cliclack::log::warning(format!("{} not found, skipping", input))?;
            continue;
        }
        if !seen.insert(name.clone()) {
            cliclack::log::warning(format!("{} already added as {}, skipping", input, name))?;
            continue;
        }

        if ctx.verbose {
            println!("  adding: {}", name);
        }
        zip.start_file(name, options)?;
        let mut f = File::open(&src)?;
        io::copy(&mut f, &mut zip)?;
    }

    zip.finish()?;
    Ok(())
}
