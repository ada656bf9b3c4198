mod archive;
mod args;
mod cmd;
mod context;
mod discover;
mod error;
mod groupinfo;
mod manifest;
mod result;
mod tpl;
mod utils;

use args::Args;
use context::Context;
use error::Error;
use groupinfo::GroupInfo;
use manifest::{GROUP_INFO_FILE, Manifest};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // No options; still handles --help / --version
    Args::parse();

    let ctx = Context::from_env()?;

    cliclack::intro("makezip")?;

    let manifest = Manifest::load(&ctx)?;

    // Ask each project for its sources
    let files = {
        let spinner = cliclack::spinner();
        spinner.start("Collecting sources...");
        let files = discover::all(&ctx, &manifest)?;
        spinner.stop(format!("Found {} source files", files.len()));
        files
    };

    let group = match GroupInfo::load(&ctx) {
        Ok(group) => group,
        Err(e @ Error::GroupInfoNotFound(_)) => {
            cliclack::outro_cancel(format!("{} is required", GROUP_INFO_FILE))?;
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    // Echoed on stdout so the user can check what gets submitted
    println!("\nUsing {}:", GROUP_INFO_FILE);
    println!("{}", group.raw.trim_end());
    println!("Identity: {}", group.identity);

    println!("Selected files for inclusion: {:?}", files);

    let name = archive::archive_name(&group.identity);
    let archive_path = archive::create(&ctx, &manifest, &name, &files)?;

    cliclack::outro(format!("Submission packaged: {}", archive_path.display()))?;
    Ok(())
}
